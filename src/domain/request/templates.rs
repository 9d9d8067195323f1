use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainId, Limit, Pagination};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `GET templates`, optionally scoped to one domain.
pub struct TemplatesListRequest {
    pub(crate) domain_id: Option<DomainId>,
    pub(crate) pagination: Pagination,
}

impl TemplatesListRequest {
    pub fn domain_id(&self) -> Option<&DomainId> {
        self.domain_id.as_ref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplatesBuilder {
    domain_id: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl TemplatesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn first_page(self) -> Self {
        self.page(1)
    }

    pub fn min_limit(self) -> Self {
        self.limit(Limit::MIN)
    }

    pub fn max_limit(self) -> Self {
        self.limit(Limit::MAX)
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<TemplatesListRequest, ValidationError> {
        Ok(TemplatesListRequest {
            domain_id: self.domain_id.clone().map(DomainId::new).transpose()?,
            pagination: Pagination::from_raw(self.page, self.limit)?,
        })
    }
}
