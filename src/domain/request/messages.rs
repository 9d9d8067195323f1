use crate::domain::validation::ValidationError;
use crate::domain::value::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// `GET messages`.
pub struct MessagesListRequest {
    pub(crate) pagination: Pagination,
}

impl MessagesListRequest {
    pub fn new(pagination: Pagination) -> Self {
        Self { pagination }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessagesBuilder {
    page: Option<u32>,
    limit: Option<u32>,
}

impl MessagesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<MessagesListRequest, ValidationError> {
        Ok(MessagesListRequest::new(Pagination::from_raw(
            self.page, self.limit,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_bounds() {
        let request = MessagesBuilder::new().build_list_request().unwrap();
        assert_eq!(request.pagination(), Pagination::default());

        assert!(MessagesBuilder::new().page(0).build_list_request().is_err());
        assert!(MessagesBuilder::new().limit(101).build_list_request().is_err());
    }
}
