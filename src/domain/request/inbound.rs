use crate::domain::enums::{ForwardType, InboundComparer, InboundFilterType, MatchType};
use crate::domain::request::{ensure_distinct, ensure_max_items, ensure_min_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    DomainId, EmailAddress, InboundId, Pagination, ensure_max_chars, non_empty_trimmed,
    parse_http_url,
};

/// Limit on names, values, keys, and domains in inbound routes.
pub const INBOUND_MAX_VALUE_CHARS: usize = 191;
pub const INBOUND_MAX_FILTERS: usize = 5;
pub const INBOUND_MAX_FORWARDS: usize = 5;

const MAX_PRIORITY: u8 = 100;

fn bounded(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into().trim().to_owned();
    ensure_max_chars(field, &value, INBOUND_MAX_VALUE_CHARS)?;
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One condition inside a filter group.
pub struct InboundFilter {
    pub(crate) comparer: InboundComparer,
    pub(crate) value: String,
    pub(crate) key: Option<String>,
}

impl InboundFilter {
    pub fn new(
        comparer: InboundComparer,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            comparer,
            value: bounded("filters.value", value)?,
            key: None,
        })
    }

    /// Header condition; `key` is the header name.
    pub fn header(
        key: impl Into<String>,
        comparer: InboundComparer,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let key = non_empty_trimmed("filters.key", key)?;
        ensure_max_chars("filters.key", &key, INBOUND_MAX_VALUE_CHARS)?;
        Ok(Self {
            key: Some(key),
            ..Self::new(comparer, value)?
        })
    }

    pub fn comparer(&self) -> InboundComparer {
        self.comparer
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `catch_filter` / `match_filter` payload.
pub struct InboundFilterGroup {
    pub(crate) kind: InboundFilterType,
    pub(crate) filters: Vec<InboundFilter>,
}

impl InboundFilterGroup {
    pub fn new(
        kind: InboundFilterType,
        filters: Vec<InboundFilter>,
    ) -> Result<Self, ValidationError> {
        ensure_max_items("filters", filters.len(), INBOUND_MAX_FILTERS)?;
        if kind == InboundFilterType::MatchHeader && filters.iter().any(|f| f.key.is_none()) {
            return Err(ValidationError::RequiredWhen {
                field: "filters.key",
                condition: "type is match_header",
            });
        }
        Ok(Self { kind, filters })
    }

    pub fn kind(&self) -> InboundFilterType {
        self.kind
    }

    pub fn filters(&self) -> &[InboundFilter] {
        &self.filters
    }

    fn is_catch(&self) -> bool {
        matches!(
            self.kind,
            InboundFilterType::CatchAll | InboundFilterType::CatchRecipient
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where a matched message is delivered.
pub struct InboundForward {
    pub(crate) kind: ForwardType,
    pub(crate) value: String,
    pub(crate) secret: Option<String>,
}

impl InboundForward {
    pub fn email(address: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed("forwards.value", address)?;
        ensure_max_chars("forwards.value", &value, INBOUND_MAX_VALUE_CHARS)?;
        let address = EmailAddress::new(value)?;
        Ok(Self {
            kind: ForwardType::Email,
            value: address.as_str().to_owned(),
            secret: None,
        })
    }

    /// Webhook destination; `secret` signs the forwarded payload.
    pub fn webhook(
        url: impl Into<String>,
        secret: Option<String>,
    ) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed("forwards.value", url)?;
        ensure_max_chars("forwards.value", &value, INBOUND_MAX_VALUE_CHARS)?;
        parse_http_url("forwards.value", &value)?;
        Ok(Self {
            kind: ForwardType::Webhook,
            value,
            secret,
        })
    }

    pub fn kind(&self) -> ForwardType {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Route definition shared by create and update.
pub struct InboundRoute {
    pub(crate) name: String,
    pub(crate) domain_enabled: bool,
    pub(crate) inbound_domain: Option<String>,
    pub(crate) inbound_priority: Option<u8>,
    pub(crate) catch_filter: InboundFilterGroup,
    pub(crate) catch_type: Option<MatchType>,
    pub(crate) match_filter: InboundFilterGroup,
    pub(crate) match_type: Option<MatchType>,
    pub(crate) forwards: Vec<InboundForward>,
}

impl InboundRoute {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        domain_enabled: bool,
        inbound_domain: Option<String>,
        inbound_priority: Option<u8>,
        catch_filter: InboundFilterGroup,
        catch_type: Option<MatchType>,
        match_filter: InboundFilterGroup,
        match_type: Option<MatchType>,
        forwards: Vec<InboundForward>,
    ) -> Result<Self, ValidationError> {
        let name = non_empty_trimmed("name", name)?;
        ensure_max_chars("name", &name, INBOUND_MAX_VALUE_CHARS)?;

        let inbound_domain = inbound_domain
            .map(|d| bounded("inbound_domain", d))
            .transpose()?
            .filter(|d| !d.is_empty());

        if let Some(priority) = inbound_priority.filter(|p| *p > MAX_PRIORITY) {
            return Err(ValidationError::OutOfRange {
                field: "inbound_priority",
                min: 0,
                max: i64::from(MAX_PRIORITY),
                actual: i64::from(priority),
            });
        }

        if domain_enabled {
            if inbound_domain.is_none() {
                return Err(ValidationError::RequiredWhen {
                    field: "inbound_domain",
                    condition: "domain_enabled is true",
                });
            }
            if inbound_priority.is_none() {
                return Err(ValidationError::RequiredWhen {
                    field: "inbound_priority",
                    condition: "domain_enabled is true",
                });
            }
        }

        if !catch_filter.is_catch() {
            return Err(ValidationError::InvalidValue {
                field: "catch_filter.type",
                value: catch_filter.kind.as_str().to_owned(),
            });
        }
        if match_filter.is_catch() {
            return Err(ValidationError::InvalidValue {
                field: "match_filter.type",
                value: match_filter.kind.as_str().to_owned(),
            });
        }

        ensure_min_items("forwards", forwards.len(), 1)?;
        ensure_max_items("forwards", forwards.len(), INBOUND_MAX_FORWARDS)?;
        ensure_distinct("forwards", &forwards_values(&forwards), |v| v.clone())?;

        Ok(Self {
            name,
            domain_enabled,
            inbound_domain,
            inbound_priority,
            catch_filter,
            catch_type,
            match_filter,
            match_type,
            forwards,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn forwards(&self) -> &[InboundForward] {
        &self.forwards
    }
}

fn forwards_values(forwards: &[InboundForward]) -> Vec<String> {
    forwards.iter().map(|f| f.value.clone()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `GET inbound`.
pub struct InboundListRequest {
    pub(crate) pagination: Pagination,
    pub(crate) domain_id: Option<DomainId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `POST inbound`.
pub struct InboundCreateRequest {
    pub(crate) domain_id: DomainId,
    pub(crate) route: InboundRoute,
}

impl InboundCreateRequest {
    pub fn new(domain_id: DomainId, route: InboundRoute) -> Self {
        Self { domain_id, route }
    }

    pub fn route(&self) -> &InboundRoute {
        &self.route
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT inbound/{inbound_id}`.
pub struct InboundUpdateRequest {
    pub(crate) inbound_id: InboundId,
    pub(crate) route: InboundRoute,
}

impl InboundUpdateRequest {
    pub fn new(inbound_id: InboundId, route: InboundRoute) -> Self {
        Self { inbound_id, route }
    }

    pub fn route(&self) -> &InboundRoute {
        &self.route
    }
}

#[derive(Debug, Clone)]
enum PendingForward {
    Email(String),
    Webhook { url: String, secret: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct InboundBuilder {
    page: Option<u32>,
    limit: Option<u32>,
    domain_id: Option<String>,
    inbound_id: Option<String>,
    name: Option<String>,
    domain_enabled: Option<bool>,
    inbound_domain: Option<String>,
    inbound_priority: Option<u8>,
    catch_type: Option<MatchType>,
    match_type: Option<MatchType>,
    catch_filter: Option<(InboundFilterType, Vec<InboundFilter>)>,
    match_filter: Option<(InboundFilterType, Vec<InboundFilter>)>,
    forwards: Vec<PendingForward>,
}

impl InboundBuilder {
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

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn inbound_id(mut self, inbound_id: impl Into<String>) -> Self {
        self.inbound_id = Some(inbound_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn domain_enabled(mut self, enabled: bool) -> Self {
        self.domain_enabled = Some(enabled);
        self
    }

    pub fn inbound_domain(mut self, domain: impl Into<String>) -> Self {
        self.inbound_domain = Some(domain.into());
        self
    }

    pub fn inbound_priority(mut self, priority: u8) -> Self {
        self.inbound_priority = Some(priority);
        self
    }

    pub fn catch_type(mut self, catch_type: MatchType) -> Self {
        self.catch_type = Some(catch_type);
        self
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn catch_all(mut self) -> Self {
        self.catch_filter = Some((InboundFilterType::CatchAll, Vec::new()));
        self
    }

    pub fn catch_recipient(mut self, filters: impl IntoIterator<Item = InboundFilter>) -> Self {
        self.catch_filter = Some((
            InboundFilterType::CatchRecipient,
            filters.into_iter().collect(),
        ));
        self
    }

    pub fn match_all(mut self) -> Self {
        self.match_filter = Some((InboundFilterType::MatchAll, Vec::new()));
        self
    }

    pub fn match_sender(self, filters: impl IntoIterator<Item = InboundFilter>) -> Self {
        self.with_match(InboundFilterType::MatchSender, filters)
    }

    pub fn match_domain(self, filters: impl IntoIterator<Item = InboundFilter>) -> Self {
        self.with_match(InboundFilterType::MatchDomain, filters)
    }

    /// Filters must be built with [`InboundFilter::header`].
    pub fn match_header(self, filters: impl IntoIterator<Item = InboundFilter>) -> Self {
        self.with_match(InboundFilterType::MatchHeader, filters)
    }

    fn with_match(
        mut self,
        kind: InboundFilterType,
        filters: impl IntoIterator<Item = InboundFilter>,
    ) -> Self {
        self.match_filter = Some((kind, filters.into_iter().collect()));
        self
    }

    pub fn add_email_forward(mut self, email: impl Into<String>) -> Self {
        self.forwards.push(PendingForward::Email(email.into()));
        self
    }

    pub fn add_webhook_forward(mut self, url: impl Into<String>, secret: Option<String>) -> Self {
        self.forwards.push(PendingForward::Webhook {
            url: url.into(),
            secret,
        });
        self
    }

    pub fn clear_forwards(mut self) -> Self {
        self.forwards.clear();
        self
    }

    /// Receive mail on a custom inbound domain.
    pub fn enable_domain(self, domain: impl Into<String>, priority: u8) -> Self {
        self.domain_enabled(true)
            .inbound_domain(domain)
            .inbound_priority(priority)
    }

    pub fn disable_domain(mut self) -> Self {
        self.domain_enabled = Some(false);
        self.inbound_domain = None;
        self.inbound_priority = None;
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<InboundListRequest, ValidationError> {
        Ok(InboundListRequest {
            pagination: Pagination::from_raw(self.page, self.limit)?,
            domain_id: self.domain_id.clone().map(DomainId::new).transpose()?,
        })
    }

    pub fn build_create_request(&self) -> Result<InboundCreateRequest, ValidationError> {
        let domain_id = DomainId::new(self.domain_id.clone().unwrap_or_default())?;
        Ok(InboundCreateRequest::new(domain_id, self.build_route()?))
    }

    pub fn build_update_request(&self) -> Result<InboundUpdateRequest, ValidationError> {
        let inbound_id = InboundId::new(self.inbound_id.clone().unwrap_or_default())?;
        Ok(InboundUpdateRequest::new(inbound_id, self.build_route()?))
    }

    fn build_route(&self) -> Result<InboundRoute, ValidationError> {
        let name = self.name.clone().unwrap_or_default();
        let domain_enabled = self.domain_enabled.ok_or(ValidationError::Missing {
            field: "domain_enabled",
        })?;
        let (catch_kind, catch_filters) = self.catch_filter.clone().ok_or(
            ValidationError::Missing {
                field: "catch_filter",
            },
        )?;
        let (match_kind, match_filters) = self.match_filter.clone().ok_or(
            ValidationError::Missing {
                field: "match_filter",
            },
        )?;

        let forwards = self
            .forwards
            .iter()
            .map(|forward| match forward {
                PendingForward::Email(email) => InboundForward::email(email.clone()),
                PendingForward::Webhook { url, secret } => {
                    InboundForward::webhook(url.clone(), secret.clone())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        InboundRoute::new(
            name,
            domain_enabled,
            self.inbound_domain.clone(),
            self.inbound_priority,
            InboundFilterGroup::new(catch_kind, catch_filters)?,
            self.catch_type,
            InboundFilterGroup::new(match_kind, match_filters)?,
            self.match_type,
            forwards,
        )
    }
}
