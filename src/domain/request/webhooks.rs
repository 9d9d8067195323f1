use crate::domain::enums::WebhookEvent;
use crate::domain::request::{ensure_distinct, ensure_min_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    DomainId, WebhookId, ensure_max_chars, non_empty_trimmed, parse_http_url,
};

/// Limit on webhook names and URLs.
pub const WEBHOOK_MAX_CHARS: usize = 191;

fn webhook_url(value: impl Into<String>) -> Result<String, ValidationError> {
    let url = non_empty_trimmed("url", value)?;
    ensure_max_chars("url", &url, WEBHOOK_MAX_CHARS)?;
    parse_http_url("url", &url)?;
    Ok(url)
}

fn webhook_name(value: impl Into<String>) -> Result<String, ValidationError> {
    let name = non_empty_trimmed("name", value)?;
    ensure_max_chars("name", &name, WEBHOOK_MAX_CHARS)?;
    Ok(name)
}

fn webhook_events(events: Vec<WebhookEvent>) -> Result<Vec<WebhookEvent>, ValidationError> {
    ensure_min_items(WebhookEvent::FIELD, events.len(), 1)?;
    ensure_distinct(WebhookEvent::FIELD, &events, |e| e.as_str().to_owned())?;
    Ok(events)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `GET webhooks?domain_id=...`.
pub struct WebhooksListRequest {
    pub(crate) domain_id: DomainId,
}

impl WebhooksListRequest {
    pub fn new(domain_id: DomainId) -> Self {
        Self { domain_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `POST webhooks`.
pub struct WebhookCreateRequest {
    pub(crate) url: String,
    pub(crate) name: String,
    pub(crate) events: Vec<WebhookEvent>,
    pub(crate) domain_id: DomainId,
    pub(crate) enabled: Option<bool>,
}

impl WebhookCreateRequest {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        events: Vec<WebhookEvent>,
        domain_id: DomainId,
        enabled: Option<bool>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            url: webhook_url(url)?,
            name: webhook_name(name)?,
            events: webhook_events(events)?,
            domain_id,
            enabled,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn events(&self) -> &[WebhookEvent] {
        &self.events
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT webhooks/{webhook_id}`; only set fields are sent.
pub struct WebhookUpdateRequest {
    pub(crate) webhook_id: WebhookId,
    pub(crate) url: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) events: Option<Vec<WebhookEvent>>,
    pub(crate) enabled: Option<bool>,
}

impl WebhookUpdateRequest {
    pub fn new(
        webhook_id: WebhookId,
        url: Option<String>,
        name: Option<String>,
        events: Option<Vec<WebhookEvent>>,
        enabled: Option<bool>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            webhook_id,
            url: url.map(webhook_url).transpose()?,
            name: name.map(webhook_name).transpose()?,
            events: events.map(webhook_events).transpose()?,
            enabled,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebhooksBuilder {
    domain_id: Option<String>,
    webhook_id: Option<String>,
    url: Option<String>,
    name: Option<String>,
    events: Option<Vec<WebhookEvent>>,
    enabled: Option<bool>,
}

impl WebhooksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = Some(webhook_id.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the event list as given.
    pub fn events(mut self, events: impl IntoIterator<Item = WebhookEvent>) -> Self {
        self.events = Some(events.into_iter().collect());
        self
    }

    /// Append an event unless it is already subscribed.
    pub fn add_event(mut self, event: WebhookEvent) -> Self {
        let events = self.events.get_or_insert_with(Vec::new);
        if !events.contains(&event) {
            events.push(event);
        }
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn activity_events(self) -> Self {
        WebhookEvent::activity().fold(self, Self::add_event)
    }

    pub fn system_events(self) -> Self {
        WebhookEvent::system().fold(self, Self::add_event)
    }

    pub fn all_events(self) -> Self {
        self.activity_events().system_events()
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    fn require_domain_id(&self) -> Result<DomainId, ValidationError> {
        DomainId::new(self.domain_id.clone().unwrap_or_default())
    }

    pub fn build_list_request(&self) -> Result<WebhooksListRequest, ValidationError> {
        Ok(WebhooksListRequest::new(self.require_domain_id()?))
    }

    pub fn build_create_request(&self) -> Result<WebhookCreateRequest, ValidationError> {
        WebhookCreateRequest::new(
            self.url.clone().unwrap_or_default(),
            self.name.clone().unwrap_or_default(),
            self.events.clone().unwrap_or_default(),
            self.require_domain_id()?,
            self.enabled,
        )
    }

    pub fn build_update_request(&self) -> Result<WebhookUpdateRequest, ValidationError> {
        WebhookUpdateRequest::new(
            WebhookId::new(self.webhook_id.clone().unwrap_or_default())?,
            self.url.clone(),
            self.name.clone(),
            self.events.clone(),
            self.enabled,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> WebhooksBuilder {
        WebhooksBuilder::new()
            .domain_id("dom1")
            .url("https://example.com/hooks")
            .name("Main")
    }

    #[test]
    fn add_event_deduplicates() {
        let request = create()
            .add_event(WebhookEvent::ActivitySent)
            .activity_events()
            .build_create_request()
            .unwrap();
        assert_eq!(request.events().len(), 12);
        assert_eq!(request.events()[0], WebhookEvent::ActivitySent);

        let all = create().all_events().build_create_request().unwrap();
        assert_eq!(all.events().len(), 19);
    }

    #[test]
    fn create_requires_events_and_valid_url() {
        let err = create().build_create_request().unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooFew {
                field: "events",
                min: 1,
                actual: 0
            }
        );

        let err = create()
            .url("example.com/hooks")
            .system_events()
            .build_create_request()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { field: "url", .. }));

        let err = create()
            .events([WebhookEvent::MaintenanceEnd, WebhookEvent::MaintenanceEnd])
            .build_create_request()
            .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn url_and_name_are_limited_to_191_chars() {
        let prefix = "https://example.com/";
        let url_at_limit = format!("{prefix}{}", "a".repeat(WEBHOOK_MAX_CHARS - prefix.len()));
        let request = create()
            .url(url_at_limit.as_str())
            .name("n".repeat(WEBHOOK_MAX_CHARS))
            .system_events()
            .build_create_request()
            .unwrap();
        assert_eq!(request.url.chars().count(), WEBHOOK_MAX_CHARS);

        let err = create()
            .url(format!("{url_at_limit}a"))
            .system_events()
            .build_create_request()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "url",
                max: 191,
                actual: 192
            }
        );

        let err = create()
            .name("n".repeat(WEBHOOK_MAX_CHARS + 1))
            .system_events()
            .build_create_request()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "name",
                max: 191,
                actual: 192
            }
        );
    }

    #[test]
    fn update_checks_only_present_fields() {
        let request = WebhooksBuilder::new()
            .webhook_id("wh1")
            .enabled(false)
            .build_update_request()
            .unwrap();
        assert_eq!(request.url, None);
        assert_eq!(request.events, None);
        assert_eq!(request.enabled, Some(false));

        let err = WebhooksBuilder::new()
            .webhook_id("wh1")
            .events(Vec::new())
            .build_update_request()
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooFew { .. }));

        let err = WebhooksBuilder::new()
            .webhook_id("wh1")
            .name(" ")
            .build_update_request()
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn list_requires_domain() {
        assert!(WebhooksBuilder::new().build_list_request().is_err());
        assert!(create().build_list_request().is_ok());
    }
}
