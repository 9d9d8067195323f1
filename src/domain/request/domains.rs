use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainId, DomainName, Pagination, Subdomain};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `GET domains`.
pub struct DomainListRequest {
    pub(crate) pagination: Pagination,
    pub(crate) verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `POST domains`.
pub struct DomainCreateRequest {
    pub(crate) name: DomainName,
    pub(crate) return_path_subdomain: Option<Subdomain>,
    pub(crate) custom_tracking_subdomain: Option<Subdomain>,
    pub(crate) inbound_routing_subdomain: Option<Subdomain>,
}

impl DomainCreateRequest {
    pub fn new(name: DomainName) -> Self {
        Self {
            name,
            return_path_subdomain: None,
            custom_tracking_subdomain: None,
            inbound_routing_subdomain: None,
        }
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `GET domains/{domain_id}/recipients`.
pub struct DomainRecipientsRequest {
    pub(crate) domain_id: DomainId,
    pub(crate) pagination: Pagination,
}

impl DomainRecipientsRequest {
    pub fn new(domain_id: DomainId, pagination: Pagination) -> Self {
        Self {
            domain_id,
            pagination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT domains/{domain_id}/settings`. Unset fields are left untouched by the API.
pub struct DomainSettingsRequest {
    pub(crate) domain_id: DomainId,
    pub(crate) send_paused: Option<bool>,
    pub(crate) track_clicks: Option<bool>,
    pub(crate) track_opens: Option<bool>,
    pub(crate) track_unsubscribe: Option<bool>,
    pub(crate) track_content: Option<bool>,
    pub(crate) track_unsubscribe_html: Option<String>,
    pub(crate) track_unsubscribe_plain: Option<String>,
    pub(crate) custom_tracking_enabled: Option<bool>,
    pub(crate) custom_tracking_subdomain: Option<Subdomain>,
    pub(crate) precedence_bulk: Option<bool>,
    pub(crate) ignore_duplicated_recipients: Option<bool>,
}

impl DomainSettingsRequest {
    pub fn domain_id(&self) -> &DomainId {
        &self.domain_id
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for the domain requests.
///
/// One builder covers list, create, recipients, and settings; each `build_*`
/// method reads only the fields it needs.
pub struct DomainsBuilder {
    domain_id: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
    verified: Option<bool>,
    name: Option<String>,
    return_path_subdomain: Option<String>,
    custom_tracking_subdomain: Option<String>,
    inbound_routing_subdomain: Option<String>,
    send_paused: Option<bool>,
    track_clicks: Option<bool>,
    track_opens: Option<bool>,
    track_unsubscribe: Option<bool>,
    track_content: Option<bool>,
    track_unsubscribe_html: Option<String>,
    track_unsubscribe_plain: Option<String>,
    custom_tracking_enabled: Option<bool>,
    precedence_bulk: Option<bool>,
    ignore_duplicated_recipients: Option<bool>,
}

impl DomainsBuilder {
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

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn verified_only(self) -> Self {
        self.verified(true)
    }

    pub fn unverified_only(self) -> Self {
        self.verified(false)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn return_path_subdomain(mut self, value: impl Into<String>) -> Self {
        self.return_path_subdomain = Some(value.into());
        self
    }

    pub fn custom_tracking_subdomain(mut self, value: impl Into<String>) -> Self {
        self.custom_tracking_subdomain = Some(value.into());
        self
    }

    pub fn inbound_routing_subdomain(mut self, value: impl Into<String>) -> Self {
        self.inbound_routing_subdomain = Some(value.into());
        self
    }

    pub fn send_paused(mut self, value: bool) -> Self {
        self.send_paused = Some(value);
        self
    }

    pub fn pause_sending(self) -> Self {
        self.send_paused(true)
    }

    pub fn resume_sending(self) -> Self {
        self.send_paused(false)
    }

    pub fn track_clicks(mut self, value: bool) -> Self {
        self.track_clicks = Some(value);
        self
    }

    pub fn track_opens(mut self, value: bool) -> Self {
        self.track_opens = Some(value);
        self
    }

    pub fn track_unsubscribe(mut self, value: bool) -> Self {
        self.track_unsubscribe = Some(value);
        self
    }

    pub fn track_content(mut self, value: bool) -> Self {
        self.track_content = Some(value);
        self
    }

    /// HTML unsubscribe footer; must contain the `{$unsubscribe}` variable on MailerSend's side.
    pub fn track_unsubscribe_html(mut self, value: impl Into<String>) -> Self {
        self.track_unsubscribe_html = Some(value.into());
        self
    }

    pub fn track_unsubscribe_plain(mut self, value: impl Into<String>) -> Self {
        self.track_unsubscribe_plain = Some(value.into());
        self
    }

    pub fn custom_tracking_enabled(mut self, value: bool) -> Self {
        self.custom_tracking_enabled = Some(value);
        self
    }

    pub fn precedence_bulk(mut self, value: bool) -> Self {
        self.precedence_bulk = Some(value);
        self
    }

    pub fn ignore_duplicated_recipients(mut self, value: bool) -> Self {
        self.ignore_duplicated_recipients = Some(value);
        self
    }

    /// Turn on click, open, unsubscribe, and content tracking.
    pub fn enable_all_tracking(self) -> Self {
        self.set_all_tracking(true)
    }

    pub fn disable_all_tracking(self) -> Self {
        self.set_all_tracking(false)
    }

    fn set_all_tracking(self, value: bool) -> Self {
        self.track_clicks(value)
            .track_opens(value)
            .track_unsubscribe(value)
            .track_content(value)
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    fn require_domain_id(&self) -> Result<DomainId, ValidationError> {
        DomainId::new(self.domain_id.clone().unwrap_or_default())
    }

    pub fn build_list_request(&self) -> Result<DomainListRequest, ValidationError> {
        Ok(DomainListRequest {
            pagination: Pagination::from_raw(self.page, self.limit)?,
            verified: self.verified,
        })
    }

    pub fn build_create_request(&self) -> Result<DomainCreateRequest, ValidationError> {
        let name = DomainName::new(self.name.clone().unwrap_or_default())?;
        let subdomain = |field: &'static str, value: &Option<String>| {
            value.clone().map(|v| Subdomain::new(field, v)).transpose()
        };

        Ok(DomainCreateRequest {
            name,
            return_path_subdomain: subdomain(
                "return_path_subdomain",
                &self.return_path_subdomain,
            )?,
            custom_tracking_subdomain: subdomain(
                "custom_tracking_subdomain",
                &self.custom_tracking_subdomain,
            )?,
            inbound_routing_subdomain: subdomain(
                "inbound_routing_subdomain",
                &self.inbound_routing_subdomain,
            )?,
        })
    }

    pub fn build_recipients_request(&self) -> Result<DomainRecipientsRequest, ValidationError> {
        Ok(DomainRecipientsRequest {
            domain_id: self.require_domain_id()?,
            pagination: Pagination::from_raw(self.page, self.limit)?,
        })
    }

    pub fn build_update_settings_request(
        &self,
    ) -> Result<DomainSettingsRequest, ValidationError> {
        let custom_tracking_subdomain = self
            .custom_tracking_subdomain
            .clone()
            .map(|v| Subdomain::new("custom_tracking_subdomain", v))
            .transpose()?;

        Ok(DomainSettingsRequest {
            domain_id: self.require_domain_id()?,
            send_paused: self.send_paused,
            track_clicks: self.track_clicks,
            track_opens: self.track_opens,
            track_unsubscribe: self.track_unsubscribe,
            track_content: self.track_content,
            track_unsubscribe_html: self.track_unsubscribe_html.clone(),
            track_unsubscribe_plain: self.track_unsubscribe_plain.clone(),
            custom_tracking_enabled: self.custom_tracking_enabled,
            custom_tracking_subdomain,
            precedence_bulk: self.precedence_bulk,
            ignore_duplicated_recipients: self.ignore_duplicated_recipients,
        })
    }
}
