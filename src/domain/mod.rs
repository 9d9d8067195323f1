//! Domain layer: strong types with validation and invariants (no I/O).

mod enums;
mod request;
mod response;
mod validation;
mod value;

pub use enums::{
    ActivityEvent, AnalyticsEvent, ForwardType, GroupBy, InboundComparer, InboundFilterType,
    MatchType, TokenScope, TokenStatus, WebhookEvent,
};
pub use request::{
    ACTIVITY_MAX_RANGE_SECS, ANALYTICS_MAX_RECIPIENTS, ActivityBuilder, ActivityListRequest,
    AnalyticsBuilder, AnalyticsRequest, Attachment, AttachmentDisposition, DomainCreateRequest,
    DomainListRequest, DomainRecipientsRequest, DomainSettingsRequest, DomainsBuilder,
    EMAIL_MAX_CC, EMAIL_MAX_RECIPIENTS, EMAIL_MAX_TAGS, EmailBuilder, EmailHeader,
    EmailPersonalization, EmailRecipient, EmailRequest, EmailSettings, INBOUND_MAX_FILTERS,
    INBOUND_MAX_FORWARDS, INBOUND_MAX_VALUE_CHARS, InboundBuilder, InboundCreateRequest,
    InboundFilter, InboundFilterGroup, InboundForward, InboundListRequest, InboundRoute,
    InboundUpdateRequest, MessagesBuilder, MessagesListRequest, SMS_MAX_RECIPIENTS,
    SMS_MAX_TEXT_CHARS, SmsMessagesBuilder, SmsMessagesListRequest, SmsNumberUpdateRequest,
    SmsNumbersBuilder, SmsNumbersListRequest, SmsPersonalization, SmsSendBuilder, SmsSendRequest,
    TOKEN_NAME_MAX_CHARS, TemplatesBuilder, TemplatesListRequest, TokenCreateRequest,
    TokenRenameRequest, TokenStatusRequest, TokensBuilder, TokensListRequest, WEBHOOK_MAX_CHARS,
    WebhookCreateRequest, WebhookUpdateRequest, WebhooksBuilder, WebhooksListRequest,
};
pub use response::{
    Activity, ActivityEmail, ActivityRecipient, AnalyticsByDate, ApiQuota, ApiResponse,
    BulkEmailAccepted, BulkEmailStatus, DateStats, DnsRecord, DnsRecords, Domain, DomainSettings,
    DomainVerification, EmailSent, InboundDomain, InboundFilterInfo, InboundForwardInfo,
    InboundRouteInfo, Message, MessageDomain, MessageEmail, NamedCount, OpensBreakdown, PageLinks,
    PageMeta, Paginated, Recipient, SmsMessage, SmsNumber, SmsSent, Template, TemplateStats, Token,
    TokenCreated, Webhook,
};
pub use validation::ValidationError;
pub use value::{
    ActivityId, ApiKey, BulkEmailId, DomainId, DomainName, EmailAddress, InboundId, Limit,
    MessageId, Page, Pagination, PhoneNumber, RecipientId, SmsMessageId, SmsNumberId, Subdomain,
    TemplateId, TokenId, UnixTimestamp, WebhookId,
};

pub(crate) use value::parse_http_url;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_only_operations_reject_blank_ids() {
        assert!(matches!(
            TemplateId::new("   "),
            Err(ValidationError::Empty {
                field: TemplateId::FIELD
            })
        ));
        assert!(matches!(
            SmsNumberId::new(""),
            Err(ValidationError::Empty {
                field: SmsNumberId::FIELD
            })
        ));
    }

    #[test]
    fn builders_are_independent_after_clone() {
        let original = TemplatesBuilder::new().domain_id("dom1");
        let copy = original.clone().domain_id("dom2").limit(50);

        let a = original.build_list_request().unwrap();
        let b = copy.build_list_request().unwrap();
        assert_eq!(a.domain_id().map(DomainId::as_str), Some("dom1"));
        assert_eq!(b.domain_id().map(DomainId::as_str), Some("dom2"));
        assert_eq!(a.pagination().limit.value(), Limit::DEFAULT);
    }

    #[test]
    fn reset_returns_an_empty_builder() {
        let builder = WebhooksBuilder::new()
            .domain_id("dom1")
            .url("https://example.com")
            .reset();
        assert_eq!(
            builder.build_list_request().unwrap_err(),
            ValidationError::Empty { field: "domain_id" }
        );
    }
}
