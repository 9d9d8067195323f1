//! Validated request types and the builders that produce them.

mod activity;
mod analytics;
mod domains;
mod email;
mod inbound;
mod messages;
mod sms;
mod templates;
mod tokens;
mod webhooks;

pub use activity::{ACTIVITY_MAX_RANGE_SECS, ActivityBuilder, ActivityListRequest};
pub use analytics::{ANALYTICS_MAX_RECIPIENTS, AnalyticsBuilder, AnalyticsRequest};
pub use domains::{
    DomainCreateRequest, DomainListRequest, DomainRecipientsRequest, DomainSettingsRequest,
    DomainsBuilder,
};
pub use email::{
    Attachment, AttachmentDisposition, EMAIL_MAX_CC, EMAIL_MAX_RECIPIENTS, EMAIL_MAX_TAGS,
    EmailBuilder, EmailHeader, EmailPersonalization, EmailRecipient, EmailRequest, EmailSettings,
};
pub use inbound::{
    INBOUND_MAX_FILTERS, INBOUND_MAX_FORWARDS, INBOUND_MAX_VALUE_CHARS, InboundBuilder,
    InboundCreateRequest, InboundFilter, InboundFilterGroup, InboundForward, InboundListRequest,
    InboundRoute, InboundUpdateRequest,
};
pub use messages::{MessagesBuilder, MessagesListRequest};
pub use sms::{
    SMS_MAX_RECIPIENTS, SMS_MAX_TEXT_CHARS, SmsMessagesBuilder, SmsMessagesListRequest,
    SmsNumberUpdateRequest, SmsNumbersBuilder, SmsNumbersListRequest, SmsPersonalization,
    SmsSendBuilder, SmsSendRequest,
};
pub use templates::{TemplatesBuilder, TemplatesListRequest};
pub use tokens::{
    TOKEN_NAME_MAX_CHARS, TokenCreateRequest, TokenRenameRequest, TokenStatusRequest,
    TokensBuilder, TokensListRequest,
};
pub use webhooks::{
    WEBHOOK_MAX_CHARS, WebhookCreateRequest, WebhookUpdateRequest, WebhooksBuilder,
    WebhooksListRequest,
};

use crate::domain::validation::ValidationError;

/// Drop repeated items, keeping the first occurrence of each.
pub(crate) fn dedup_in_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

pub(crate) fn ensure_max_items(
    field: &'static str,
    actual: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if actual > max {
        return Err(ValidationError::TooMany { field, max, actual });
    }
    Ok(())
}

pub(crate) fn ensure_min_items(
    field: &'static str,
    actual: usize,
    min: usize,
) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::TooFew { field, min, actual });
    }
    Ok(())
}

/// Reject the first repeated item; `label` renders it for the error.
pub(crate) fn ensure_distinct<T: PartialEq>(
    field: &'static str,
    items: &[T],
    label: impl Fn(&T) -> String,
) -> Result<(), ValidationError> {
    for (idx, item) in items.iter().enumerate() {
        if items[..idx].contains(item) {
            return Err(ValidationError::Duplicate {
                field,
                value: label(item),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        assert_eq!(dedup_in_order(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn distinct_reports_first_duplicate() {
        let err = ensure_distinct("scopes", &["a", "b", "a"], |s| s.to_string()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "scopes",
                value: "a".to_owned()
            }
        );
        assert!(ensure_distinct("scopes", &["a", "b"], |s| s.to_string()).is_ok());
    }
}
