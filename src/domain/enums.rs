//! Closed wire vocabularies used by MailerSend query parameters and bodies.

use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Field name used in validation errors.
            pub const FIELD: &'static str = $field;

            /// Every variant in wire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let value = value.trim();
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ValidationError::InvalidValue {
                        field: $field,
                        value: value.to_owned(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Event filter for the activity list.
    ActivityEvent, "event" {
        Queued => "queued",
        Sent => "sent",
        Delivered => "delivered",
        SoftBounced => "soft_bounced",
        HardBounced => "hard_bounced",
        Opened => "opened",
        Clicked => "clicked",
        Unsubscribed => "unsubscribed",
        SpamComplaints => "spam_complaints",
        SurveyOpened => "survey_opened",
        SurveySubmitted => "survey_submitted",
    }
}

wire_enum! {
    /// Event series for analytics by date.
    AnalyticsEvent, "event" {
        Queued => "queued",
        Sent => "sent",
        Delivered => "delivered",
        SoftBounced => "soft_bounced",
        HardBounced => "hard_bounced",
        Opened => "opened",
        OpenedUnique => "opened_unique",
        Clicked => "clicked",
        ClickedUnique => "clicked_unique",
        Unsubscribed => "unsubscribed",
        SpamComplaints => "spam_complaints",
        SurveyOpened => "survey_opened",
        SurveySubmitted => "survey_submitted",
    }
}

impl AnalyticsEvent {
    /// Delivery pipeline events.
    pub const DELIVERY: &'static [AnalyticsEvent] = &[
        AnalyticsEvent::Queued,
        AnalyticsEvent::Sent,
        AnalyticsEvent::Delivered,
        AnalyticsEvent::SoftBounced,
        AnalyticsEvent::HardBounced,
    ];

    /// Recipient engagement events.
    pub const ENGAGEMENT: &'static [AnalyticsEvent] = &[
        AnalyticsEvent::Opened,
        AnalyticsEvent::Clicked,
        AnalyticsEvent::OpenedUnique,
        AnalyticsEvent::ClickedUnique,
    ];

    /// Negative feedback events.
    pub const NEGATIVE: &'static [AnalyticsEvent] = &[
        AnalyticsEvent::Unsubscribed,
        AnalyticsEvent::SpamComplaints,
    ];
}

wire_enum! {
    /// Bucket size for analytics by date.
    #[derive(Default)]
    GroupBy, "group_by" {
        #[default]
        Days => "days",
        Weeks => "weeks",
        Months => "months",
        Years => "years",
    }
}

wire_enum! {
    /// API token permission scope.
    TokenScope, "scopes" {
        EmailFull => "email_full",
        DomainsRead => "domains_read",
        DomainsFull => "domains_full",
        ActivityRead => "activity_read",
        ActivityFull => "activity_full",
        AnalyticsRead => "analytics_read",
        AnalyticsFull => "analytics_full",
        TokensFull => "tokens_full",
        WebhooksFull => "webhooks_full",
        TemplatesFull => "templates_full",
        SuppressionsRead => "suppressions_read",
        SuppressionsFull => "suppressions_full",
        SmsFull => "sms_full",
        SmsRead => "sms_read",
        EmailVerificationRead => "email_verification_read",
        EmailVerificationFull => "email_verification_full",
        InboundsFull => "inbounds_full",
        RecipientsRead => "recipients_read",
        RecipientsFull => "recipients_full",
        SenderIdentityRead => "sender_identity_read",
        SenderIdentityFull => "sender_identity_full",
        UsersRead => "users_read",
        UsersFull => "users_full",
        SmtpUsersRead => "smtp_users_read",
        SmtpUsersFull => "smtp_users_full",
    }
}

impl TokenScope {
    /// Whether this scope only grants read access.
    pub fn is_read_only(self) -> bool {
        self.as_str().ends_with("_read")
    }
}

wire_enum! {
    /// Token status update.
    TokenStatus, "status" {
        Pause => "pause",
        Unpause => "unpause",
    }
}

wire_enum! {
    /// Inbound filter kind.
    InboundFilterType, "type" {
        CatchAll => "catch_all",
        CatchRecipient => "catch_recipient",
        MatchAll => "match_all",
        MatchSender => "match_sender",
        MatchDomain => "match_domain",
        MatchHeader => "match_header",
    }
}

wire_enum! {
    /// Inbound filter comparison.
    InboundComparer, "comparer" {
        Equal => "equal",
        NotEqual => "not-equal",
        Contains => "contains",
        NotContains => "not-contains",
        StartsWith => "starts-with",
        EndsWith => "ends-with",
        NotStartsWith => "not-starts-with",
        NotEndsWith => "not-ends-with",
    }
}

wire_enum! {
    /// Whether all or any one of the filters must match.
    MatchType, "match_type" {
        All => "all",
        One => "one",
    }
}

wire_enum! {
    /// Destination kind for an inbound forward.
    ForwardType, "forwards.type" {
        Email => "email",
        Webhook => "webhook",
    }
}

wire_enum! {
    /// Webhook subscription event.
    WebhookEvent, "events" {
        ActivitySent => "activity.sent",
        ActivityDelivered => "activity.delivered",
        ActivitySoftBounced => "activity.soft_bounced",
        ActivityHardBounced => "activity.hard_bounced",
        ActivityOpened => "activity.opened",
        ActivityOpenedUnique => "activity.opened_unique",
        ActivityClicked => "activity.clicked",
        ActivityClickedUnique => "activity.clicked_unique",
        ActivityUnsubscribed => "activity.unsubscribed",
        ActivitySpamComplaint => "activity.spam_complaint",
        ActivitySurveyOpened => "activity.survey_opened",
        ActivitySurveySubmitted => "activity.survey_submitted",
        SenderIdentityVerified => "sender_identity.verified",
        MaintenanceStart => "maintenance.start",
        MaintenanceEnd => "maintenance.end",
        InboundForwardFailed => "inbound_forward.failed",
        EmailSingleVerified => "email_single.verified",
        EmailListVerified => "email_list.verified",
        BulkEmailCompleted => "bulk_email.completed",
    }
}

impl WebhookEvent {
    /// `activity.*` events.
    pub fn activity() -> impl Iterator<Item = WebhookEvent> {
        Self::ALL.iter().copied().filter(|e| e.is_activity())
    }

    /// Account and system events.
    pub fn system() -> impl Iterator<Item = WebhookEvent> {
        Self::ALL.iter().copied().filter(|e| !e.is_activity())
    }

    pub fn is_activity(self) -> bool {
        self.as_str().starts_with("activity.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_names_only() {
        assert_eq!("soft_bounced".parse::<ActivityEvent>().unwrap(), ActivityEvent::SoftBounced);
        assert_eq!(" not-equal ".parse::<InboundComparer>().unwrap(), InboundComparer::NotEqual);
        assert_eq!(
            "opened_unique".parse::<ActivityEvent>().unwrap_err(),
            ValidationError::InvalidValue {
                field: "event",
                value: "opened_unique".to_owned()
            }
        );
        assert!("weekly".parse::<GroupBy>().is_err());
    }

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(ActivityEvent::ALL.len(), 11);
        assert_eq!(TokenScope::ALL.len(), 25);
        assert_eq!(WebhookEvent::activity().count(), 12);
        assert_eq!(WebhookEvent::system().count(), 7);
    }

    #[test]
    fn read_only_scopes() {
        let read: Vec<_> = TokenScope::ALL
            .iter()
            .copied()
            .filter(|s| s.is_read_only())
            .collect();
        assert!(read.contains(&TokenScope::SmsRead));
        assert!(!read.contains(&TokenScope::EmailFull));
        assert_eq!(read.len(), 10);
    }

    #[test]
    fn serializes_as_wire_string() {
        let events = [WebhookEvent::ActivitySent, WebhookEvent::MaintenanceEnd];
        let json = serde_json::to_string(&events).unwrap();
        assert_eq!(json, r#"["activity.sent","maintenance.end"]"#);
        assert_eq!(GroupBy::default().to_string(), "days");
    }
}
