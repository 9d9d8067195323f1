//! Typed response models.
//!
//! MailerSend sends `null` for many fields and adds new fields over time, so
//! models ignore unknown keys and treat `null` like a missing value.

mod activity;
mod analytics;
mod domains;
mod email;
mod inbound;
mod messages;
mod quota;
mod sms;
mod templates;
mod tokens;
mod webhooks;

pub use activity::{Activity, ActivityEmail, ActivityRecipient};
pub use analytics::{AnalyticsByDate, DateStats, NamedCount, OpensBreakdown};
pub use domains::{DnsRecord, DnsRecords, Domain, DomainSettings, DomainVerification, Recipient};
pub use email::{BulkEmailAccepted, BulkEmailStatus, EmailSent};
pub use inbound::{InboundDomain, InboundFilterInfo, InboundForwardInfo, InboundRouteInfo};
pub use messages::{Message, MessageDomain, MessageEmail};
pub use quota::ApiQuota;
pub use sms::{SmsMessage, SmsNumber, SmsSent};
pub use templates::{Template, TemplateStats};
pub use tokens::{Token, TokenCreated};
pub use webhooks::Webhook;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
/// Decoded payload plus the response metadata every call carries.
pub struct ApiResponse<T> {
    pub data: T,
    /// HTTP status code.
    pub status: u16,
    /// `x-request-id`, useful when contacting support.
    pub request_id: Option<String>,
    /// `x-apiquota-remaining`.
    pub rate_limit_remaining: Option<u32>,
}

impl<T> ApiResponse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            request_id: self.request_id,
            rate_limit_remaining: self.rate_limit_remaining,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(deserialize_with = "de::null_default")]
    pub current_page: u32,
    pub from: Option<u32>,
    #[serde(deserialize_with = "de::null_default")]
    pub last_page: u32,
    pub path: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub per_page: u32,
    pub to: Option<u32>,
    #[serde(deserialize_with = "de::null_default")]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
/// One page of a list endpoint.
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn total(&self) -> u64 {
        self.meta.total
    }

    pub fn current_page(&self) -> u32 {
        self.meta.current_page
    }

    pub fn last_page(&self) -> u32 {
        self.meta.last_page
    }

    pub fn has_more_pages(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }
}

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    /// `null` decodes as `T::default()`.
    pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Accept `"2024-01-01"` as well as `1704067200`.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Text(s) => s,
            Raw::Int(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
        }))
    }
}
