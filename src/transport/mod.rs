//! Transport layer: MailerSend wire format (paths, query strings, JSON bodies, envelopes).

mod activity;
mod analytics;
mod domains;
mod email;
mod envelope;
mod inbound;
mod messages;
mod sms;
mod templates;
mod tokens;
mod webhooks;

pub use activity::{encode_activity_get, encode_activity_list};
pub use analytics::{AnalyticsReport, encode_analytics};
pub use domains::{
    encode_domain_create, encode_domain_delete, encode_domain_dns_records, encode_domain_get,
    encode_domain_list, encode_domain_recipients, encode_domain_update_settings,
    encode_domain_verification,
};
pub use email::{
    encode_api_quota, encode_bulk_email_status, encode_email_send, encode_email_send_bulk,
};
pub use envelope::{ApiErrorBody, decode_data, decode_error_body, decode_list, decode_plain};
pub use inbound::{
    encode_inbound_create, encode_inbound_delete, encode_inbound_get, encode_inbound_list,
    encode_inbound_update,
};
pub use messages::{encode_message_get, encode_messages_list};
pub use sms::{
    encode_sms_message_get, encode_sms_messages_list, encode_sms_number_delete,
    encode_sms_number_get, encode_sms_number_update, encode_sms_numbers_list, encode_sms_send,
};
pub use templates::{encode_template_delete, encode_template_get, encode_templates_list};
pub use tokens::{
    encode_token_create, encode_token_delete, encode_token_get, encode_token_rename,
    encode_token_update_status, encode_tokens_list,
};
pub use webhooks::{
    encode_webhook_create, encode_webhook_delete, encode_webhook_get, encode_webhook_update,
    encode_webhooks_list,
};

use serde_json::{Map, Value};

use crate::domain::Pagination;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One encoded API call, relative to the configured base URL.
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Unescaped path segments; the client percent-encodes them.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: HttpMethod, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(segments: &[&str]) -> Self {
        Self::new(HttpMethod::Get, segments)
    }

    pub(crate) fn post(segments: &[&str], body: Value) -> Self {
        Self::new(HttpMethod::Post, segments).with_body(body)
    }

    pub(crate) fn put(segments: &[&str], body: Value) -> Self {
        Self::new(HttpMethod::Put, segments).with_body(body)
    }

    pub(crate) fn delete(segments: &[&str]) -> Self {
        Self::new(HttpMethod::Delete, segments)
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub(crate) fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub(crate) fn paginated(self, pagination: Pagination) -> Self {
        self.query("page", pagination.page.value())
            .query("limit", pagination.limit.value())
    }

    /// Path as sent, for logging and tests.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Insert `key` only when `value` is set.
pub(crate) fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        map.insert(key.to_owned(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_helpers_compose_query() {
        let request = ApiRequest::get(&["domains", "d1", "recipients"])
            .paginated(Pagination::default())
            .query_opt("verified", Some(true))
            .query_opt("domain_id", None::<&str>);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "domains/d1/recipients");
        assert_eq!(
            request.query,
            vec![
                ("page".to_owned(), "1".to_owned()),
                ("limit".to_owned(), "25".to_owned()),
                ("verified".to_owned(), "true".to_owned()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn insert_opt_skips_none() {
        let mut map = Map::new();
        insert_opt(&mut map, "a", Some(true));
        insert_opt(&mut map, "b", None::<bool>);
        assert_eq!(Value::Object(map), serde_json::json!({"a": true}));
    }
}
