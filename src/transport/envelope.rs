use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{PageLinks, PageMeta, Paginated};
use crate::transport::TransportError;

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ListEnvelope<T> {
    #[serde(default)]
    data: Option<Vec<T>>,
    #[serde(default)]
    links: Option<PageLinks>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

/// Decode `{ "data": T }`.
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    let envelope: DataEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Decode a payload that is not wrapped in `data`.
pub fn decode_plain<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode `{ "data": [T], "links": ..., "meta": ... }`.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Paginated<T>, TransportError> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body)?;
    Ok(Paginated {
        items: envelope.data.unwrap_or_default(),
        links: envelope.links.unwrap_or_default(),
        meta: envelope.meta.unwrap_or_default(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(msg) => vec![msg],
            OneOrMany::Many(msgs) => msgs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, OneOrMany>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `{ "message": ..., "errors": { field: [msg, ...] } }`.
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ApiErrorBody {
    /// `message` followed by `; field: msg1, msg2` for each field.
    pub fn summary(&self) -> Option<String> {
        let details = self
            .errors
            .iter()
            .map(|(field, msgs)| format!("{field}: {}", msgs.join(", ")))
            .collect::<Vec<_>>();

        match (&self.message, details.is_empty()) {
            (Some(message), true) => Some(message.clone()),
            (Some(message), false) => Some(format!("{message}; {}", details.join("; "))),
            (None, false) => Some(details.join("; ")),
            (None, true) => None,
        }
    }
}

/// Parse an error body; `None` when it is not MailerSend's JSON error shape.
pub fn decode_error_body(body: &str) -> Option<ApiErrorBody> {
    let raw: RawErrorBody = serde_json::from_str(body).ok()?;
    Some(ApiErrorBody {
        message: raw.message,
        errors: raw
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|(field, msgs)| (field, msgs.into()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn decode_data_unwraps_envelope() {
        let item: Item = decode_data(r#"{"data":{"id":"x"}}"#).unwrap();
        assert_eq!(item, Item { id: "x".to_owned() });
        assert!(decode_data::<Item>(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn decode_list_reads_links_and_meta() {
        let page: Paginated<Item> = decode_list(
            r#"{"data":[{"id":"a"},{"id":"b"}],
                "links":{"first":"f","last":"l","prev":null,"next":"n"},
                "meta":{"current_page":1,"last_page":2,"per_page":25,"total":30}}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.links.next.as_deref(), Some("n"));
        assert!(page.has_more_pages());
        assert_eq!(page.total(), 30);
    }

    #[test]
    fn decode_list_tolerates_missing_meta() {
        let page: Paginated<Item> = decode_list(r#"{"data":[]}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more_pages());

        let page: Paginated<Item> = decode_list(r#"{"data":null,"meta":null}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total(), 0);
        assert!(decode_list::<Item>("not json").is_err());
    }

    #[test]
    fn error_summary_joins_field_messages() {
        let body = decode_error_body(
            r#"{"message":"The given data was invalid.",
                "errors":{"from.email":["The from.email must be verified."],"to":"required"}}"#,
        )
        .unwrap();
        assert_eq!(
            body.summary().as_deref(),
            Some("The given data was invalid.; from.email: The from.email must be verified.; to: required")
        );

        let only_message = decode_error_body(r#"{"message":"Unauthenticated."}"#).unwrap();
        assert_eq!(only_message.summary().as_deref(), Some("Unauthenticated."));

        assert!(decode_error_body("<html>").is_none());
    }
}
