use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `POST email` has no body; the id comes from `X-Message-Id`.
pub struct EmailSent {
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BulkEmailAccepted {
    pub message: Option<String>,
    pub bulk_email_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// `bulk-email/{id}`.
pub struct BulkEmailStatus {
    pub id: String,
    pub state: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub total_recipients_count: u64,
    #[serde(deserialize_with = "de::null_default")]
    pub suppressed_recipients_count: u64,
    #[serde(deserialize_with = "de::null_default")]
    pub suppressed_recipients: serde_json::Value,
    #[serde(deserialize_with = "de::null_default")]
    pub validation_errors_count: u64,
    #[serde(deserialize_with = "de::null_default")]
    pub validation_errors: serde_json::Value,
    #[serde(deserialize_with = "de::null_default")]
    pub messages_id: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl BulkEmailStatus {
    pub fn is_completed(&self) -> bool {
        self.state.as_deref() == Some("completed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_status_decodes() {
        let status: BulkEmailStatus = serde_json::from_str(
            r#"{"id":"b1","state":"completed","total_recipients_count":2,
                "suppressed_recipients":null,"messages_id":["m1","m2"]}"#,
        )
        .unwrap();
        assert!(status.is_completed());
        assert_eq!(status.messages_id, vec!["m1", "m2"]);
        assert!(status.suppressed_recipients.is_null());
    }
}
