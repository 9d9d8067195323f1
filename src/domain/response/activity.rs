use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// One activity event (`queued`, `delivered`, `opened`, ...).
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub email: Option<ActivityEmail>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ActivityEmail {
    pub id: String,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub recipient: Option<ActivityRecipient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ActivityRecipient {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_email_and_recipient() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "id": "act1",
                "type": "opened",
                "created_at": "2024-01-01T10:00:00.000000Z",
                "email": {
                    "id": "em1",
                    "from": "info@example.com",
                    "subject": "Hi",
                    "tags": null,
                    "status": "delivered",
                    "recipient": {"id": "rc1", "email": "john@example.org", "deleted_at": null}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(activity.kind.as_deref(), Some("opened"));
        let email = activity.email.unwrap();
        assert!(email.tags.is_empty());
        assert_eq!(
            email.recipient.and_then(|r| r.email).as_deref(),
            Some("john@example.org")
        );
    }
}
