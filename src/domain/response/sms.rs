use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SmsMessage {
    pub id: String,
    pub from: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub to: Vec<String>,
    pub text: Option<String>,
    pub paused: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SmsNumber {
    pub id: String,
    pub telephone_number: Option<String>,
    pub paused: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// `POST sms` replies with `202 Accepted`; the id is in `X-SMS-Message-Id`.
pub struct SmsSent {
    pub message_id: Option<String>,
}
