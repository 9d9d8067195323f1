use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// A sent message and the emails it produced.
pub struct Message {
    pub id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub emails: Vec<MessageEmail>,
    pub domain: Option<MessageDomain>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MessageEmail {
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
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MessageDomain {
    pub id: String,
    pub name: Option<String>,
}
