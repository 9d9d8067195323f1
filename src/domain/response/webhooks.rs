use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: String,
    pub url: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub events: Vec<String>,
    pub enabled: Option<bool>,
    pub editable: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
