use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Token {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub scopes: Vec<String>,
    pub preview: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Returned once by `POST token`; the access token cannot be fetched again.
pub struct TokenCreated {
    pub id: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl std::fmt::Debug for TokenCreated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCreated")
            .field("id", &self.id)
            .field("access_token", &"***")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_token_is_redacted_in_debug() {
        let created: TokenCreated =
            serde_json::from_str(r#"{"id":"t1","accessToken":"mlsn.abc","name":"CI"}"#).unwrap();
        assert_eq!(created.access_token, "mlsn.abc");
        assert!(!format!("{created:?}").contains("mlsn.abc"));
    }
}
