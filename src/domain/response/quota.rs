use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Daily request quota (`api-quota`).
pub struct ApiQuota {
    pub quota: u64,
    pub remaining: u64,
    /// When the quota resets, ISO 8601.
    pub reset: Option<String>,
}
