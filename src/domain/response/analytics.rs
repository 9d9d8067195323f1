use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// `analytics/date` payload.
pub struct AnalyticsByDate {
    #[serde(deserialize_with = "de::string_or_number")]
    pub date_from: Option<String>,
    #[serde(deserialize_with = "de::string_or_number")]
    pub date_to: Option<String>,
    pub group_by: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub stats: Vec<DateStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Counters for one bucket; events that were not requested stay at zero.
pub struct DateStats {
    #[serde(deserialize_with = "de::string_or_number")]
    pub date: Option<String>,
    pub queued: u64,
    pub sent: u64,
    pub delivered: u64,
    pub soft_bounced: u64,
    pub hard_bounced: u64,
    pub opened: u64,
    pub opened_unique: u64,
    pub clicked: u64,
    pub clicked_unique: u64,
    pub unsubscribed: u64,
    pub spam_complaints: u64,
    pub survey_opened: u64,
    pub survey_submitted: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Opens grouped by country, user agent, or reading environment.
pub struct OpensBreakdown {
    #[serde(deserialize_with = "de::string_or_number")]
    pub date_from: Option<String>,
    #[serde(deserialize_with = "de::string_or_number")]
    pub date_to: Option<String>,
    #[serde(deserialize_with = "de::null_default")]
    pub stats: Vec<NamedCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}
