use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Option<String>,
    pub template_stats: Option<TemplateStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TemplateStats {
    pub total: Option<u64>,
    pub queued: Option<u64>,
    pub sent: Option<u64>,
    pub rejected: Option<u64>,
    pub delivered: Option<u64>,
    pub last_email_sent_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_stats_are_optional() {
        let t: Template =
            serde_json::from_str(r#"{"id":"t1","name":"Welcome","type":"html"}"#).unwrap();
        assert_eq!(t.kind.as_deref(), Some("html"));
        assert!(t.template_stats.is_none());
    }
}
