use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// Sending domain.
pub struct Domain {
    pub id: String,
    pub name: String,
    pub dkim: Option<bool>,
    pub spf: Option<bool>,
    pub tracking: Option<bool>,
    pub is_verified: Option<bool>,
    pub is_cname_verified: Option<bool>,
    pub is_dns_active: Option<bool>,
    pub is_cname_active: Option<bool>,
    pub is_tracking_allowed: Option<bool>,
    pub has_not_queued_messages: Option<bool>,
    pub not_queued_messages_count: Option<u64>,
    pub domain_settings: Option<DomainSettings>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DomainSettings {
    pub send_paused: Option<bool>,
    pub track_clicks: Option<bool>,
    pub track_opens: Option<bool>,
    pub track_unsubscribe: Option<bool>,
    pub track_unsubscribe_html: Option<String>,
    pub track_unsubscribe_plain: Option<String>,
    pub track_content: Option<bool>,
    pub custom_tracking_enabled: Option<bool>,
    pub custom_tracking_subdomain: Option<String>,
    pub return_path_subdomain: Option<String>,
    pub inbound_routing_enabled: Option<bool>,
    pub inbound_routing_subdomain: Option<String>,
    pub precedence_bulk: Option<bool>,
    pub ignore_duplicated_recipients: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// `domains/{id}/dns-records`.
pub struct DnsRecords {
    pub id: String,
    pub spf: Option<DnsRecord>,
    pub dkim: Option<DnsRecord>,
    pub return_path: Option<DnsRecord>,
    pub custom_tracking: Option<DnsRecord>,
    pub inbound_routing: Option<DnsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub hostname: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// `domains/{id}/verify`.
pub struct DomainVerification {
    #[serde(deserialize_with = "de::null_default")]
    pub dkim: bool,
    #[serde(deserialize_with = "de::null_default")]
    pub spf: bool,
    #[serde(deserialize_with = "de::null_default")]
    pub mx: bool,
    #[serde(deserialize_with = "de::null_default")]
    pub tracking: bool,
    #[serde(deserialize_with = "de::null_default")]
    pub cname: bool,
    #[serde(deserialize_with = "de::null_default")]
    pub rp_cname: bool,
}

impl DomainVerification {
    /// SPF and DKIM both pass.
    pub fn is_sending_ready(&self) -> bool {
        self.dkim && self.spf
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Recipient seen on a domain.
pub struct Recipient {
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
    fn domain_with_settings() {
        let domain: Domain = serde_json::from_str(
            r#"{"id":"d1","name":"example.com","dkim":true,"spf":null,
                "domain_settings":{"send_paused":false,"track_clicks":true,"custom_tracking_subdomain":"email"}}"#,
        )
        .unwrap();
        assert_eq!(domain.name, "example.com");
        assert_eq!(domain.spf, None);
        let settings = domain.domain_settings.unwrap();
        assert_eq!(settings.track_clicks, Some(true));
        assert_eq!(settings.custom_tracking_subdomain.as_deref(), Some("email"));
    }

    #[test]
    fn verification_flags() {
        let v: DomainVerification =
            serde_json::from_str(r#"{"dkim":true,"spf":true,"mx":false,"tracking":null}"#).unwrap();
        assert!(v.is_sending_ready());
        assert!(!v.tracking);
    }

    #[test]
    fn dns_record_type_field() {
        let records: DnsRecords = serde_json::from_str(
            r#"{"id":"d1","spf":{"hostname":"example.com","type":"TXT","value":"v=spf1"}}"#,
        )
        .unwrap();
        assert_eq!(records.spf.and_then(|r| r.kind).as_deref(), Some("TXT"));
        assert!(records.dkim.is_none());
    }
}
