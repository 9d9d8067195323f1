use serde::Deserialize;

use super::de;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// Inbound route as returned by the API.
pub struct InboundRouteInfo {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub domain: Option<InboundDomain>,
    pub dns_checked_at: Option<String>,
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "de::null_default")]
    pub filters: Vec<InboundFilterInfo>,
    #[serde(deserialize_with = "de::null_default")]
    pub forwards: Vec<InboundForwardInfo>,
    pub priority: Option<u8>,
    #[serde(rename = "mxValues")]
    pub mx_values: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InboundDomain {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InboundFilterInfo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub key: Option<String>,
    pub comparer: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InboundForwardInfo {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
    pub secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_route_with_filters_and_forwards() {
        let route: InboundRouteInfo = serde_json::from_str(
            r#"{"id":"in1","name":"Support","address":"abc@inbound.mailersend.net",
                "domain":{"id":"d1","name":"example.com"},"enabled":true,
                "filters":[{"type":"match_header","key":"X-Tag","comparer":"equal","value":"vip"}],
                "forwards":[{"id":"f1","type":"webhook","value":"https://example.com/in","secret":"s"}],
                "priority":null}"#,
        )
        .unwrap();
        assert_eq!(route.domain.map(|d| d.id).as_deref(), Some("d1"));
        assert_eq!(route.filters[0].key.as_deref(), Some("X-Tag"));
        assert_eq!(route.forwards[0].kind.as_deref(), Some("webhook"));
        assert_eq!(route.priority, None);
    }
}
