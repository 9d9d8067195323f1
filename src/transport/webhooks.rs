use serde_json::{Map, Value};

use crate::domain::{
    WebhookCreateRequest, WebhookEvent, WebhookId, WebhookUpdateRequest, WebhooksListRequest,
};
use crate::transport::{ApiRequest, insert_opt};

fn events(events: &[WebhookEvent]) -> Value {
    events.iter().map(|e| Value::from(e.as_str())).collect()
}

pub fn encode_webhooks_list(request: &WebhooksListRequest) -> ApiRequest {
    ApiRequest::get(&["webhooks"]).query("domain_id", request.domain_id.as_str())
}

pub fn encode_webhook_get(webhook_id: &WebhookId) -> ApiRequest {
    ApiRequest::get(&["webhooks", webhook_id.as_str()])
}

pub fn encode_webhook_create(request: &WebhookCreateRequest) -> ApiRequest {
    let mut body = Map::new();
    body.insert("url".to_owned(), Value::from(request.url.as_str()));
    body.insert("name".to_owned(), Value::from(request.name.as_str()));
    body.insert("events".to_owned(), events(&request.events));
    body.insert(
        "domain_id".to_owned(),
        Value::from(request.domain_id.as_str()),
    );
    insert_opt(&mut body, "enabled", request.enabled);
    ApiRequest::post(&["webhooks"], Value::Object(body))
}

pub fn encode_webhook_update(request: &WebhookUpdateRequest) -> ApiRequest {
    let mut body = Map::new();
    insert_opt(&mut body, "url", request.url.clone());
    insert_opt(&mut body, "name", request.name.clone());
    insert_opt(&mut body, "events", request.events.as_deref().map(events));
    insert_opt(&mut body, "enabled", request.enabled);
    ApiRequest::put(
        &["webhooks", request.webhook_id.as_str()],
        Value::Object(body),
    )
}

pub fn encode_webhook_delete(webhook_id: &WebhookId) -> ApiRequest {
    ApiRequest::delete(&["webhooks", webhook_id.as_str()])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::WebhooksBuilder;
    use crate::transport::HttpMethod;

    #[test]
    fn list_sends_domain_id_query() {
        let request = WebhooksBuilder::new()
            .domain_id("dom1")
            .build_list_request()
            .unwrap();
        let api = encode_webhooks_list(&request);
        assert_eq!(api.path(), "webhooks");
        assert_eq!(
            api.query,
            vec![("domain_id".to_owned(), "dom1".to_owned())]
        );
    }

    #[test]
    fn create_body() {
        let request = WebhooksBuilder::new()
            .domain_id("dom1")
            .url("https://example.com/hooks")
            .name("Main")
            .add_event(WebhookEvent::ActivityOpened)
            .add_event(WebhookEvent::MaintenanceStart)
            .enabled(false)
            .build_create_request()
            .unwrap();
        let api = encode_webhook_create(&request);
        assert_eq!(api.method, HttpMethod::Post);
        assert_eq!(
            api.body,
            Some(json!({
                "url": "https://example.com/hooks",
                "name": "Main",
                "events": ["activity.opened", "maintenance.start"],
                "domain_id": "dom1",
                "enabled": false
            }))
        );
    }

    #[test]
    fn update_sends_only_set_fields() {
        let request = WebhooksBuilder::new()
            .webhook_id("wh1")
            .name("Renamed")
            .build_update_request()
            .unwrap();
        let api = encode_webhook_update(&request);
        assert_eq!(api.method, HttpMethod::Put);
        assert_eq!(api.path(), "webhooks/wh1");
        assert_eq!(api.body, Some(json!({"name": "Renamed"})));

        let id = WebhookId::new("wh1").unwrap();
        assert_eq!(encode_webhook_delete(&id).method, HttpMethod::Delete);
        assert_eq!(encode_webhook_get(&id).path(), "webhooks/wh1");
    }
}
