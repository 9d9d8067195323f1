use std::time::Duration;

use mailersend::client::MailerSendError;
use mailersend::domain::{DomainId, TemplateId};
use mailersend::{ApiKey, DomainsBuilder, EmailBuilder, MailerSendClient, SmsSendBuilder};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MailerSendClient {
    MailerSendClient::builder(ApiKey::new("test_key").unwrap())
        .base_url(server.uri())
        .user_agent("mailersend-tests")
        .build()
        .unwrap()
}

#[tokio::test]
async fn sends_bearer_auth_and_decodes_list_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer test_key"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "mailersend-tests"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-42")
                .set_body_json(json!({
                    "data": [{"id": "dom1", "name": "example.com", "is_verified": true}],
                    "links": {"first": "f", "last": "l", "prev": "p", "next": null},
                    "meta": {"current_page": 2, "last_page": 2, "per_page": 10, "total": 11}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = DomainsBuilder::new()
        .page(2)
        .limit(10)
        .build_list_request()
        .unwrap();
    let response = client.domains().list(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.request_id.as_deref(), Some("req-42"));
    assert_eq!(response.data.items[0].name, "example.com");
    assert_eq!(response.data.total(), 11);
    assert!(!response.data.has_more_pages());
}

#[tokio::test]
async fn email_send_posts_json_and_reads_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "from": {"email": "info@example.com"},
            "to": [{"email": "john@example.org", "name": "John"}],
            "subject": "Hello",
            "text": "Hi"
        })))
        .respond_with(ResponseTemplate::new(202).insert_header("x-message-id", "msg-1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let email = EmailBuilder::new()
        .from("info@example.com", None)
        .to("john@example.org", Some("John"))
        .subject("Hello")
        .text("Hi")
        .build()
        .unwrap();
    let sent = client.email().send(email).await.unwrap();

    assert_eq!(sent.status, 202);
    assert_eq!(sent.data.message_id.as_deref(), Some("msg-1"));
}

#[tokio::test]
async fn sms_send_reads_sms_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms"))
        .respond_with(ResponseTemplate::new(202).insert_header("x-sms-message-id", "sms-1"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = SmsSendBuilder::new()
        .from("+12025550100")
        .to("+12025550111")
        .text("hello")
        .build()
        .unwrap();
    let sent = client.sms().send(request).await.unwrap();
    assert_eq!(sent.data.message_id.as_deref(), Some("sms-1"));
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-quota"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.api_quota().get().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "unauthorized: Unauthenticated.");
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/templates/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found."})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .templates()
        .get(TemplateId::new("missing").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/dom1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "60")
                .set_body_json(json!({"message": "Too Many Attempts."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .domains()
        .get(DomainId::new("dom1").unwrap())
        .await
        .unwrap_err();
    match err {
        MailerSendError::RateLimited {
            retry_after,
            message,
        } => {
            assert_eq!(retry_after, Some(60));
            assert_eq!(message, "Too Many Attempts.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unprocessable_entity_keeps_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The name has already been taken.",
            "errors": {"name": ["The name has already been taken."]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = DomainsBuilder::new()
        .name("example.com")
        .build_create_request()
        .unwrap();
    let err = client.domains().create(request).await.unwrap_err();
    match err {
        MailerSendError::Api {
            status,
            message,
            errors,
        } => {
            assert_eq!(status, 422);
            assert_eq!(
                message,
                "The name has already been taken.; name: The name has already been taken."
            );
            assert_eq!(errors.get("name").map(Vec::len), Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_falls_back_to_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/domains/dom1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .domains()
        .delete(DomainId::new("dom1").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.to_string(), "server error (502): HTTP 502: Bad Gateway");
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/dom1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ nope"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .domains()
        .get(DomainId::new("dom1").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, MailerSendError::Parse(_)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let client = MailerSendClient::builder(ApiKey::new("test_key").unwrap())
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let err = client.api_quota().get().await.unwrap_err();
    assert!(matches!(err, MailerSendError::Transport(_)));
}
