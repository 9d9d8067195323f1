use serde_json::{Map, Value, json};

use crate::domain::{BulkEmailId, EmailRecipient, EmailRequest};
use crate::transport::{ApiRequest, insert_opt};

fn recipient(recipient: &EmailRecipient) -> Value {
    let mut entry = Map::new();
    entry.insert("email".to_owned(), Value::from(recipient.email.as_str()));
    insert_opt(&mut entry, "name", recipient.name.clone());
    Value::Object(entry)
}

fn non_empty<T>(list: &[T], f: impl Fn(&T) -> Value) -> Option<Value> {
    (!list.is_empty()).then(|| list.iter().map(f).collect())
}

fn email_body(request: &EmailRequest) -> Value {
    let mut body = Map::new();
    body.insert("from".to_owned(), recipient(&request.from));
    body.insert("to".to_owned(), request.to.iter().map(recipient).collect());
    insert_opt(&mut body, "cc", non_empty(&request.cc, recipient));
    insert_opt(&mut body, "bcc", non_empty(&request.bcc, recipient));
    insert_opt(&mut body, "reply_to", request.reply_to.as_ref().map(recipient));
    insert_opt(&mut body, "subject", request.subject.clone());
    insert_opt(&mut body, "text", request.text.clone());
    insert_opt(&mut body, "html", request.html.clone());
    insert_opt(
        &mut body,
        "template_id",
        request.template_id.as_ref().map(|id| id.as_str()),
    );
    insert_opt(
        &mut body,
        "attachments",
        non_empty(&request.attachments, |a| {
            let mut entry = Map::new();
            entry.insert("content".to_owned(), Value::from(a.content.as_str()));
            entry.insert("filename".to_owned(), Value::from(a.filename.as_str()));
            entry.insert(
                "disposition".to_owned(),
                Value::from(a.disposition.as_str()),
            );
            insert_opt(&mut entry, "id", a.id.clone());
            Value::Object(entry)
        }),
    );
    insert_opt(
        &mut body,
        "tags",
        non_empty(&request.tags, |t| Value::from(t.as_str())),
    );
    insert_opt(
        &mut body,
        "personalization",
        non_empty(&request.personalization, |p| {
            json!({ "email": p.email.as_str(), "data": p.data })
        }),
    );
    insert_opt(&mut body, "precedence_bulk", request.precedence_bulk);
    insert_opt(&mut body, "send_at", request.send_at.map(|t| t.value()));
    insert_opt(&mut body, "in_reply_to", request.in_reply_to.clone());
    insert_opt(
        &mut body,
        "references",
        non_empty(&request.references, |r| Value::from(r.as_str())),
    );
    if !request.settings.is_empty() {
        let mut settings = Map::new();
        insert_opt(&mut settings, "track_clicks", request.settings.track_clicks);
        insert_opt(&mut settings, "track_opens", request.settings.track_opens);
        insert_opt(&mut settings, "track_content", request.settings.track_content);
        body.insert("settings".to_owned(), Value::Object(settings));
    }
    insert_opt(
        &mut body,
        "headers",
        non_empty(&request.headers, |h| {
            json!({ "name": h.name, "value": h.value })
        }),
    );
    Value::Object(body)
}

pub fn encode_email_send(request: &EmailRequest) -> ApiRequest {
    ApiRequest::post(&["email"], email_body(request))
}

/// Caller guarantees `requests` is non-empty.
pub fn encode_email_send_bulk(requests: &[EmailRequest]) -> ApiRequest {
    ApiRequest::post(
        &["bulk-email"],
        Value::Array(requests.iter().map(email_body).collect()),
    )
}

pub fn encode_bulk_email_status(bulk_email_id: &BulkEmailId) -> ApiRequest {
    ApiRequest::get(&["bulk-email", bulk_email_id.as_str()])
}

pub fn encode_api_quota() -> ApiRequest {
    ApiRequest::get(&["api-quota"])
}
