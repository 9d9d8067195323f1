use serde_json::{Map, Value};

use crate::domain::{
    DomainCreateRequest, DomainId, DomainListRequest, DomainRecipientsRequest,
    DomainSettingsRequest, Subdomain,
};
use crate::transport::{ApiRequest, insert_opt};

pub fn encode_domain_list(request: &DomainListRequest) -> ApiRequest {
    ApiRequest::get(&["domains"])
        .paginated(request.pagination)
        .query_opt("verified", request.verified)
}

pub fn encode_domain_get(domain_id: &DomainId) -> ApiRequest {
    ApiRequest::get(&["domains", domain_id.as_str()])
}

pub fn encode_domain_create(request: &DomainCreateRequest) -> ApiRequest {
    let subdomain = |value: &Option<Subdomain>| value.as_ref().map(|s| s.as_str().to_owned());

    let mut body = Map::new();
    body.insert("name".to_owned(), Value::from(request.name.as_str()));
    insert_opt(
        &mut body,
        "return_path_subdomain",
        subdomain(&request.return_path_subdomain),
    );
    insert_opt(
        &mut body,
        "custom_tracking_subdomain",
        subdomain(&request.custom_tracking_subdomain),
    );
    insert_opt(
        &mut body,
        "inbound_routing_subdomain",
        subdomain(&request.inbound_routing_subdomain),
    );
    ApiRequest::post(&["domains"], Value::Object(body))
}

pub fn encode_domain_delete(domain_id: &DomainId) -> ApiRequest {
    ApiRequest::delete(&["domains", domain_id.as_str()])
}

pub fn encode_domain_recipients(request: &DomainRecipientsRequest) -> ApiRequest {
    ApiRequest::get(&["domains", request.domain_id.as_str(), "recipients"])
        .paginated(request.pagination)
}

pub fn encode_domain_update_settings(request: &DomainSettingsRequest) -> ApiRequest {
    let mut body = Map::new();
    insert_opt(&mut body, "send_paused", request.send_paused);
    insert_opt(&mut body, "track_clicks", request.track_clicks);
    insert_opt(&mut body, "track_opens", request.track_opens);
    insert_opt(&mut body, "track_unsubscribe", request.track_unsubscribe);
    insert_opt(&mut body, "track_content", request.track_content);
    insert_opt(
        &mut body,
        "track_unsubscribe_html",
        request.track_unsubscribe_html.clone(),
    );
    insert_opt(
        &mut body,
        "track_unsubscribe_plain",
        request.track_unsubscribe_plain.clone(),
    );
    insert_opt(
        &mut body,
        "custom_tracking_enabled",
        request.custom_tracking_enabled,
    );
    insert_opt(
        &mut body,
        "custom_tracking_subdomain",
        request
            .custom_tracking_subdomain
            .as_ref()
            .map(|s| s.as_str().to_owned()),
    );
    insert_opt(&mut body, "precedence_bulk", request.precedence_bulk);
    insert_opt(
        &mut body,
        "ignore_duplicated_recipients",
        request.ignore_duplicated_recipients,
    );

    ApiRequest::put(
        &["domains", request.domain_id.as_str(), "settings"],
        Value::Object(body),
    )
}

pub fn encode_domain_dns_records(domain_id: &DomainId) -> ApiRequest {
    ApiRequest::get(&["domains", domain_id.as_str(), "dns-records"])
}

pub fn encode_domain_verification(domain_id: &DomainId) -> ApiRequest {
    ApiRequest::get(&["domains", domain_id.as_str(), "verify"])
}
