use serde_json::{Map, Value, json};

use crate::domain::{
    InboundCreateRequest, InboundFilterGroup, InboundForward, InboundId, InboundListRequest,
    InboundRoute, InboundUpdateRequest, MatchType,
};
use crate::transport::{ApiRequest, insert_opt};

fn filter_group(group: &InboundFilterGroup) -> Value {
    let mut body = Map::new();
    body.insert("type".to_owned(), Value::from(group.kind.as_str()));
    if !group.filters.is_empty() {
        let filters = group
            .filters
            .iter()
            .map(|filter| {
                let mut entry = Map::new();
                entry.insert("comparer".to_owned(), Value::from(filter.comparer.as_str()));
                entry.insert("value".to_owned(), Value::from(filter.value.as_str()));
                insert_opt(&mut entry, "key", filter.key.clone());
                Value::Object(entry)
            })
            .collect::<Vec<_>>();
        body.insert("filters".to_owned(), Value::Array(filters));
    }
    Value::Object(body)
}

fn forward(forward: &InboundForward) -> Value {
    let mut body = Map::new();
    body.insert("type".to_owned(), Value::from(forward.kind.as_str()));
    body.insert("value".to_owned(), Value::from(forward.value.as_str()));
    insert_opt(&mut body, "secret", forward.secret.clone());
    Value::Object(body)
}

fn route_body(route: &InboundRoute, mut body: Map<String, Value>) -> Value {
    body.insert("name".to_owned(), Value::from(route.name.as_str()));
    body.insert("domain_enabled".to_owned(), Value::from(route.domain_enabled));
    insert_opt(&mut body, "inbound_domain", route.inbound_domain.clone());
    insert_opt(&mut body, "inbound_priority", route.inbound_priority);
    body.insert("catch_filter".to_owned(), filter_group(&route.catch_filter));
    insert_opt(&mut body, "catch_type", route.catch_type.map(MatchType::as_str));
    body.insert("match_filter".to_owned(), filter_group(&route.match_filter));
    insert_opt(&mut body, "match_type", route.match_type.map(MatchType::as_str));
    body.insert(
        "forwards".to_owned(),
        json!(route.forwards.iter().map(forward).collect::<Vec<_>>()),
    );
    Value::Object(body)
}

pub fn encode_inbound_list(request: &InboundListRequest) -> ApiRequest {
    ApiRequest::get(&["inbound"])
        .paginated(request.pagination)
        .query_opt(
            "domain_id",
            request.domain_id.as_ref().map(|id| id.as_str()),
        )
}

pub fn encode_inbound_get(inbound_id: &InboundId) -> ApiRequest {
    ApiRequest::get(&["inbound", inbound_id.as_str()])
}

pub fn encode_inbound_create(request: &InboundCreateRequest) -> ApiRequest {
    let mut head = Map::new();
    head.insert(
        "domain_id".to_owned(),
        Value::from(request.domain_id.as_str()),
    );
    ApiRequest::post(&["inbound"], route_body(&request.route, head))
}

pub fn encode_inbound_update(request: &InboundUpdateRequest) -> ApiRequest {
    ApiRequest::put(
        &["inbound", request.inbound_id.as_str()],
        route_body(&request.route, Map::new()),
    )
}

pub fn encode_inbound_delete(inbound_id: &InboundId) -> ApiRequest {
    ApiRequest::delete(&["inbound", inbound_id.as_str()])
}
