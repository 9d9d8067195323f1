use serde_json::{Value, json};

use crate::domain::{
    TokenCreateRequest, TokenId, TokenRenameRequest, TokenStatusRequest, TokensListRequest,
};
use crate::transport::ApiRequest;

pub fn encode_tokens_list(request: &TokensListRequest) -> ApiRequest {
    ApiRequest::get(&["token"]).paginated(request.pagination)
}

pub fn encode_token_get(token_id: &TokenId) -> ApiRequest {
    ApiRequest::get(&["token", token_id.as_str()])
}

pub fn encode_token_create(request: &TokenCreateRequest) -> ApiRequest {
    let scopes = request
        .scopes
        .iter()
        .map(|s| Value::from(s.as_str()))
        .collect::<Vec<_>>();
    ApiRequest::post(
        &["token"],
        json!({
            "name": request.name,
            "domain_id": request.domain_id.as_str(),
            "scopes": scopes,
        }),
    )
}

pub fn encode_token_update_status(request: &TokenStatusRequest) -> ApiRequest {
    ApiRequest::put(
        &["token", request.token_id.as_str(), "settings"],
        json!({ "status": request.status.as_str() }),
    )
}

pub fn encode_token_rename(request: &TokenRenameRequest) -> ApiRequest {
    ApiRequest::put(
        &["token", request.token_id.as_str()],
        json!({ "name": request.name }),
    )
}

pub fn encode_token_delete(token_id: &TokenId) -> ApiRequest {
    ApiRequest::delete(&["token", token_id.as_str()])
}
