use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, Paginated, Token, TokenCreateRequest, TokenCreated, TokenId, TokenRenameRequest,
    TokenStatusRequest, TokensListRequest,
};
use crate::transport::{
    encode_token_create, encode_token_delete, encode_token_get, encode_token_rename,
    encode_token_update_status, encode_tokens_list,
};

#[derive(Debug, Clone, Copy)]
/// API tokens.
pub struct TokensResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> TokensResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: TokensListRequest,
    ) -> Result<ApiResponse<Paginated<Token>>, MailerSendError> {
        self.client
            .fetch_list("tokens.list", encode_tokens_list(&request))
            .await
    }

    pub async fn get(&self, token_id: TokenId) -> Result<ApiResponse<Token>, MailerSendError> {
        self.client
            .fetch_data("tokens.get", encode_token_get(&token_id))
            .await
    }

    /// The returned access token is only shown once.
    pub async fn create(
        &self,
        request: TokenCreateRequest,
    ) -> Result<ApiResponse<TokenCreated>, MailerSendError> {
        self.client
            .fetch_data("tokens.create", encode_token_create(&request))
            .await
    }

    /// Pause or unpause a token.
    pub async fn update_status(
        &self,
        request: TokenStatusRequest,
    ) -> Result<ApiResponse<Token>, MailerSendError> {
        self.client
            .fetch_data("tokens.update_status", encode_token_update_status(&request))
            .await
    }

    pub async fn rename(
        &self,
        request: TokenRenameRequest,
    ) -> Result<ApiResponse<Token>, MailerSendError> {
        self.client
            .fetch_data("tokens.rename", encode_token_rename(&request))
            .await
    }

    pub async fn delete(&self, token_id: TokenId) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("tokens.delete", encode_token_delete(&token_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::{TokenScope, TokensBuilder};
    use crate::transport::HttpMethod;

    use super::*;

    #[tokio::test]
    async fn create_returns_access_token() {
        let body = r#"{"data":{"id":"tok1","accessToken":"mlsn.secret","name":"CI","status":"unpaused"}}"#;
        let transport = FakeTransport::new(201, body);
        let client = make_client(transport.clone());

        let request = TokensBuilder::new()
            .name("CI")
            .domain_id("dom1")
            .add_scope(TokenScope::EmailFull)
            .build_create_request()
            .unwrap();
        let created = client.tokens().create(request).await.unwrap().data;
        assert_eq!(created.access_token, "mlsn.secret");
        assert!(!format!("{created:?}").contains("mlsn.secret"));

        let (method, target, body) = transport.last_call();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(target, "/v1/token");
        assert_eq!(
            body,
            Some(json!({"name": "CI", "domain_id": "dom1", "scopes": ["email_full"]}))
        );
    }

    #[tokio::test]
    async fn pause_targets_settings_path() {
        let transport = FakeTransport::new(200, r#"{"data":{"id":"tok1","status":"pause"}}"#);
        let client = make_client(transport.clone());

        let request = TokensBuilder::new()
            .token_id("tok1")
            .pause()
            .build_status_request()
            .unwrap();
        let token = client.tokens().update_status(request).await.unwrap().data;
        assert_eq!(token.status.as_deref(), Some("pause"));

        let (method, target, body) = transport.last_call();
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(target, "/v1/token/tok1/settings");
        assert_eq!(body, Some(json!({"status": "pause"})));
    }
}
