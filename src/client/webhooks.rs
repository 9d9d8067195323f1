use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, Paginated, Webhook, WebhookCreateRequest, WebhookId, WebhookUpdateRequest,
    WebhooksListRequest,
};
use crate::transport::{
    encode_webhook_create, encode_webhook_delete, encode_webhook_get, encode_webhook_update,
    encode_webhooks_list,
};

#[derive(Debug, Clone, Copy)]
/// Webhook subscriptions for a domain.
pub struct WebhooksResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> WebhooksResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: WebhooksListRequest,
    ) -> Result<ApiResponse<Paginated<Webhook>>, MailerSendError> {
        self.client
            .fetch_list("webhooks.list", encode_webhooks_list(&request))
            .await
    }

    pub async fn get(
        &self,
        webhook_id: WebhookId,
    ) -> Result<ApiResponse<Webhook>, MailerSendError> {
        self.client
            .fetch_data("webhooks.get", encode_webhook_get(&webhook_id))
            .await
    }

    pub async fn create(
        &self,
        request: WebhookCreateRequest,
    ) -> Result<ApiResponse<Webhook>, MailerSendError> {
        self.client
            .fetch_data("webhooks.create", encode_webhook_create(&request))
            .await
    }

    pub async fn update(
        &self,
        request: WebhookUpdateRequest,
    ) -> Result<ApiResponse<Webhook>, MailerSendError> {
        self.client
            .fetch_data("webhooks.update", encode_webhook_update(&request))
            .await
    }

    pub async fn delete(&self, webhook_id: WebhookId) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("webhooks.delete", encode_webhook_delete(&webhook_id))
            .await
    }
}
