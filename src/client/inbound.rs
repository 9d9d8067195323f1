use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, InboundCreateRequest, InboundId, InboundListRequest, InboundRouteInfo,
    InboundUpdateRequest, Paginated,
};
use crate::transport::{
    encode_inbound_create, encode_inbound_delete, encode_inbound_get, encode_inbound_list,
    encode_inbound_update,
};

#[derive(Debug, Clone, Copy)]
/// Inbound routes: receive mail and forward it to addresses or webhooks.
pub struct InboundResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> InboundResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: InboundListRequest,
    ) -> Result<ApiResponse<Paginated<InboundRouteInfo>>, MailerSendError> {
        self.client
            .fetch_list("inbound.list", encode_inbound_list(&request))
            .await
    }

    pub async fn get(
        &self,
        inbound_id: InboundId,
    ) -> Result<ApiResponse<InboundRouteInfo>, MailerSendError> {
        self.client
            .fetch_data("inbound.get", encode_inbound_get(&inbound_id))
            .await
    }

    pub async fn create(
        &self,
        request: InboundCreateRequest,
    ) -> Result<ApiResponse<InboundRouteInfo>, MailerSendError> {
        self.client
            .fetch_data("inbound.create", encode_inbound_create(&request))
            .await
    }

    /// Replaces the whole route definition.
    pub async fn update(
        &self,
        request: InboundUpdateRequest,
    ) -> Result<ApiResponse<InboundRouteInfo>, MailerSendError> {
        self.client
            .fetch_data("inbound.update", encode_inbound_update(&request))
            .await
    }

    pub async fn delete(&self, inbound_id: InboundId) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("inbound.delete", encode_inbound_delete(&inbound_id))
            .await
    }
}
