use tracing::debug;

use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, BulkEmailAccepted, BulkEmailId, BulkEmailStatus, EmailRequest, EmailSent,
    ValidationError,
};
use crate::transport::{encode_bulk_email_status, encode_email_send, encode_email_send_bulk};

const MESSAGE_ID_HEADER: &str = "x-message-id";

#[derive(Debug, Clone, Copy)]
/// Email sending, single and bulk.
pub struct EmailResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> EmailResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `POST email`. The API answers `202 Accepted` with the id in `X-Message-Id`.
    pub async fn send(
        &self,
        request: EmailRequest,
    ) -> Result<ApiResponse<EmailSent>, MailerSendError> {
        let response = self
            .client
            .fetch_header("email.send", encode_email_send(&request), MESSAGE_ID_HEADER)
            .await?;
        Ok(response.map(|message_id| EmailSent { message_id }))
    }

    /// `POST bulk-email`. Messages are queued; poll [`EmailResource::bulk_status`]
    /// with the returned `bulk_email_id`.
    pub async fn send_bulk(
        &self,
        requests: Vec<EmailRequest>,
    ) -> Result<ApiResponse<BulkEmailAccepted>, MailerSendError> {
        if requests.is_empty() {
            return Err(ValidationError::TooFew {
                field: "emails",
                min: 1,
                actual: 0,
            }
            .into());
        }
        debug!(count = requests.len(), "queueing bulk email");
        self.client
            .fetch_plain("email.send_bulk", encode_email_send_bulk(&requests))
            .await
    }

    pub async fn bulk_status(
        &self,
        bulk_email_id: BulkEmailId,
    ) -> Result<ApiResponse<BulkEmailStatus>, MailerSendError> {
        self.client
            .fetch_data("email.bulk_status", encode_bulk_email_status(&bulk_email_id))
            .await
    }
}
