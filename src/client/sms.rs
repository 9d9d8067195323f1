use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, Paginated, SmsMessage, SmsMessageId, SmsMessagesListRequest, SmsNumber,
    SmsNumberId, SmsNumberUpdateRequest, SmsNumbersListRequest, SmsSendRequest, SmsSent,
};
use crate::transport::{
    encode_sms_message_get, encode_sms_messages_list, encode_sms_number_delete,
    encode_sms_number_get, encode_sms_number_update, encode_sms_numbers_list, encode_sms_send,
};

const SMS_MESSAGE_ID_HEADER: &str = "x-sms-message-id";

#[derive(Debug, Clone, Copy)]
/// SMS sending.
pub struct SmsResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `POST sms`. The API answers `202 Accepted` and reports the message id in a header.
    pub async fn send(
        &self,
        request: SmsSendRequest,
    ) -> Result<ApiResponse<SmsSent>, MailerSendError> {
        let response = self
            .client
            .fetch_header("sms.send", encode_sms_send(&request), SMS_MESSAGE_ID_HEADER)
            .await?;
        Ok(response.map(|message_id| SmsSent { message_id }))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmsMessagesResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsMessagesResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: SmsMessagesListRequest,
    ) -> Result<ApiResponse<Paginated<SmsMessage>>, MailerSendError> {
        self.client
            .fetch_list("sms_messages.list", encode_sms_messages_list(&request))
            .await
    }

    pub async fn get(
        &self,
        sms_message_id: SmsMessageId,
    ) -> Result<ApiResponse<SmsMessage>, MailerSendError> {
        self.client
            .fetch_data("sms_messages.get", encode_sms_message_get(&sms_message_id))
            .await
    }
}

#[derive(Debug, Clone, Copy)]
/// Phone numbers provisioned for SMS.
pub struct SmsNumbersResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsNumbersResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: SmsNumbersListRequest,
    ) -> Result<ApiResponse<Paginated<SmsNumber>>, MailerSendError> {
        self.client
            .fetch_list("sms_numbers.list", encode_sms_numbers_list(&request))
            .await
    }

    pub async fn get(
        &self,
        sms_number_id: SmsNumberId,
    ) -> Result<ApiResponse<SmsNumber>, MailerSendError> {
        self.client
            .fetch_data("sms_numbers.get", encode_sms_number_get(&sms_number_id))
            .await
    }

    /// Pause or resume a number.
    pub async fn update(
        &self,
        request: SmsNumberUpdateRequest,
    ) -> Result<ApiResponse<SmsNumber>, MailerSendError> {
        self.client
            .fetch_data("sms_numbers.update", encode_sms_number_update(&request))
            .await
    }

    pub async fn delete(
        &self,
        sms_number_id: SmsNumberId,
    ) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("sms_numbers.delete", encode_sms_number_delete(&sms_number_id))
            .await
    }
}
