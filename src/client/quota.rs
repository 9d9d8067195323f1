use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{ApiQuota, ApiResponse};
use crate::transport::encode_api_quota;

#[derive(Debug, Clone, Copy)]
/// Daily request quota of the account.
pub struct ApiQuotaResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> ApiQuotaResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<ApiResponse<ApiQuota>, MailerSendError> {
        self.client
            .fetch_plain("api_quota.get", encode_api_quota())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{FakeTransport, make_client};

    #[tokio::test]
    async fn quota_body_is_not_enveloped() {
        let transport = FakeTransport::new(
            200,
            r#"{"quota":100000,"remaining":99990,"reset":"2024-01-02T00:00:00Z"}"#,
        );
        let client = make_client(transport.clone());

        let quota = client.api_quota().get().await.unwrap().data;
        assert_eq!(quota.remaining, 99_990);
        assert_eq!(transport.last_call().1, "/v1/api-quota");
    }
}
