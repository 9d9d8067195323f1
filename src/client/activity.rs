use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{Activity, ActivityId, ActivityListRequest, ApiResponse, Paginated};
use crate::transport::{encode_activity_get, encode_activity_list};

#[derive(Debug, Clone, Copy)]
/// Email activity per domain.
pub struct ActivityResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> ActivityResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `GET activity/{domain_id}`.
    pub async fn list(
        &self,
        request: ActivityListRequest,
    ) -> Result<ApiResponse<Paginated<Activity>>, MailerSendError> {
        self.client
            .fetch_list("activity.list", encode_activity_list(&request))
            .await
    }

    /// `GET activities/{activity_id}`.
    pub async fn get(
        &self,
        activity_id: ActivityId,
    ) -> Result<ApiResponse<Activity>, MailerSendError> {
        self.client
            .fetch_data("activity.get", encode_activity_get(&activity_id))
            .await
    }
}
