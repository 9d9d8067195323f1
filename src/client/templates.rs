use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{ApiResponse, Paginated, Template, TemplateId, TemplatesListRequest};
use crate::transport::{encode_template_delete, encode_template_get, encode_templates_list};

#[derive(Debug, Clone, Copy)]
pub struct TemplatesResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> TemplatesResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: TemplatesListRequest,
    ) -> Result<ApiResponse<Paginated<Template>>, MailerSendError> {
        self.client
            .fetch_list("templates.list", encode_templates_list(&request))
            .await
    }

    pub async fn get(
        &self,
        template_id: TemplateId,
    ) -> Result<ApiResponse<Template>, MailerSendError> {
        self.client
            .fetch_data("templates.get", encode_template_get(&template_id))
            .await
    }

    pub async fn delete(
        &self,
        template_id: TemplateId,
    ) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("templates.delete", encode_template_delete(&template_id))
            .await
    }
}
