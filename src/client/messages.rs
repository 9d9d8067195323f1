use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{ApiResponse, Message, MessageId, MessagesListRequest, Paginated};
use crate::transport::{encode_message_get, encode_messages_list};

#[derive(Debug, Clone, Copy)]
/// Sent messages.
pub struct MessagesResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> MessagesResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: MessagesListRequest,
    ) -> Result<ApiResponse<Paginated<Message>>, MailerSendError> {
        self.client
            .fetch_list("messages.list", encode_messages_list(&request))
            .await
    }

    pub async fn get(
        &self,
        message_id: MessageId,
    ) -> Result<ApiResponse<Message>, MailerSendError> {
        self.client
            .fetch_data("messages.get", encode_message_get(&message_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::MessagesBuilder;

    use super::*;

    #[tokio::test]
    async fn get_decodes_emails_and_domain() {
        let body = r#"{"data":{"id":"m1","emails":[{"id":"e1","subject":"Hi","tags":null}],
            "domain":{"id":"dom1","name":"example.com"}}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let message = client
            .messages()
            .get(MessageId::new("m1").unwrap())
            .await
            .unwrap()
            .data;
        assert_eq!(message.emails[0].subject.as_deref(), Some("Hi"));
        assert!(message.emails[0].tags.is_empty());
        assert_eq!(
            message.domain.and_then(|d| d.name).as_deref(),
            Some("example.com")
        );
        assert_eq!(transport.last_call().1, "/v1/messages/m1");
    }

    #[tokio::test]
    async fn list_paginates() {
        let transport = FakeTransport::new(200, r#"{"data":[]}"#);
        let client = make_client(transport.clone());

        let request = MessagesBuilder::new().page(3).build_list_request().unwrap();
        let page = client.messages().list(request).await.unwrap().data;
        assert!(page.items.is_empty());
        assert_eq!(transport.last_call().1, "/v1/messages?page=3&limit=25");
    }
}
