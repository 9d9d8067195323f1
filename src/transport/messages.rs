use crate::domain::{MessageId, MessagesListRequest};
use crate::transport::ApiRequest;

pub fn encode_messages_list(request: &MessagesListRequest) -> ApiRequest {
    ApiRequest::get(&["messages"]).paginated(request.pagination)
}

pub fn encode_message_get(message_id: &MessageId) -> ApiRequest {
    ApiRequest::get(&["messages", message_id.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_pagination() {
        let api = encode_messages_list(&MessagesListRequest::default());
        assert_eq!(api.path(), "messages");
        assert_eq!(api.query.len(), 2);

        let api = encode_message_get(&MessageId::new("m1").unwrap());
        assert_eq!(api.path(), "messages/m1");
    }
}
