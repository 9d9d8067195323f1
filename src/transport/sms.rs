use serde_json::{Map, Value, json};

use crate::domain::{
    SmsMessageId, SmsMessagesListRequest, SmsNumberId, SmsNumberUpdateRequest,
    SmsNumbersListRequest, SmsSendRequest,
};
use crate::transport::ApiRequest;

pub fn encode_sms_messages_list(request: &SmsMessagesListRequest) -> ApiRequest {
    ApiRequest::get(&["sms-messages"]).paginated(request.pagination)
}

pub fn encode_sms_message_get(sms_message_id: &SmsMessageId) -> ApiRequest {
    ApiRequest::get(&["sms-messages", sms_message_id.as_str()])
}

pub fn encode_sms_numbers_list(request: &SmsNumbersListRequest) -> ApiRequest {
    ApiRequest::get(&["sms-numbers"])
        .paginated(request.pagination)
        .query_opt("paused", request.paused)
}

pub fn encode_sms_number_get(sms_number_id: &SmsNumberId) -> ApiRequest {
    ApiRequest::get(&["sms-numbers", sms_number_id.as_str()])
}

pub fn encode_sms_number_update(request: &SmsNumberUpdateRequest) -> ApiRequest {
    ApiRequest::put(
        &["sms-numbers", request.sms_number_id.as_str()],
        json!({ "paused": request.paused }),
    )
}

pub fn encode_sms_number_delete(sms_number_id: &SmsNumberId) -> ApiRequest {
    ApiRequest::delete(&["sms-numbers", sms_number_id.as_str()])
}

pub fn encode_sms_send(request: &SmsSendRequest) -> ApiRequest {
    let mut body = Map::new();
    body.insert("from".to_owned(), Value::from(request.from.e164()));
    body.insert(
        "to".to_owned(),
        request.to.iter().map(|p| Value::from(p.e164())).collect(),
    );
    body.insert("text".to_owned(), Value::from(request.text.as_str()));
    if !request.personalization.is_empty() {
        let entries = request
            .personalization
            .iter()
            .map(|p| {
                json!({
                    "phone_number": p.phone_number.e164(),
                    "data": p.data,
                })
            })
            .collect();
        body.insert("personalization".to_owned(), Value::Array(entries));
    }
    ApiRequest::post(&["sms"], Value::Object(body))
}
