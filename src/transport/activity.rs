use crate::domain::{ActivityId, ActivityListRequest};
use crate::transport::ApiRequest;

pub fn encode_activity_list(request: &ActivityListRequest) -> ApiRequest {
    let mut api = ApiRequest::get(&["activity", request.domain_id.as_str()])
        .paginated(request.pagination)
        .query("date_from", request.date_from.value())
        .query("date_to", request.date_to.value());
    for (idx, event) in request.events.iter().enumerate() {
        api = api.query(format!("event[{idx}]"), event.as_str());
    }
    api
}

pub fn encode_activity_get(activity_id: &ActivityId) -> ApiRequest {
    ApiRequest::get(&["activities", activity_id.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityBuilder, ActivityEvent};
    use crate::transport::HttpMethod;

    #[test]
    fn list_encodes_indexed_events() {
        let request = ActivityBuilder::new()
            .domain_id("dom1")
            .page(2)
            .limit(50)
            .date_from(1_700_000_000)
            .date_to(1_700_086_400)
            .events([ActivityEvent::Sent, ActivityEvent::Opened])
            .build_list_request()
            .unwrap();

        let api = encode_activity_list(&request);
        assert_eq!(api.method, HttpMethod::Get);
        assert_eq!(api.path(), "activity/dom1");
        assert_eq!(
            api.query,
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("limit".to_owned(), "50".to_owned()),
                ("date_from".to_owned(), "1700000000".to_owned()),
                ("date_to".to_owned(), "1700086400".to_owned()),
                ("event[0]".to_owned(), "sent".to_owned()),
                ("event[1]".to_owned(), "opened".to_owned()),
            ]
        );
    }

    #[test]
    fn get_uses_plural_path() {
        let api = encode_activity_get(&ActivityId::new("act1").unwrap());
        assert_eq!(api.path(), "activities/act1");
        assert!(api.query.is_empty());
    }
}
