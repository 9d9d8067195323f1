use crate::domain::{TemplateId, TemplatesListRequest};
use crate::transport::ApiRequest;

pub fn encode_templates_list(request: &TemplatesListRequest) -> ApiRequest {
    ApiRequest::get(&["templates"])
        .query_opt(
            "domain_id",
            request.domain_id.as_ref().map(|id| id.as_str()),
        )
        .paginated(request.pagination)
}

pub fn encode_template_get(template_id: &TemplateId) -> ApiRequest {
    ApiRequest::get(&["templates", template_id.as_str()])
}

pub fn encode_template_delete(template_id: &TemplateId) -> ApiRequest {
    ApiRequest::delete(&["templates", template_id.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplatesBuilder;
    use crate::transport::HttpMethod;

    #[test]
    fn list_puts_domain_filter_first() {
        let request = TemplatesBuilder::new()
            .domain_id("dom1")
            .limit(10)
            .build_list_request()
            .unwrap();
        let api = encode_templates_list(&request);
        assert_eq!(
            api.query,
            vec![
                ("domain_id".to_owned(), "dom1".to_owned()),
                ("page".to_owned(), "1".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn delete_uses_delete_verb() {
        let api = encode_template_delete(&TemplateId::new("t1").unwrap());
        assert_eq!(api.method, HttpMethod::Delete);
        assert_eq!(api.path(), "templates/t1");
        assert_eq!(
            encode_template_get(&TemplateId::new("t1").unwrap()).method,
            HttpMethod::Get
        );
    }
}
