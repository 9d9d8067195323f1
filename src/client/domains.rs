use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{
    ApiResponse, DnsRecords, Domain, DomainCreateRequest, DomainId, DomainListRequest,
    DomainRecipientsRequest, DomainSettingsRequest, DomainVerification, Paginated, Recipient,
};
use crate::transport::{
    encode_domain_create, encode_domain_delete, encode_domain_dns_records, encode_domain_get,
    encode_domain_list, encode_domain_recipients, encode_domain_update_settings,
    encode_domain_verification,
};

#[derive(Debug, Clone, Copy)]
/// Sending domains.
pub struct DomainsResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> DomainsResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: DomainListRequest,
    ) -> Result<ApiResponse<Paginated<Domain>>, MailerSendError> {
        self.client
            .fetch_list("domains.list", encode_domain_list(&request))
            .await
    }

    pub async fn get(&self, domain_id: DomainId) -> Result<ApiResponse<Domain>, MailerSendError> {
        self.client
            .fetch_data("domains.get", encode_domain_get(&domain_id))
            .await
    }

    pub async fn create(
        &self,
        request: DomainCreateRequest,
    ) -> Result<ApiResponse<Domain>, MailerSendError> {
        self.client
            .fetch_data("domains.create", encode_domain_create(&request))
            .await
    }

    pub async fn delete(&self, domain_id: DomainId) -> Result<ApiResponse<()>, MailerSendError> {
        self.client
            .fetch_empty("domains.delete", encode_domain_delete(&domain_id))
            .await
    }

    /// Recipients that received mail from this domain.
    pub async fn recipients(
        &self,
        request: DomainRecipientsRequest,
    ) -> Result<ApiResponse<Paginated<Recipient>>, MailerSendError> {
        self.client
            .fetch_list("domains.recipients", encode_domain_recipients(&request))
            .await
    }

    /// Only the fields set on the request are changed.
    pub async fn update_settings(
        &self,
        request: DomainSettingsRequest,
    ) -> Result<ApiResponse<Domain>, MailerSendError> {
        self.client
            .fetch_data(
                "domains.update_settings",
                encode_domain_update_settings(&request),
            )
            .await
    }

    pub async fn dns_records(
        &self,
        domain_id: DomainId,
    ) -> Result<ApiResponse<DnsRecords>, MailerSendError> {
        self.client
            .fetch_data("domains.dns_records", encode_domain_dns_records(&domain_id))
            .await
    }

    /// Which DNS records MailerSend could verify.
    pub async fn verification_status(
        &self,
        domain_id: DomainId,
    ) -> Result<ApiResponse<DomainVerification>, MailerSendError> {
        self.client
            .fetch_data(
                "domains.verification_status",
                encode_domain_verification(&domain_id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::DomainsBuilder;
    use crate::transport::HttpMethod;

    use super::*;

    #[tokio::test]
    async fn list_sends_filters_and_decodes_page() {
        let body = r#"{"data":[{"id":"dom1","name":"example.com","is_verified":true}],
            "meta":{"current_page":1,"last_page":2,"per_page":10,"total":12}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let request = DomainsBuilder::new()
            .limit(10)
            .verified_only()
            .build_list_request()
            .unwrap();
        let page = client.domains().list(request).await.unwrap().data;
        assert_eq!(page.items[0].name, "example.com");
        assert!(page.has_more_pages());
        assert_eq!(
            transport.last_call().1,
            "/v1/domains?page=1&limit=10&verified=true"
        );
    }

    #[tokio::test]
    async fn update_settings_puts_partial_body() {
        let transport = FakeTransport::new(200, r#"{"data":{"id":"dom1"}}"#);
        let client = make_client(transport.clone());

        let request = DomainsBuilder::new()
            .domain_id("dom1")
            .track_clicks(true)
            .build_update_settings_request()
            .unwrap();
        client.domains().update_settings(request).await.unwrap();

        let (method, target, body) = transport.last_call();
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(target, "/v1/domains/dom1/settings");
        assert_eq!(body, Some(json!({"track_clicks": true})));
    }

    #[tokio::test]
    async fn verification_and_dns_paths() {
        let transport = FakeTransport::new(
            200,
            r#"{"data":{"dkim":true,"spf":true,"mx":false,"tracking":false,"cname":false,"rp_cname":true}}"#,
        );
        let client = make_client(transport.clone());
        let id = DomainId::new("dom1").unwrap();

        let status = client
            .domains()
            .verification_status(id.clone())
            .await
            .unwrap()
            .data;
        assert!(status.is_sending_ready());
        assert_eq!(transport.last_call().1, "/v1/domains/dom1/verify");

        client.domains().dns_records(id.clone()).await.unwrap();
        assert_eq!(transport.last_call().1, "/v1/domains/dom1/dns-records");

        let recipients = DomainsBuilder::new()
            .domain_id("dom1")
            .build_recipients_request()
            .unwrap();
        let transport = FakeTransport::new(200, r#"{"data":[{"id":"r1","email":"a@b.co"}]}"#);
        let client = make_client(transport.clone());
        let page = client.domains().recipients(recipients).await.unwrap().data;
        assert_eq!(page.items[0].id, "r1");
        assert_eq!(
            transport.last_call().1,
            "/v1/domains/dom1/recipients?page=1&limit=25"
        );
    }
}
