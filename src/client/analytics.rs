use crate::client::{MailerSendClient, MailerSendError};
use crate::domain::{AnalyticsByDate, AnalyticsRequest, ApiResponse, OpensBreakdown};
use crate::transport::{AnalyticsReport, encode_analytics};

#[derive(Debug, Clone, Copy)]
/// Aggregated sending statistics.
///
/// All reports take the same [`AnalyticsRequest`]; the opens reports ignore
/// `group_by` and `events`.
pub struct AnalyticsResource<'a> {
    client: &'a MailerSendClient,
}

impl<'a> AnalyticsResource<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// Event counts bucketed by `group_by`.
    pub async fn by_date(
        &self,
        request: AnalyticsRequest,
    ) -> Result<ApiResponse<AnalyticsByDate>, MailerSendError> {
        self.client
            .fetch_data(
                "analytics.by_date",
                encode_analytics(AnalyticsReport::ByDate, &request),
            )
            .await
    }

    pub async fn opens_by_country(
        &self,
        request: AnalyticsRequest,
    ) -> Result<ApiResponse<OpensBreakdown>, MailerSendError> {
        self.client
            .fetch_data(
                "analytics.opens_by_country",
                encode_analytics(AnalyticsReport::OpensByCountry, &request),
            )
            .await
    }

    pub async fn opens_by_user_agent(
        &self,
        request: AnalyticsRequest,
    ) -> Result<ApiResponse<OpensBreakdown>, MailerSendError> {
        self.client
            .fetch_data(
                "analytics.opens_by_user_agent",
                encode_analytics(AnalyticsReport::OpensByUserAgent, &request),
            )
            .await
    }

    pub async fn opens_by_reading_environment(
        &self,
        request: AnalyticsRequest,
    ) -> Result<ApiResponse<OpensBreakdown>, MailerSendError> {
        self.client
            .fetch_data(
                "analytics.opens_by_reading_environment",
                encode_analytics(AnalyticsReport::OpensByReadingEnvironment, &request),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::{AnalyticsBuilder, AnalyticsEvent};

    use super::*;

    fn request() -> AnalyticsRequest {
        AnalyticsBuilder::new()
            .date_from(1_704_067_200)
            .date_to(1_704_153_600)
            .event(AnalyticsEvent::Sent)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn by_date_decodes_stats() {
        let body = r#"{"data":{"date_from":1704067200,"date_to":"1704153600","group_by":"days",
            "stats":[{"date":"1704067200","sent":5,"delivered":4}]}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let report = client.analytics().by_date(request()).await.unwrap().data;
        assert_eq!(report.date_from.as_deref(), Some("1704067200"));
        assert_eq!(report.stats[0].sent, 5);
        assert_eq!(report.stats[0].opened, 0);

        let target = transport.last_call().1;
        assert!(target.starts_with("/v1/analytics/date?"));
        assert!(target.contains("group_by=days"));
        assert!(target.contains("event%5B%5D=sent"));
    }

    #[tokio::test]
    async fn opens_reports_use_their_own_paths() {
        let transport = FakeTransport::new(200, r#"{"data":{"stats":[{"name":"DE","count":3}]}}"#);
        let client = make_client(transport.clone());

        let report = client.analytics().opens_by_country(request()).await.unwrap().data;
        assert_eq!(report.stats[0].name, "DE");
        let target = transport.last_call().1;
        assert!(target.starts_with("/v1/analytics/country?"));
        assert!(!target.contains("group_by"));

        client.analytics().opens_by_user_agent(request()).await.unwrap();
        assert!(transport.last_call().1.starts_with("/v1/analytics/ua-name?"));

        client
            .analytics()
            .opens_by_reading_environment(request())
            .await
            .unwrap();
        assert!(transport.last_call().1.starts_with("/v1/analytics/ua-type?"));
    }
}
