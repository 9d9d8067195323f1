use crate::domain::AnalyticsRequest;
use crate::transport::ApiRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which `analytics/*` report to fetch.
pub enum AnalyticsReport {
    ByDate,
    OpensByCountry,
    OpensByUserAgent,
    OpensByReadingEnvironment,
}

impl AnalyticsReport {
    fn segment(self) -> &'static str {
        match self {
            Self::ByDate => "date",
            Self::OpensByCountry => "country",
            Self::OpensByUserAgent => "ua-name",
            Self::OpensByReadingEnvironment => "ua-type",
        }
    }
}

/// Array parameters use the `name[]` form; `group_by` and `event[]` only go to the by-date report.
pub fn encode_analytics(report: AnalyticsReport, request: &AnalyticsRequest) -> ApiRequest {
    let mut api = ApiRequest::get(&["analytics", report.segment()]).query_opt(
        "domain_id",
        request.domain_id.as_ref().map(|id| id.as_str()),
    );
    for recipient in &request.recipient_ids {
        api = api.query("recipient_id[]", recipient.as_str());
    }
    api = api
        .query("date_from", request.date_from.value())
        .query("date_to", request.date_to.value());
    for tag in &request.tags {
        api = api.query("tags[]", tag);
    }

    if report == AnalyticsReport::ByDate {
        api = api.query("group_by", request.group_by.as_str());
        for event in &request.events {
            api = api.query("event[]", event.as_str());
        }
    }
    api
}
