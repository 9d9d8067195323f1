//! Client layer: dispatches encoded requests and maps responses to domain types.

mod activity;
mod analytics;
mod domains;
mod email;
mod error;
mod inbound;
mod messages;
mod quota;
mod sms;
mod templates;
mod tokens;
mod webhooks;

pub use activity::ActivityResource;
pub use analytics::AnalyticsResource;
pub use domains::DomainsResource;
pub use email::EmailResource;
pub use error::MailerSendError;
pub use inbound::InboundResource;
pub use messages::MessagesResource;
pub use quota::ApiQuotaResource;
pub use sms::{SmsMessagesResource, SmsNumbersResource, SmsResource};
pub use templates::TemplatesResource;
pub use tokens::TokensResource;
pub use webhooks::WebhooksResource;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{ApiKey, ApiResponse, Paginated, ValidationError, parse_http_url};
use crate::transport::{
    ApiRequest, HttpMethod, TransportError, decode_data, decode_list, decode_plain,
};

const DEFAULT_BASE_URL: &str = "https://api.mailersend.com/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    /// Names are lowercase.
    headers: Vec<(String, String)>,
    body: String,
}

impl HttpResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_owned(), value.to_owned()))
                })
                .collect();
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

fn default_user_agent() -> String {
    format!("mailersend-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// A base URL needs a trailing `/` so resource paths land under it.
fn normalize_base_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    let url = parse_http_url("base_url", &with_slash)?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::InvalidUrl {
            field: "base_url",
            input: raw.to_owned(),
        });
    }
    Ok(url)
}

#[derive(Debug, Clone)]
/// Builder for [`MailerSendClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct MailerSendClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl MailerSendClientBuilder {
    /// Create a builder with the production base URL and a 30 second timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API base URL, e.g. to point at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MailerSendClient`].
    pub fn build(self) -> Result<MailerSendClient, MailerSendError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| MailerSendError::Transport(Box::new(err)))?;

        Ok(MailerSendClient {
            api_key: self.api_key,
            base_url,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level MailerSend client.
///
/// Resources are reached through handles such as [`MailerSendClient::domains`]
/// or [`MailerSendClient::email`]. Handles borrow the client, so they are cheap
/// to create per call. Cloning the client shares the underlying connection pool.
///
/// No retries are performed; a failed call returns its error.
pub struct MailerSendClient {
    api_key: ApiKey,
    base_url: Url,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for MailerSendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerSendClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl MailerSendClient {
    /// Create a client with the default base URL, timeout, and user-agent.
    ///
    /// For more customization, use [`MailerSendClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, MailerSendError> {
        Self::builder(api_key).build()
    }

    /// Create a client from the `MAILERSEND_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, MailerSendError> {
        let raw = std::env::var(ApiKey::ENV_VAR).map_err(|_| ValidationError::Missing {
            field: ApiKey::ENV_VAR,
        })?;
        Self::new(ApiKey::new(raw)?)
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> MailerSendClientBuilder {
        MailerSendClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn activity(&self) -> ActivityResource<'_> {
        ActivityResource::new(self)
    }

    pub fn analytics(&self) -> AnalyticsResource<'_> {
        AnalyticsResource::new(self)
    }

    pub fn domains(&self) -> DomainsResource<'_> {
        DomainsResource::new(self)
    }

    pub fn email(&self) -> EmailResource<'_> {
        EmailResource::new(self)
    }

    pub fn inbound(&self) -> InboundResource<'_> {
        InboundResource::new(self)
    }

    pub fn messages(&self) -> MessagesResource<'_> {
        MessagesResource::new(self)
    }

    pub fn templates(&self) -> TemplatesResource<'_> {
        TemplatesResource::new(self)
    }

    pub fn tokens(&self) -> TokensResource<'_> {
        TokensResource::new(self)
    }

    pub fn webhooks(&self) -> WebhooksResource<'_> {
        WebhooksResource::new(self)
    }

    pub fn sms(&self) -> SmsResource<'_> {
        SmsResource::new(self)
    }

    pub fn sms_messages(&self) -> SmsMessagesResource<'_> {
        SmsMessagesResource::new(self)
    }

    pub fn sms_numbers(&self) -> SmsNumbersResource<'_> {
        SmsNumbersResource::new(self)
    }

    pub fn api_quota(&self) -> ApiQuotaResource<'_> {
        ApiQuotaResource::new(self)
    }

    fn url_for(&self, api: &ApiRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(api.segments.iter());
        }
        if !api.query.is_empty() {
            url.query_pairs_mut().extend_pairs(api.query.iter());
        }
        url
    }

    fn headers(&self, has_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                "Authorization".to_owned(),
                format!("Bearer {}", self.api_key.as_str()),
            ),
            ("Accept".to_owned(), "application/json".to_owned()),
            ("User-Agent".to_owned(), self.user_agent.clone()),
        ];
        if has_body {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        headers
    }

    /// Send one request; non-2xx statuses become errors.
    async fn dispatch(
        &self,
        operation: &'static str,
        api: ApiRequest,
    ) -> Result<HttpResponse, MailerSendError> {
        debug!(
            operation,
            method = api.method.as_str(),
            path = %api.path(),
            query_len = api.query.len(),
            "dispatching MailerSend request"
        );

        let request = HttpRequest {
            method: api.method,
            url: self.url_for(&api),
            headers: self.headers(api.body.is_some()),
            body: api.body,
        };
        let response = self
            .http
            .execute(request)
            .await
            .map_err(MailerSendError::Transport)?;

        debug!(
            operation,
            status = response.status,
            request_id = response.header("x-request-id").unwrap_or_default(),
            "received MailerSend response"
        );

        if !response.is_success() {
            let err = MailerSendError::from_status(
                response.status,
                response.header("retry-after"),
                &response.body,
            );
            warn!(operation, status = response.status, error = %err, "MailerSend request failed");
            return Err(err);
        }

        Ok(response)
    }

    async fn fetch<T>(
        &self,
        operation: &'static str,
        api: ApiRequest,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<ApiResponse<T>, MailerSendError> {
        let response = self.dispatch(operation, api).await?;
        let data = decode(&response.body).map_err(|err| MailerSendError::Parse(Box::new(err)))?;
        Ok(wrap(&response, data))
    }

    /// Decode `{ "data": T }`.
    async fn fetch_data<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        api: ApiRequest,
    ) -> Result<ApiResponse<T>, MailerSendError> {
        self.fetch(operation, api, decode_data::<T>).await
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        api: ApiRequest,
    ) -> Result<ApiResponse<Paginated<T>>, MailerSendError> {
        self.fetch(operation, api, decode_list::<T>).await
    }

    /// Decode a body that is not wrapped in `data`.
    async fn fetch_plain<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        api: ApiRequest,
    ) -> Result<ApiResponse<T>, MailerSendError> {
        self.fetch(operation, api, decode_plain::<T>).await
    }

    /// For calls answered with `204 No Content` or an ignorable body.
    async fn fetch_empty(
        &self,
        operation: &'static str,
        api: ApiRequest,
    ) -> Result<ApiResponse<()>, MailerSendError> {
        let response = self.dispatch(operation, api).await?;
        Ok(wrap(&response, ()))
    }

    /// For calls whose only result is an id in a response header.
    async fn fetch_header(
        &self,
        operation: &'static str,
        api: ApiRequest,
        header: &str,
    ) -> Result<ApiResponse<Option<String>>, MailerSendError> {
        let response = self.dispatch(operation, api).await?;
        let value = response.header(header).map(str::to_owned);
        Ok(wrap(&response, value))
    }
}

fn wrap<T>(response: &HttpResponse, data: T) -> ApiResponse<T> {
    ApiResponse {
        data,
        status: response.status,
        request_id: response.header("x-request-id").map(str::to_owned),
        rate_limit_remaining: response
            .header("x-apiquota-remaining")
            .and_then(|v| v.trim().parse().ok()),
    }
}
