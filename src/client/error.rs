use std::collections::BTreeMap;
use std::error::Error as StdError;

use crate::domain::ValidationError;
use crate::transport::{ApiErrorBody, decode_error_body};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::MailerSendClient`] and its resource handles.
///
/// HTTP statuses are classified as follows:
/// - `401` is [`MailerSendError::Unauthorized`],
/// - `404` is [`MailerSendError::NotFound`],
/// - `429` is [`MailerSendError::RateLimited`],
/// - any other `4xx` is [`MailerSendError::Api`],
/// - `5xx` is [`MailerSendError::Server`].
pub enum MailerSendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The API key was missing, malformed, or revoked.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    /// Too many requests. `retry_after` is taken from the `Retry-After` header.
    #[error("rate limited: {message}")]
    RateLimited {
        retry_after: Option<u64>,
        message: String,
    },

    /// Any other `4xx`; `errors` holds the per-field messages, if any.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A request or configuration value was rejected before any I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MailerSendError {
    /// Classify a non-2xx response.
    pub(crate) fn from_status(status: u16, retry_after: Option<&str>, body: &str) -> Self {
        let parsed = decode_error_body(body);
        let message = parsed
            .as_ref()
            .and_then(ApiErrorBody::summary)
            .unwrap_or_else(|| fallback_message(status, body));
        let errors = parsed.map(|b| b.errors).unwrap_or_default();

        match status {
            401 => Self::Unauthorized { message },
            404 => Self::NotFound { message },
            429 => Self::RateLimited {
                retry_after: retry_after.and_then(|v| v.trim().parse().ok()),
                message,
            },
            500..=599 => Self::Server { status, message },
            _ => Self::Api {
                status,
                message,
                errors,
            },
        }
    }

    /// HTTP status behind this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Parse(_) | Self::Validation(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// `401`, or a `403` reported as [`MailerSendError::Api`].
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::Api { status: 403, .. }
        )
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses_to_variants() {
        let err = MailerSendError::from_status(401, None, r#"{"message":"Unauthenticated."}"#);
        assert!(err.is_auth_error());
        assert_eq!(err.to_string(), "unauthorized: Unauthenticated.");

        let err = MailerSendError::from_status(404, None, "");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));

        let err = MailerSendError::from_status(429, Some(" 30 "), "");
        assert!(matches!(
            err,
            MailerSendError::RateLimited {
                retry_after: Some(30),
                ..
            }
        ));

        let err = MailerSendError::from_status(503, None, "<html>down</html>");
        assert!(err.is_server_error());
        assert_eq!(
            err.to_string(),
            "server error (503): HTTP 503: <html>down</html>"
        );
    }

    #[test]
    fn unprocessable_entity_keeps_field_errors() {
        let err = MailerSendError::from_status(
            422,
            None,
            r#"{"message":"The given data was invalid.","errors":{"to":["The to field is required."]}}"#,
        );
        match err {
            MailerSendError::Api {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, 422);
                assert_eq!(
                    message,
                    "The given data was invalid.; to: The to field is required."
                );
                assert_eq!(errors["to"], vec!["The to field is required."]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_retry_after_is_none() {
        let err = MailerSendError::from_status(429, Some("soon"), "");
        assert!(matches!(
            err,
            MailerSendError::RateLimited {
                retry_after: None,
                ..
            }
        ));
        assert_eq!(err.status(), Some(429));
        assert!(MailerSendError::from(ValidationError::Missing { field: "from" })
            .status()
            .is_none());
    }
}
