use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::validation::ValidationError;

/// Trim `value` and reject it when nothing is left.
pub(crate) fn non_empty_trimmed(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Length limits are counted in characters, not bytes.
pub(crate) fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// MailerSend API token sent as `Authorization: Bearer <key>`.
///
/// Invariant: non-empty after trimming. `Debug` never prints the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Environment variable read by [`crate::MailerSendClient::from_env`].
    pub const ENV_VAR: &'static str = "MAILERSEND_API_KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_empty_trimmed(Self::FIELD, value)?))
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        ///
        /// Invariant: non-empty after trimming.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Field name used by MailerSend.
            pub const FIELD: &'static str = $field;

            /// Create a validated identifier; surrounding whitespace is dropped.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                Ok(Self(non_empty_trimmed(Self::FIELD, value)?))
            }

            /// Borrow the identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(
    /// Sending domain id.
    DomainId,
    "domain_id"
);
identifier!(
    /// Activity id (`activities/{id}`).
    ActivityId,
    "activity_id"
);
identifier!(
    /// Message id returned in `X-Message-Id`.
    MessageId,
    "message_id"
);
identifier!(
    /// Template id.
    TemplateId,
    "template_id"
);
identifier!(
    /// API token id.
    TokenId,
    "token_id"
);
identifier!(
    /// Inbound route id.
    InboundId,
    "inbound_id"
);
identifier!(
    /// Webhook id.
    WebhookId,
    "webhook_id"
);
identifier!(
    /// SMS message id.
    SmsMessageId,
    "sms_message_id"
);
identifier!(
    /// SMS phone number id.
    SmsNumberId,
    "sms_number_id"
);
identifier!(
    /// Bulk email request id returned by `bulk-email`.
    BulkEmailId,
    "bulk_email_id"
);
identifier!(
    /// Recipient id used by analytics filters.
    RecipientId,
    "recipient_id"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Page number for list endpoints.
///
/// Invariant: `>= 1`.
pub struct Page(u32);

impl Page {
    /// Query parameter name (`page`).
    pub const FIELD: &'static str = "page";
    /// First page.
    pub const FIRST: Page = Page(1);

    /// Create a validated page number.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max: i64::from(u32::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page number.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Page size for list endpoints.
///
/// Invariant: `10..=100`.
pub struct Limit(u32);

impl Limit {
    /// Query parameter name (`limit`).
    pub const FIELD: &'static str = "limit";
    /// Smallest page size accepted by MailerSend.
    pub const MIN: u32 = 10;
    /// Largest page size accepted by MailerSend.
    pub const MAX: u32 = 100;
    /// Page size used when none is given.
    pub const DEFAULT: u32 = 25;

    /// Create a validated page size.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page size.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// `page` + `limit` pair shared by every list endpoint.
pub struct Pagination {
    pub page: Page,
    pub limit: Limit,
}

impl Pagination {
    /// Validate optional raw values, falling back to the defaults (`1`, `25`).
    pub fn from_raw(page: Option<u32>, limit: Option<u32>) -> Result<Self, ValidationError> {
        Ok(Self {
            page: page.map(Page::new).transpose()?.unwrap_or_default(),
            limit: limit.map(Limit::new).transpose()?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds (UTC).
///
/// Invariant: `> 0`.
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "timestamp";

    /// Create a validated timestamp.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max: i64::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Convert a UTC datetime; sub-second precision is dropped.
    pub fn from_datetime(value: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(value.timestamp())
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone)]
/// Phone number in international format.
///
/// Input must start with `+`. Equality, ordering, and hashing use the E.164 form.
pub struct PhoneNumber {
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !raw.starts_with('+') {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let parsed = phonenumber::parse(None, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { e164, parsed })
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Email address.
///
/// Only the shape is checked: one `@`, a non-empty local part, a dotted domain,
/// no whitespace. Deliverability is MailerSend's concern.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "email";

    /// Create a validated email address.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed(Self::FIELD, value)?;
        let invalid = || ValidationError::InvalidEmail {
            input: value.clone(),
        };

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let labels_ok = domain.split('.').all(|label| !label.is_empty());
        if !domain.contains('.') || !labels_ok {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    /// Borrow the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Domain name registered for sending.
///
/// Invariant: trimmed, lowercase, contains a dot, no whitespace.
pub struct DomainName(String);

impl DomainName {
    /// Field name used by MailerSend (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated domain name.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed(Self::FIELD, value)?;
        if value != value.to_lowercase()
            || !value.contains('.')
            || value.chars().any(char::is_whitespace)
        {
            return Err(ValidationError::InvalidDomainName { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the domain name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Subdomain label (return path, tracking, inbound routing).
///
/// Invariant: non-empty ASCII alphanumeric.
pub struct Subdomain(String);

impl Subdomain {
    /// Create a validated subdomain; `field` names the setting it is used for.
    pub fn new(field: &'static str, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed(field, value)?;
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::NotAlphanumeric { field, value });
        }
        Ok(Self(value))
    }

    /// Borrow the subdomain.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accept only absolute `http`/`https` URLs.
pub(crate) fn parse_http_url(
    field: &'static str,
    value: &str,
) -> Result<url::Url, ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        input: value.to_owned(),
    };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn identifiers_trim_and_reject_blank() {
        let id = DomainId::new("  abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");

        assert_eq!(
            TemplateId::new("   ").unwrap_err(),
            ValidationError::Empty {
                field: "template_id"
            }
        );
        assert!(WebhookId::new("").is_err());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new(" mlsn.secret ").unwrap();
        assert_eq!(key.as_str(), "mlsn.secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert!(ApiKey::new(" ").is_err());
    }

    #[test]
    fn page_and_limit_bounds() {
        assert!(Page::new(0).is_err());
        assert_eq!(Page::new(3).unwrap().value(), 3);

        assert!(Limit::new(9).is_err());
        assert!(Limit::new(10).is_ok());
        assert!(Limit::new(100).is_ok());
        assert!(matches!(
            Limit::new(101),
            Err(ValidationError::OutOfRange {
                field: "limit",
                min: 10,
                max: 100,
                actual: 101
            })
        ));
    }

    #[test]
    fn pagination_defaults_to_first_page_of_25() {
        let pagination = Pagination::from_raw(None, None).unwrap();
        assert_eq!(pagination.page.value(), 1);
        assert_eq!(pagination.limit.value(), 25);

        let pagination = Pagination::from_raw(Some(2), Some(50)).unwrap();
        assert_eq!(pagination.page.value(), 2);
        assert_eq!(pagination.limit.value(), 50);

        assert!(Pagination::from_raw(Some(0), None).is_err());
    }

    #[test]
    fn timestamp_must_be_positive() {
        assert!(UnixTimestamp::new(0).is_err());
        assert!(UnixTimestamp::new(-5).is_err());

        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(UnixTimestamp::from_datetime(dt).unwrap().value(), 1_704_067_200);
    }

    #[test]
    fn phone_number_requires_plus_and_normalizes() {
        let pn = PhoneNumber::parse(" +1 202-555-0143 ").unwrap();
        assert_eq!(pn.e164(), "+12025550143");
        assert_eq!(pn, PhoneNumber::parse("+12025550143").unwrap());

        assert!(matches!(
            PhoneNumber::parse("12025550143"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(PhoneNumber::parse("  ").is_err());
    }

    #[test]
    fn email_address_shape_checks() {
        assert_eq!(
            EmailAddress::new(" john@example.com ").unwrap().as_str(),
            "john@example.com"
        );
        for bad in [
            "john",
            "@example.com",
            "john@example",
            "jo hn@example.com",
            "a@b@c.com",
            "a@b..com",
        ] {
            assert!(EmailAddress::new(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn domain_name_and_subdomain_rules() {
        assert!(DomainName::new("example.com").is_ok());
        assert!(matches!(
            DomainName::new("Example.com"),
            Err(ValidationError::InvalidDomainName { .. })
        ));
        assert!(DomainName::new("localhost").is_err());

        assert!(Subdomain::new("return_path_subdomain", "mta1").is_ok());
        assert!(matches!(
            Subdomain::new("return_path_subdomain", "mta-1"),
            Err(ValidationError::NotAlphanumeric { .. })
        ));
    }

    #[test]
    fn http_urls_only() {
        assert!(parse_http_url("url", "https://example.com/hook").is_ok());
        assert!(parse_http_url("url", "ftp://example.com").is_err());
        assert!(parse_http_url("url", "not a url").is_err());
    }
}
