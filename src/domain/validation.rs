use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    Missing {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    TooFew {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    InvalidValue {
        field: &'static str,
        value: String,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidEmail {
        input: String,
    },
    InvalidDomainName {
        input: String,
    },
    NotAlphanumeric {
        field: &'static str,
        value: String,
    },
    InvalidUrl {
        field: &'static str,
        input: String,
    },
    Duplicate {
        field: &'static str,
        value: String,
    },
    InvalidDateRange {
        reason: &'static str,
    },
    RequiredWhen {
        field: &'static str,
        condition: &'static str,
    },
    UnknownRecipient {
        field: &'static str,
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::TooMany { field, max, actual } => {
                write!(f, "too many {field}: {actual} (max {max})")
            }
            Self::TooFew { field, min, actual } => {
                write!(f, "not enough {field}: {actual} (min {min})")
            }
            Self::InvalidValue { field, value } => write!(f, "invalid {field}: {value}"),
            Self::InvalidPhoneNumber { input } => {
                write!(f, "invalid phone number (expected E.164): {input}")
            }
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidDomainName { input } => write!(f, "invalid domain name: {input}"),
            Self::NotAlphanumeric { field, value } => {
                write!(f, "{field} must be alphanumeric: {value}")
            }
            Self::InvalidUrl { field, input } => write!(f, "invalid {field} url: {input}"),
            Self::Duplicate { field, value } => write!(f, "duplicate {field}: {value}"),
            Self::InvalidDateRange { reason } => write!(f, "invalid date range: {reason}"),
            Self::RequiredWhen { field, condition } => {
                write!(f, "{field} is required when {condition}")
            }
            Self::UnknownRecipient { field, input } => {
                write!(f, "{field} refers to a number that is not a recipient: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
