use serde_json::{Map, Value};

use crate::domain::request::{ensure_max_items, ensure_min_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{Pagination, PhoneNumber, SmsNumberId, ensure_max_chars};

pub const SMS_MAX_RECIPIENTS: usize = 50;
pub const SMS_MAX_TEXT_CHARS: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// `GET sms-messages`.
pub struct SmsMessagesListRequest {
    pub(crate) pagination: Pagination,
}

#[derive(Debug, Clone, Default)]
pub struct SmsMessagesBuilder {
    page: Option<u32>,
    limit: Option<u32>,
}

impl SmsMessagesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<SmsMessagesListRequest, ValidationError> {
        Ok(SmsMessagesListRequest {
            pagination: Pagination::from_raw(self.page, self.limit)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// `GET sms-numbers`.
pub struct SmsNumbersListRequest {
    pub(crate) pagination: Pagination,
    pub(crate) paused: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT sms-numbers/{sms_number_id}`.
pub struct SmsNumberUpdateRequest {
    pub(crate) sms_number_id: SmsNumberId,
    pub(crate) paused: bool,
}

impl SmsNumberUpdateRequest {
    pub fn new(sms_number_id: SmsNumberId, paused: bool) -> Self {
        Self {
            sms_number_id,
            paused,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsNumbersBuilder {
    page: Option<u32>,
    limit: Option<u32>,
    sms_number_id: Option<String>,
    paused: Option<bool>,
}

impl SmsNumbersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sms_number_id(mut self, sms_number_id: impl Into<String>) -> Self {
        self.sms_number_id = Some(sms_number_id.into());
        self
    }

    /// List filter, and the new state for updates.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build_list_request(&self) -> Result<SmsNumbersListRequest, ValidationError> {
        Ok(SmsNumbersListRequest {
            pagination: Pagination::from_raw(self.page, self.limit)?,
            paused: self.paused,
        })
    }

    pub fn build_update_request(&self) -> Result<SmsNumberUpdateRequest, ValidationError> {
        let sms_number_id = SmsNumberId::new(self.sms_number_id.clone().unwrap_or_default())?;
        let paused = self
            .paused
            .ok_or(ValidationError::Missing { field: "paused" })?;
        Ok(SmsNumberUpdateRequest::new(sms_number_id, paused))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Template variables for one recipient.
pub struct SmsPersonalization {
    pub(crate) phone_number: PhoneNumber,
    pub(crate) data: Map<String, Value>,
}

impl SmsPersonalization {
    pub fn new(phone_number: PhoneNumber, data: Map<String, Value>) -> Self {
        Self { phone_number, data }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// `POST sms`.
pub struct SmsSendRequest {
    pub(crate) from: PhoneNumber,
    pub(crate) to: Vec<PhoneNumber>,
    pub(crate) text: String,
    pub(crate) personalization: Vec<SmsPersonalization>,
}

impl SmsSendRequest {
    pub fn new(
        from: PhoneNumber,
        to: Vec<PhoneNumber>,
        text: impl Into<String>,
        personalization: Vec<SmsPersonalization>,
    ) -> Result<Self, ValidationError> {
        ensure_min_items("to", to.len(), 1)?;
        ensure_max_items("to", to.len(), SMS_MAX_RECIPIENTS)?;

        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }
        ensure_max_chars("text", &text, SMS_MAX_TEXT_CHARS)?;

        if let Some(stray) = personalization
            .iter()
            .find(|p| !to.contains(&p.phone_number))
        {
            return Err(ValidationError::UnknownRecipient {
                field: "personalization.phone_number",
                input: stray.phone_number.e164().to_owned(),
            });
        }

        Ok(Self {
            from,
            to,
            text,
            personalization,
        })
    }

    pub fn from(&self) -> &PhoneNumber {
        &self.from
    }

    pub fn to(&self) -> &[PhoneNumber] {
        &self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`SmsSendRequest`]. Numbers are parsed at build time.
pub struct SmsSendBuilder {
    from: Option<String>,
    to: Vec<String>,
    text: Option<String>,
    personalization: Vec<(String, Map<String, Value>)>,
}

impl SmsSendBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender number in international format.
    pub fn from(mut self, phone_number: impl Into<String>) -> Self {
        self.from = Some(phone_number.into());
        self
    }

    pub fn to(mut self, phone_number: impl Into<String>) -> Self {
        self.to.push(phone_number.into());
        self
    }

    pub fn to_many<I, S>(mut self, phone_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to.extend(phone_numbers.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Variables substituted into `{{ var }}` placeholders for one recipient.
    pub fn personalize(
        mut self,
        phone_number: impl Into<String>,
        data: Map<String, Value>,
    ) -> Self {
        self.personalization.push((phone_number.into(), data));
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build(&self) -> Result<SmsSendRequest, ValidationError> {
        let from = self
            .from
            .clone()
            .ok_or(ValidationError::Missing { field: "from" })?;
        let from = PhoneNumber::parse(from)?;
        let to = self
            .to
            .iter()
            .cloned()
            .map(PhoneNumber::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let text = self
            .text
            .clone()
            .ok_or(ValidationError::Missing { field: "text" })?;
        let personalization = self
            .personalization
            .iter()
            .map(|(phone, data)| {
                Ok(SmsPersonalization::new(
                    PhoneNumber::parse(phone.clone())?,
                    data.clone(),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        SmsSendRequest::new(from, to, text, personalization)
    }
}
