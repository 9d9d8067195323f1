use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::request::{ensure_max_items, ensure_min_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{EmailAddress, TemplateId, UnixTimestamp, non_empty_trimmed};

pub const EMAIL_MAX_RECIPIENTS: usize = 50;
/// Applies to `cc` and `bcc` separately.
pub const EMAIL_MAX_CC: usize = 10;
pub const EMAIL_MAX_TAGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Address with an optional display name.
pub struct EmailRecipient {
    pub(crate) email: EmailAddress,
    pub(crate) name: Option<String>,
}

impl EmailRecipient {
    pub fn new(email: EmailAddress, name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());
        Self { email, name }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentDisposition {
    #[default]
    Attachment,
    /// Referenced from HTML as `cid:<id>`.
    Inline,
}

impl AttachmentDisposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
            Self::Inline => "inline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// File attached to a message; `content` is base64.
pub struct Attachment {
    pub(crate) content: String,
    pub(crate) filename: String,
    pub(crate) disposition: AttachmentDisposition,
    pub(crate) id: Option<String>,
}

impl Attachment {
    /// Encode raw bytes as a regular attachment.
    pub fn from_bytes(
        filename: impl Into<String>,
        bytes: impl AsRef<[u8]>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            content: STANDARD.encode(bytes),
            filename: non_empty_trimmed("attachments.filename", filename)?,
            disposition: AttachmentDisposition::Attachment,
            id: None,
        })
    }

    /// Encode raw bytes as an inline attachment addressable by `id`.
    pub fn inline(
        filename: impl Into<String>,
        bytes: impl AsRef<[u8]>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            disposition: AttachmentDisposition::Inline,
            id: Some(non_empty_trimmed("attachments.id", id)?),
            ..Self::from_bytes(filename, bytes)?
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailPersonalization {
    pub(crate) email: EmailAddress,
    pub(crate) data: Map<String, Value>,
}

impl EmailPersonalization {
    pub fn new(email: EmailAddress, data: Map<String, Value>) -> Self {
        Self { email, data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-message tracking overrides.
pub struct EmailSettings {
    pub track_clicks: Option<bool>,
    pub track_opens: Option<bool>,
    pub track_content: Option<bool>,
}

impl EmailSettings {
    pub(crate) fn is_empty(&self) -> bool {
        self.track_clicks.is_none() && self.track_opens.is_none() && self.track_content.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Custom header sent with the message.
pub struct EmailHeader {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl EmailHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty_trimmed("headers.name", name)?,
            value: value.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// `POST email`, and one entry of `POST bulk-email`.
pub struct EmailRequest {
    pub(crate) from: EmailRecipient,
    pub(crate) to: Vec<EmailRecipient>,
    pub(crate) cc: Vec<EmailRecipient>,
    pub(crate) bcc: Vec<EmailRecipient>,
    pub(crate) reply_to: Option<EmailRecipient>,
    pub(crate) subject: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) html: Option<String>,
    pub(crate) template_id: Option<TemplateId>,
    pub(crate) attachments: Vec<Attachment>,
    pub(crate) tags: Vec<String>,
    pub(crate) personalization: Vec<EmailPersonalization>,
    pub(crate) precedence_bulk: Option<bool>,
    pub(crate) send_at: Option<UnixTimestamp>,
    pub(crate) in_reply_to: Option<String>,
    pub(crate) references: Vec<String>,
    pub(crate) settings: EmailSettings,
    pub(crate) headers: Vec<EmailHeader>,
}

impl EmailRequest {
    pub fn from(&self) -> &EmailRecipient {
        &self.from
    }

    pub fn to(&self) -> &[EmailRecipient] {
        &self.to
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

type RawRecipient = (String, Option<String>);

fn recipient((email, name): &RawRecipient) -> Result<EmailRecipient, ValidationError> {
    Ok(EmailRecipient::new(
        EmailAddress::new(email.clone())?,
        name.clone(),
    ))
}

fn recipients(
    field: &'static str,
    raw: &[RawRecipient],
    max: usize,
) -> Result<Vec<EmailRecipient>, ValidationError> {
    ensure_max_items(field, raw.len(), max)?;
    raw.iter().map(recipient).collect()
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default)]
/// Builder for [`EmailRequest`].
pub struct EmailBuilder {
    from: Option<RawRecipient>,
    to: Vec<RawRecipient>,
    cc: Vec<RawRecipient>,
    bcc: Vec<RawRecipient>,
    reply_to: Option<RawRecipient>,
    subject: Option<String>,
    html: Option<String>,
    text: Option<String>,
    template_id: Option<String>,
    attachments: Vec<Result<Attachment, ValidationError>>,
    tags: Vec<String>,
    personalization: Vec<(String, Map<String, Value>)>,
    precedence_bulk: Option<bool>,
    send_at: Option<i64>,
    in_reply_to: Option<String>,
    references: Vec<String>,
    settings: EmailSettings,
    headers: Vec<(String, String)>,
}

impl EmailBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, email: impl Into<String>, name: Option<&str>) -> Self {
        self.from = Some((email.into(), name.map(str::to_owned)));
        self
    }

    pub fn to(mut self, email: impl Into<String>, name: Option<&str>) -> Self {
        self.to.push((email.into(), name.map(str::to_owned)));
        self
    }

    pub fn cc(mut self, email: impl Into<String>, name: Option<&str>) -> Self {
        self.cc.push((email.into(), name.map(str::to_owned)));
        self
    }

    pub fn bcc(mut self, email: impl Into<String>, name: Option<&str>) -> Self {
        self.bcc.push((email.into(), name.map(str::to_owned)));
        self
    }

    pub fn reply_to(mut self, email: impl Into<String>, name: Option<&str>) -> Self {
        self.reply_to = Some((email.into(), name.map(str::to_owned)));
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render a stored template instead of (or on top of) inline content.
    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Attach raw bytes; they are base64 encoded here.
    pub fn attach(mut self, filename: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        self.attachments.push(Attachment::from_bytes(filename, bytes));
        self
    }

    pub fn attach_inline(
        mut self,
        filename: impl Into<String>,
        bytes: impl AsRef<[u8]>,
        id: impl Into<String>,
    ) -> Self {
        self.attachments.push(Attachment::inline(filename, bytes, id));
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn personalize(mut self, email: impl Into<String>, data: Map<String, Value>) -> Self {
        self.personalization.push((email.into(), data));
        self
    }

    /// Mark the message as bulk (`Precedence: bulk`).
    pub fn bulk_mode(mut self, enabled: bool) -> Self {
        self.precedence_bulk = Some(enabled);
        self
    }

    /// Schedule delivery, Unix seconds.
    pub fn send_at(mut self, timestamp: i64) -> Self {
        self.send_at = Some(timestamp);
        self
    }

    pub fn send_at_datetime(self, value: DateTime<Utc>) -> Self {
        self.send_at(value.timestamp())
    }

    pub fn in_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.in_reply_to = Some(message_id.into());
        self
    }

    pub fn reference(mut self, message_id: impl Into<String>) -> Self {
        self.references.push(message_id.into());
        self
    }

    pub fn track_clicks(mut self, enabled: bool) -> Self {
        self.settings.track_clicks = Some(enabled);
        self
    }

    pub fn track_opens(mut self, enabled: bool) -> Self {
        self.settings.track_opens = Some(enabled);
        self
    }

    pub fn track_content(mut self, enabled: bool) -> Self {
        self.settings.track_content = Some(enabled);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn build(&self) -> Result<EmailRequest, ValidationError> {
        let from = self
            .from
            .as_ref()
            .ok_or(ValidationError::Missing { field: "from" })
            .and_then(recipient)?;

        ensure_min_items("to", self.to.len(), 1)?;
        let to = recipients("to", &self.to, EMAIL_MAX_RECIPIENTS)?;
        let cc = recipients("cc", &self.cc, EMAIL_MAX_CC)?;
        let bcc = recipients("bcc", &self.bcc, EMAIL_MAX_CC)?;
        let reply_to = self.reply_to.as_ref().map(recipient).transpose()?;

        let template_id = self.template_id.clone().map(TemplateId::new).transpose()?;
        let text = optional_text(&self.text);
        let html = optional_text(&self.html);
        if text.is_none() && html.is_none() && template_id.is_none() {
            return Err(ValidationError::Missing {
                field: "text, html or template_id",
            });
        }

        let subject = optional_text(&self.subject).map(|s| s.trim().to_owned());
        if subject.is_none() && template_id.is_none() {
            return Err(ValidationError::RequiredWhen {
                field: "subject",
                condition: "no template_id is set",
            });
        }

        let attachments = self.attachments.iter().cloned().collect::<Result<Vec<_>, _>>()?;

        ensure_max_items("tags", self.tags.len(), EMAIL_MAX_TAGS)?;
        let tags = self
            .tags
            .iter()
            .cloned()
            .map(|tag| non_empty_trimmed("tags", tag))
            .collect::<Result<Vec<_>, _>>()?;

        let personalization = self
            .personalization
            .iter()
            .map(|(email, data)| {
                Ok(EmailPersonalization::new(
                    EmailAddress::new(email.clone())?,
                    data.clone(),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let send_at = self.send_at.map(UnixTimestamp::new).transpose()?;
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| EmailHeader::new(name.clone(), value.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EmailRequest {
            from,
            to,
            cc,
            bcc,
            reply_to,
            subject,
            text,
            html,
            template_id,
            attachments,
            tags,
            personalization,
            precedence_bulk: self.precedence_bulk,
            send_at,
            in_reply_to: optional_text(&self.in_reply_to),
            references: self.references.clone(),
            settings: self.settings,
            headers,
        })
    }
}
