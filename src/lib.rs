//! Typed async Rust client for the MailerSend HTTP API.
//!
//! The crate is split into a domain layer of strong types and builders, a
//! transport layer for the wire format, and a small client layer that
//! dispatches requests. Every request is validated before any I/O happens.
//!
//! ```rust,no_run
//! use mailersend::{ApiKey, EmailBuilder, MailerSendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailersend::MailerSendError> {
//!     let client = MailerSendClient::new(ApiKey::new("...")?)?;
//!     let email = EmailBuilder::new()
//!         .from("info@example.com", Some("Example"))
//!         .to("john@example.org", None)
//!         .subject("Hello")
//!         .text("Hi there")
//!         .build()?;
//!     let sent = client.email().send(email).await?;
//!     println!("queued as {:?}", sent.data.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{MailerSendClient, MailerSendClientBuilder, MailerSendError};
pub use domain::{
    ActivityBuilder, ActivityEvent, AnalyticsBuilder, AnalyticsEvent, ApiKey, ApiResponse,
    DomainId, DomainsBuilder, EmailAddress, EmailBuilder, GroupBy, InboundBuilder,
    InboundComparer, InboundFilter, MessagesBuilder, Paginated, PhoneNumber, SmsMessagesBuilder,
    SmsNumbersBuilder, SmsSendBuilder, TemplatesBuilder, TokenScope, TokensBuilder,
    ValidationError, WebhookEvent, WebhooksBuilder,
};
