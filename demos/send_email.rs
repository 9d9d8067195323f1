use std::io;

use mailersend::{EmailBuilder, MailerSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = std::env::var("MAILERSEND_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("MAILERSEND_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_TO environment variable is required",
        )
    })?;

    let client = MailerSendClient::from_env()?;
    let email = EmailBuilder::new()
        .from(from, Some("MailerSend demo"))
        .to(to, None)
        .subject("Hello from the mailersend demo")
        .text("This message was sent by the mailersend Rust client.")
        .html("<p>This message was sent by the <b>mailersend</b> Rust client.</p>")
        .build()?;

    let response = client.email().send(email).await?;
    println!(
        "status: {}, message_id: {:?}, request_id: {:?}",
        response.status, response.data.message_id, response.request_id
    );

    Ok(())
}
