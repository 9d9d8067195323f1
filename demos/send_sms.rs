use std::io;

use mailersend::{MailerSendClient, SmsSendBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = std::env::var("MAILERSEND_SMS_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_SMS_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("MAILERSEND_SMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_SMS_TO environment variable is required",
        )
    })?;
    let text = std::env::var("MAILERSEND_SMS_TEXT")
        .unwrap_or_else(|_| "Hello from the mailersend demo.".to_owned());

    let client = MailerSendClient::from_env()?;
    let request = SmsSendBuilder::new().from(from).to(to).text(text).build()?;

    let response = client.sms().send(request).await?;
    println!(
        "status: {}, sms_message_id: {:?}",
        response.status, response.data.message_id
    );

    Ok(())
}
