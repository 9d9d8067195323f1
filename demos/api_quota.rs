use mailersend::MailerSendClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MailerSendClient::from_env()?;
    let response = client.api_quota().get().await?;
    println!("{:#?}", response.data);
    Ok(())
}
