use mailersend::{DomainsBuilder, MailerSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MailerSendClient::from_env()?;

    let mut page = 1;
    loop {
        let request = DomainsBuilder::new().page(page).limit(25).build_list_request()?;
        let response = client.domains().list(request).await?;
        for domain in &response.data.items {
            println!(
                "{} {} verified: {:?}",
                domain.id, domain.name, domain.is_verified
            );
        }
        if !response.data.has_more_pages() {
            break;
        }
        page += 1;
    }

    Ok(())
}
