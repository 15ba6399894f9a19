//! Basic example demonstrating the Backand API client.
//!
//! Run with:
//! ```
//! BACKAND_USERNAME=you@example.com BACKAND_PASSWORD=secret \
//! BACKAND_APPNAME=myapp BACKAND_ANONYMOUS_TOKEN=xxxx \
//!     cargo run --example basic
//! ```

use backand::{Access, ApiResponse, BackandClient, PageParams};
use serde_json::json;

#[tokio::main]
async fn main() -> backand::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Backand client...");
    let client = BackandClient::from_env()?;
    println!("Connected to: {}", client.endpoints().rest_url);

    // Obtain a bearer token
    println!("\n--- Requesting Token ---");
    match client.get_token().await {
        ApiResponse::Success { body, .. } => {
            println!("Token type: {}", body["token_type"]);
        }
        ApiResponse::Failure { status, body } => {
            println!("Token request failed ({status:?}): {body}");
            return Ok(());
        }
    }

    // Create an object (fetches a fresh token on its own)
    println!("\n--- Creating Item ---");
    let created = client
        .create_object("items", json!({"name": "Widget", "price": 9.99}))
        .await?;
    println!("Created: {}", created.body());

    // List the first page anonymously
    println!("\n--- Listing Items (anonymous) ---");
    let page = client
        .get_object_list("items", PageParams::new(10, 1), Access::Anonymous)
        .await?;
    println!("Total rows: {}", page.body()["totalRows"]);

    if let Some(items) = page.body()["data"].as_array() {
        for item in items {
            println!("  - {} ({})", item["name"], item["id"]);
        }
    }

    // Fetch the created object with the session token
    if let Some(id) = created.body().get("id") {
        println!("\n--- Getting Item {id} ---");
        let id = id.as_str().map(str::to_string).unwrap_or_else(|| id.to_string());
        let item = client
            .get_single_object("items", &id, Access::Authenticated)
            .await?;
        println!("{}", item.body());
    }

    println!("\nDone!");
    Ok(())
}
