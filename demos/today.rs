//! The call site the client was extracted from: fetch today's habit list
//! from a habitz backend and log the raw response.
//!
//! Run against a local backend with:
//!
//! ```sh
//! cargo run --example today
//! ```

use std::sync::Arc;
use std::time::Duration;

use bearer_client::{AuthenticatedClient, ClientConfig, MemoryCredentialStore};
use serde_json::json;

fn retrieve_todays_habitz(client: &AuthenticatedClient) {
    client.get(
        "/v1/today",
        |status, body| println!("RESPONSE [{}]: {}", status, body),
        None,
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = Arc::new(MemoryCredentialStore::new());
    store.set("habitz-token", "replace-with-a-real-token");

    let client = AuthenticatedClient::with_config(
        "http://localhost:8080",
        store,
        ClientConfig::new("habitz-token"),
    )?;

    retrieve_todays_habitz(&client);

    // Same shape for submissions: serialize at the call site, branch on
    // status class in the continuations.
    client.post(
        "/v1/schedule",
        &json!({ "weekday": "monday", "habit": "run" }),
        |status, body| println!("RESPONSE [{}]: {}", status, body),
        Some(Box::new(|status, body| {
            eprintln!("FAILED [{}]: {}", status, body)
        })),
    )?;

    // Give the fire-and-forget exchanges time to complete before exiting.
    tokio::time::sleep(Duration::from_secs(2)).await;
    Ok(())
}
