//! Property lookup example.
//!
//! Resolves a location, then fetches the first page of homes for sale there.
//! Reads the API key from `RAPID_API_KEY`.
//!
//! Run with: cargo run --example property_lookup -- "Detroit"

use realestate_sdk::{catalog, ClientConfig, InvokeError, InvokeResult, ToolInvoker};
use serde_json::json;

#[tokio::main]
async fn main() -> InvokeResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let place = std::env::args().nth(1).unwrap_or_else(|| "Detroit".to_string());

    let invoker = ToolInvoker::from_config(ClientConfig::from_env()?)?;

    // Location suggestions give us the state code for the search
    println!("Looking up '{}'...", place);
    let suggest = catalog::find("location_suggest").expect("catalog tool");
    let suggestions = invoker.invoke(suggest, &json!({ "input": place })).await?;

    let first = &suggestions["data"][0];
    let (Some(city), Some(state_code)) = (first["city"].as_str(), first["state_code"].as_str()) else {
        println!("No matching location found");
        return Ok(());
    };
    println!("Best match: {}, {}", city, state_code);

    // Homes for sale, first five results
    let for_sale = catalog::find("v3_for_sale").expect("catalog tool");
    match invoker
        .invoke(for_sale, &json!({ "state_code": state_code, "city": city, "limit": 5 }))
        .await
    {
        Ok(listings) => println!("{}", serde_json::to_string_pretty(&listings).unwrap_or_default()),
        Err(InvokeError::Upstream { status, message, .. }) => {
            println!("Upstream refused the search ({}): {}", status, message);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
