// Checks that the configured Sanity dataset answers the storefront query.
//
// Usage: SANITY_PROJECT_ID=... cargo run --bin catalog_probe --features ssr

use anyhow::{Context, Result};
use storefront::web_app::api::{queries, SanityClient, SanityConfig};

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = SanityConfig::from_env().context("loading Sanity configuration")?;
    let client = SanityClient::new(config)?;

    println!("Querying {}", client.config().query_url());
    println!("  {}", queries::ALL_PRODUCTS_QUERY);

    let products = queries::fetch_all_products(&client)
        .await
        .context("fetching product catalog")?;

    println!("✓ {} products", products.len());
    for product in &products {
        println!(
            "  - {:<24} {:<40} {}",
            product.id,
            product.card_title(),
            product.price_label()
        );
    }

    Ok(())
}
