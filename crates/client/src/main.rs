//! Headless simulation client binary.
//!
//! Loads a scenario from the content directory, lets the autopilot play it
//! for a fixed number of ticks and logs what happens.
//!
//! # Examples
//!
//! ```bash
//! SIM_SCENARIO=meadow SIM_TICKS=1200 RUST_LOG=debug cargo run -p sim-client
//! ```

use anyhow::Result;
use sim_client::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "starting simulation client");

    let summary = Client::new(config).run().await?;
    println!(
        "ticks={} kills={} alive={} level={} exp={} gold={}",
        summary.ticks,
        summary.kills,
        summary.player_alive,
        summary.level,
        summary.experience,
        summary.gold
    );
    Ok(())
}
