//! WarriorPlus client CLI
//!
//! Fetches one resource listing, logs the envelope summary, and prints
//! the records as JSON. The API key comes from the environment; the
//! library itself never touches it.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use warriorplus_client::{Client, ClientConfig, Envelope};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceKind {
    Sales,
    Partners,
    Payments,
    Affiliates,
    Customers,
}

#[derive(Parser)]
#[command(
    name = "warriorplus-client",
    about = "Query the WarriorPlus affiliate-sales API",
    version
)]
struct Cli {
    /// Resource listing to fetch
    #[arg(value_enum, default_value = "sales")]
    resource: ResourceKind,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let client = Client::new(config)?;

    match cli.resource {
        ResourceKind::Sales => print_listing(&client.sales().await?),
        ResourceKind::Partners => print_listing(&client.partners().await?),
        ResourceKind::Payments => print_listing(&client.payments().await?),
        ResourceKind::Affiliates => print_listing(&client.affiliates().await?),
        ResourceKind::Customers => print_listing(&client.customers().await?),
    }
}

fn print_listing<T: Serialize>(envelope: &Envelope<T>) -> anyhow::Result<()> {
    info!(
        success = envelope.success,
        object = %envelope.object,
        uri = %envelope.uri,
        has_more = envelope.has_more,
        total_count = envelope.total_count,
        records = envelope.data.len(),
        "fetched listing"
    );

    println!("{}", serde_json::to_string_pretty(&envelope.data)?);
    Ok(())
}
