use clap::Parser;
use reqwest::Client;
use tracing_subscriber::{EnvFilter, fmt};

mod client;

use client::{Notification, subscribe};

#[derive(Parser, Debug)]
#[command(author, version, about = "Join the waitlist from the command line")]
struct Args {
    email: String,

    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let outcome = subscribe(&Client::new(), &args.base_url, &args.email).await;
    Notification::from_outcome(&outcome).show();

    let subscriber = outcome?;
    tracing::debug!("Stored as {:?}", subscriber);

    Ok(())
}
