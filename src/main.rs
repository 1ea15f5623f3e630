use clap::Parser;
use product_catalog_api::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up CATALOG_PORT, SECURITY_API_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog_api=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
