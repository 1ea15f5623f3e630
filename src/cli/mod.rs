pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "product-catalog-api")]
#[command(about = "In-memory product catalog served over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Print the built-in sample catalog as JSON")]
    Fixture,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::handle(cli.serve).await,
        Commands::Fixture => commands::fixture::handle(),
    }
}
