use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;

use crate::app;
use crate::config::{self, AppConfig};
use crate::state::AppState;
use crate::store::{seed_store, ProductStore};

/// Flags that override the environment configuration for one run.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    #[arg(long, global = true, help = "Interface to bind")]
    pub host: Option<String>,

    #[arg(long, global = true, help = "Port to listen on")]
    pub port: Option<u16>,

    #[arg(long, global = true, help = "Load the built-in sample catalog at startup")]
    pub sample_data: bool,

    #[arg(long, global = true, help = "JSON array of products to load at startup")]
    pub seed_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.sample_data {
            config.catalog.load_sample_data = true;
        }
        if let Some(path) = self.seed_file {
            config.catalog.seed_file = Some(path);
        }
    }
}

pub async fn handle(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    args.apply(&mut config);
    tracing::info!("Starting product catalog in {:?} mode", config.environment);

    let store = ProductStore::new();
    let seeded = seed_store(&store, &config.catalog).context("failed to seed product store")?;
    if seeded > 0 {
        tracing::info!("Seeded {} products", seeded);
    }

    let state = AppState::new(store, config.security.api_token.as_str());
    let app = app::app(state, &config);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Product catalog listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Product catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = AppConfig::default();
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9100),
            sample_data: true,
            seed_file: Some(PathBuf::from("products.json")),
        };
        args.apply(&mut config);

        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
        assert!(config.catalog.load_sample_data);
        assert_eq!(config.catalog.seed_file, Some(PathBuf::from("products.json")));
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = AppConfig::default();
        config.catalog.load_sample_data = true;
        ServeArgs::default().apply(&mut config);

        assert_eq!(config.server.port, config::DEFAULT_PORT);
        assert!(config.catalog.load_sample_data);
        assert!(config.catalog.seed_file.is_none());
    }
}
