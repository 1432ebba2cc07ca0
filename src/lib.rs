pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

use anyhow::Context;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use store::RecordStore;

/// Loads the config named on the command line, or searches the default paths.
///
/// `init` runs on defaults: its job is to create the file, which may not
/// exist yet.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if cli.command() == Commands::Init {
        return Ok(Config::default());
    }

    match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Writes a default config to the `--config` path, or `./config.toml`.
/// Returns the path and whether a file was created.
pub fn init_config_file(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_config_path);
    let created = Config::create_default_if_missing(&path)?;
    Ok((path, created))
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    match cli.command() {
        Commands::Serve => {
            config.validate()?;

            let prometheus_handle = if config.observability.metrics_enabled {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .context("Failed to install Prometheus recorder")?;
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            } else {
                None
            };

            run_server(config, prometheus_handle).await
        }

        Commands::Init => {
            let (path, created) = init_config_file(&cli)?;
            if !created {
                info!("Config file already exists: {}", path.display());
            }
            Ok(())
        }

        Commands::CheckConfig => {
            config.validate()?;
            let rendered = toml::to_string_pretty(&config)?;
            println!("{rendered}");
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let (plain_layer, json_layer) = if config.general.json_logs {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("CyberLynX v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = config.listen_address();
    let state = api::create_app_state_from_config(config, prometheus_handle);
    let app = api::router(state).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("cyberlynx-init-test-{}", uuid::Uuid::new_v4()))
            .join("new.toml")
    }

    #[test]
    fn test_init_with_new_config_path() {
        let path = temp_config_path();
        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from(["cyberlynx", "--config", path_arg.as_str(), "init"]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.server.port, constants::DEFAULT_PORT);

        let (written, created) = init_config_file(&cli).unwrap();
        assert!(created);
        assert_eq!(written, path);
        assert!(path.exists());

        let (_, created_again) = init_config_file(&cli).unwrap();
        assert!(!created_again);

        // Once the file exists, other commands load it.
        let cli = Cli::parse_from(["cyberlynx", "--config", path_arg.as_str(), "check-config"]);
        assert!(load_config(&cli).is_ok());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_explicit_config_fails_outside_init() {
        let path = temp_config_path();
        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from(["cyberlynx", "--config", path_arg.as_str(), "serve"]);

        assert!(load_config(&cli).is_err());
    }
}
