//! FizzBuzz service binary.
//!
//! Loads configuration, connects the configured request log, and serves the
//! HTTP API until the process is asked to stop.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `FIZZBUZZ_CONFIG` or `fizzbuzz-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect the storage backend (and migrate, for `PostgreSQL`)
//! 4. Serve HTTP until `Ctrl-C` or `SIGTERM`
//! 5. Close storage connections

mod error;
mod storage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fizzbuzz_api::{AppState, ServerConfig};
use fizzbuzz_core::FizzBuzzService;
use fizzbuzz_core::config::{FizzBuzzConfig, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;
use crate::storage::Storage;

/// Config file read when `FIZZBUZZ_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "fizzbuzz-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_source) = load_config()?;

    init_tracing(&config.logging);

    info!("fizzbuzz-server starting");
    info!(
        source = %config_source,
        backend = ?config.storage.backend,
        host = config.server.host.as_str(),
        port = config.server.port,
        "Configuration loaded"
    );

    run(config).await?;

    info!("fizzbuzz-server stopped");
    Ok(())
}

/// Connect storage, serve, then release storage.
async fn run(config: FizzBuzzConfig) -> Result<(), AppError> {
    let storage = Storage::connect(&config.storage).await?;
    let service = FizzBuzzService::new(storage.store());
    let state = Arc::new(AppState::new(service));

    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    let served = fizzbuzz_api::start_server(&server_config, state).await;

    storage.close().await;
    served?;
    Ok(())
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Load configuration from the file named by `FIZZBUZZ_CONFIG`, else from
/// `fizzbuzz-config.yaml` if it exists, else from defaults. Environment
/// overrides apply in every case.
///
/// Returns the config along with a description of where it came from.
/// Logging is not up yet, so the caller reports it.
fn load_config() -> Result<(FizzBuzzConfig, String), AppError> {
    let explicit = std::env::var("FIZZBUZZ_CONFIG").ok().map(PathBuf::from);

    match explicit {
        Some(path) => {
            let config = FizzBuzzConfig::from_file(&path)?;
            Ok((config, path.display().to_string()))
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                Ok((FizzBuzzConfig::from_file(path)?, DEFAULT_CONFIG_PATH.to_owned()))
            } else {
                Ok((FizzBuzzConfig::from_env()?, String::from("defaults")))
            }
        }
    }
}
