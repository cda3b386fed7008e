use std::process::ExitCode;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_VAR: &str = "PAYROLL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> ExitCode {
    let config_dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    // The log filter comes from the config, so a config failure is reported before tracing exists.
    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("Failed to load configuration from {}: {}", config_dir, err);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&loader.server().log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let bind_addr = &loader.server().bind_addr;
    info!(
        config_dir = %config_dir,
        employees = loader.seed().employees.len(),
        attendance = loader.seed().attendance.len(),
        "Configuration loaded"
    );

    let state = match AppState::from_seed(loader.seed()) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Failed to seed stores");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(bind_addr.as_str()).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(bind_addr = %bind_addr, "Payroll service listening");
    if let Err(err) = axum::serve(listener, create_router(state)).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
