use forge_server::{AppState, ServerError, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = forge_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ServerError::io(format!("creating {}", parent.display()), e))?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting forge-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app_state = AppState::from_config(&config);
    if !app_state.identity_capture_enabled() {
        warn!("Identity capture DISABLED - POST /api/identity will answer 501");
    }

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
