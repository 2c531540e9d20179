use tl_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env for local development
    dotenvy::dotenv().ok();

    let config = tl_config::Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = tl_db::connect(
        &database_path,
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await
    .map_err(tl_server::error::ServerError::from)?;
    info!("Migrations complete");

    let state = AppState::new(pool.clone(), config.session.clone());
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener =
        TcpListener::bind(&addr)
            .await
            .map_err(|e| tl_server::error::ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Keep serving; the process can still be killed
            error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
