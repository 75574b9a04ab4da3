//! Student records server: reads config from env (and `.env`), ensures the `users` table exists,
//! and serves the record API until Ctrl-C.
//!
//! Run from repo root: `cargo run -p student-records-server`

use student_records::{build_app, init_tracing, AppState, RecordStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("student_records=info,student_records_server=info");

    let config = ServerConfig::from_env()?;
    let store = RecordStore::connect(&config.database_url, config.max_connections).await?;
    store.ensure_tables().await?;
    tracing::info!(database_url = %config.database_url, "database tables ready");

    let app = build_app(AppState::new(store), config.body_limit_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
