use anyhow::Context;

use todo_api::config::ServerConfig;
use todo_api::server;
use todo_api::service::ToDoServiceImpl;
use todo_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // --- Tracing ---
    telemetry::init_tracing(config.log_format);
    tracing::info!(
        addr = %config.listen_addr(),
        db_max_connections = config.db_max_connections,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = todo_db::create_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    todo_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    todo_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Serve ---
    let service = ToDoServiceImpl::new(pool.clone());
    server::run(config.listen_addr(), service, server::shutdown_signal())
        .await
        .context("gRPC server error")?;

    // --- Post-shutdown cleanup ---
    pool.close().await;
    tracing::info!("Database pool closed, graceful shutdown complete");

    Ok(())
}
