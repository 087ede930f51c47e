//! Inventory Server - equipment inventory REST API

use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_server::{
    api,
    config::{AppConfig, Backend},
    repository::{equipment::EquipmentRepository, Repository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("inventory_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Inventory Server v{}", env!("CARGO_PKG_VERSION"));

    let repository = match config.database.backend {
        Backend::Mock => {
            tracing::info!("Using in-memory equipment store (data is lost on restart)");
            Repository::in_memory()
        }
        Backend::Mysql => {
            // Create database connection pool
            let pool = MySqlPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect_with(config.database.connect_options())
                .await?;

            tracing::info!(
                host = %config.database.host,
                database = %config.database.name,
                "Connected to database"
            );

            EquipmentRepository::new(pool.clone()).ensure_schema().await?;
            Repository::new(pool)
        }
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state and router
    let state = AppState::new(config, repository);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
