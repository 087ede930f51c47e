//! API handlers and router for the inventory REST endpoints

pub mod access_logs;
pub mod equipment;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.server.static_dir);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route("/equipamentos", get(equipment::list_equipment))
        .route("/equipamentos", post(equipment::create_equipment))
        .route("/equipamentos/:id", put(equipment::update_equipment))
        .route("/equipamentos/:id", delete(equipment::delete_equipment))
        // Access logs
        .route("/inventario/logs", get(access_logs::list_access_logs))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
