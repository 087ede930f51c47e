//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{access_logs, equipment, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = "Equipment inventory REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Access logs
        access_logs::list_access_logs,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentPayload,
            crate::models::equipment::EquipmentQuery,
            crate::models::equipment::EquipmentPage,
            equipment::CreatedResponse,
            equipment::OkResponse,
            // Access logs
            crate::models::access_log::AccessLogEntry,
            crate::models::access_log::AccessLogQuery,
            access_logs::AccessLogsResponse,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "access-logs", description = "Login audit report")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_inventory_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/equipamentos"));
        assert!(doc.paths.paths.contains_key("/equipamentos/{id}"));
        assert!(doc.paths.paths.contains_key("/inventario/logs"));
    }
}
