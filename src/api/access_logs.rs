//! Access log report endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::access_log::{AccessLogEntry, AccessLogQuery},
};

#[derive(Serialize, ToSchema)]
pub struct AccessLogsResponse {
    pub rows: Vec<AccessLogEntry>,
}

/// List the most recent login attempts
#[utoipa::path(
    get,
    path = "/inventario/logs",
    tag = "access-logs",
    params(AccessLogQuery),
    responses(
        (status = 200, description = "Access log rows, newest first", body = AccessLogsResponse),
        (status = 500, description = "Report could not be loaded", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_access_logs(
    State(state): State<crate::AppState>,
    Query(query): Query<AccessLogQuery>,
) -> AppResult<Json<AccessLogsResponse>> {
    let rows = state.services.access_logs.list(&query).await?;
    Ok(Json(AccessLogsResponse { rows }))
}
