//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::equipment::{EquipmentPage, EquipmentPayload, EquipmentQuery},
};

/// Id of newly created equipment
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Acknowledgement for update and delete
#[derive(Serialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

/// Ids are numeric; any other path segment names no record
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// List equipment with filters and pagination
#[utoipa::path(
    get,
    path = "/equipamentos",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Page of equipment", body = EquipmentPage)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<EquipmentPage>> {
    let page = state.services.equipment.list(&query).await?;
    Ok(Json(page))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipamentos",
    tag = "equipment",
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Equipment created", body = CreatedResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<EquipmentPayload>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.equipment.create(&data).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Update equipment (full replace). Unknown ids are acknowledged as well.
#[utoipa::path(
    put,
    path = "/equipamentos/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Update acknowledged", body = OkResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<EquipmentPayload>,
) -> AppResult<Json<OkResponse>> {
    let Some(id) = parse_id(&id) else {
        tracing::debug!(id = %id, "update of non-numeric equipment id ignored");
        return Ok(Json(OkResponse { ok: true }));
    };
    let ok = state.services.equipment.update(id, &data).await?;
    Ok(Json(OkResponse { ok }))
}

/// Delete equipment. Unknown ids are acknowledged as well.
#[utoipa::path(
    delete,
    path = "/equipamentos/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Delete acknowledged", body = OkResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OkResponse>> {
    let Some(id) = parse_id(&id) else {
        tracing::debug!(id = %id, "delete of non-numeric equipment id ignored");
        return Ok(Json(OkResponse { ok: true }));
    };
    let ok = state.services.equipment.delete(id).await?;
    Ok(Json(OkResponse { ok }))
}
