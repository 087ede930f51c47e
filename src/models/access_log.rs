//! Access log model (read-only view, populated outside this service)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::pagination::parse_leading_int;

pub const DEFAULT_LOG_LIMIT: u32 = 100;
pub const MAX_LOG_LIMIT: u32 = 500;

/// One login attempt, joined with the user and notebook it concerns
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AccessLogEntry {
    pub id: i64,
    pub data_hora: Option<NaiveDateTime>,
    pub email: Option<String>,
    pub ip: Option<String>,
    pub sucesso: Option<bool>,
    pub mensagem: Option<String>,
    pub login_edp: Option<String>,
    pub nome: Option<String>,
    pub notebook_modelo: Option<String>,
    pub notebook_tag: Option<String>,
    pub notebook_hostname: Option<String>,
}

/// Query parameters for the access log listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AccessLogQuery {
    /// Maximum number of rows (default 100, at most 500)
    pub limit: Option<String>,
}

impl AccessLogQuery {
    /// Malformed or non-positive limits fall back to the default;
    /// large ones are capped.
    pub fn resolved_limit(&self) -> u32 {
        match self.limit.as_deref().and_then(parse_leading_int) {
            Some(v) if v > 0 => v.min(i64::from(MAX_LOG_LIMIT)) as u32,
            _ => DEFAULT_LOG_LIMIT,
        }
    }
}
