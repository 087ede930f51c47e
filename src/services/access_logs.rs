//! Access log service

use crate::{
    error::{AppError, AppResult},
    models::{access_log::AccessLogQuery, AccessLogEntry},
    repository::Repository,
};

/// Message shown by the front-end when the report cannot be loaded
pub const RETRIEVAL_FAILURE: &str = "Falha ao carregar relatório de acessos.";

#[derive(Clone)]
pub struct AccessLogService {
    repository: Repository,
}

impl AccessLogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most recent access log entries, bounded by the resolved limit.
    ///
    /// Store failures are logged and reported as a generic retrieval failure.
    pub async fn list(&self, query: &AccessLogQuery) -> AppResult<Vec<AccessLogEntry>> {
        let limit = query.resolved_limit();
        self.repository
            .access_logs
            .recent(limit)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, limit, "failed to load access logs");
                AppError::Retrieval(RETRIEVAL_FAILURE.to_string())
            })
    }
}
