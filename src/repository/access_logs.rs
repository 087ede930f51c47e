//! Access log repository (MySQL view `vw_inventario_acessos`)

use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::AccessLogStore;
use crate::{error::AppResult, models::AccessLogEntry};

#[derive(Clone)]
pub struct AccessLogsRepository {
    pool: Pool<MySql>,
}

impl AccessLogsRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogStore for AccessLogsRepository {
    async fn recent(&self, limit: u32) -> AppResult<Vec<AccessLogEntry>> {
        let rows = sqlx::query_as::<_, AccessLogEntry>(
            r#"
            SELECT
                id,
                data_hora,
                email_log AS email,
                ip,
                sucesso,
                mensagem,
                login_edp,
                nome,
                notebook_modelo,
                notebook_tag,
                notebook_hostname
            FROM vw_inventario_acessos
            ORDER BY data_hora DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
