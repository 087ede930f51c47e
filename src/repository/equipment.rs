//! MySQL equipment repository

use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::EquipmentStore;
use crate::{
    error::{AppError, AppResult},
    models::{Equipment, EquipmentFilter, EquipmentRecord, PageSpec},
};

/// Columns are nullable in existing databases; the API exposes them as strings
const SELECT_COLUMNS: &str = r#"
    id,
    COALESCE(tipo, '') AS tipo,
    COALESCE(localizacao, '') AS localizacao,
    COALESCE(fabricante, '') AS fabricante,
    COALESCE(modelo, '') AS modelo,
    COALESCE(service_tag, '') AS service_tag,
    COALESCE(imei, '') AS imei,
    COALESCE(centro_custo, '') AS centro_custo,
    COALESCE(estado, '') AS estado
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<MySql>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    /// Create the equipment table if it does not exist yet
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS equipamentos (
                id INT AUTO_INCREMENT PRIMARY KEY,
                tipo VARCHAR(50),
                localizacao VARCHAR(80),
                fabricante VARCHAR(80),
                modelo VARCHAR(120),
                service_tag VARCHAR(120),
                imei VARCHAR(32),
                centro_custo VARCHAR(80),
                estado VARCHAR(40)
            ) DEFAULT CHARSET = utf8mb4
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Escape character for LIKE patterns (not backslash, whose meaning in
/// literals changes with `NO_BACKSLASH_ESCAPES`)
const LIKE_ESCAPE: char = '!';

/// Lower-cased `%value%` pattern with LIKE metacharacters taken literally
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.to_lowercase().chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// WHERE clause and its bind values, in placeholder order.
///
/// Comparisons bypass the column collation: exact filters compare bytes and
/// substring filters compare lower-cased text under a binary collation, so
/// results match `EquipmentFilter::matches`.
fn where_clause(filter: &EquipmentFilter) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    macro_rules! exact {
        ($field:expr, $column:expr) => {
            if let Some(ref val) = $field {
                conditions.push(format!("CAST({} AS BINARY) = CAST(? AS BINARY)", $column));
                params.push(val.clone());
            }
        };
    }

    macro_rules! like {
        ($field:expr, $column:expr) => {
            if let Some(ref val) = $field {
                conditions.push(format!(
                    "LOWER({}) COLLATE utf8mb4_bin LIKE ? ESCAPE '{}'",
                    $column, LIKE_ESCAPE
                ));
                params.push(like_pattern(val));
            }
        };
    }

    exact!(filter.tipo, "tipo");
    exact!(filter.localizacao, "localizacao");
    exact!(filter.fabricante, "fabricante");
    exact!(filter.modelo, "modelo");
    like!(filter.service_tag, "service_tag");
    like!(filter.imei, "imei");
    like!(filter.centro_custo, "centro_custo");

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, params)
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn list(&self, filter: &EquipmentFilter, page: &PageSpec) -> AppResult<(i64, Vec<Equipment>)> {
        let (where_sql, params) = where_clause(filter);

        // Count total
        let count_q = format!("SELECT COUNT(*) FROM equipamentos {}", where_sql);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        for p in &params {
            count_builder = count_builder.bind(p);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        // Fetch rows
        let select_q = format!(
            "SELECT {} FROM equipamentos {} ORDER BY id LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_sql
        );
        let mut builder = sqlx::query_as::<_, Equipment>(&select_q);
        for p in &params {
            builder = builder.bind(p);
        }
        let rows = builder
            .bind(page.page_size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((total, rows))
    }

    async fn insert(&self, record: &EquipmentRecord) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipamentos
                (tipo, fabricante, modelo, localizacao, service_tag, imei, centro_custo, estado)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.tipo)
        .bind(&record.fabricante)
        .bind(&record.modelo)
        .bind(&record.localizacao)
        .bind(&record.service_tag)
        .bind(&record.imei)
        .bind(&record.centro_custo)
        .bind(&record.estado)
        .execute(&self.pool)
        .await?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::Internal("generated equipment id out of range".to_string()))
    }

    async fn update(&self, id: i64, record: &EquipmentRecord) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE equipamentos
            SET tipo = ?, fabricante = ?, modelo = ?, localizacao = ?,
                service_tag = ?, imei = ?, centro_custo = ?, estado = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.tipo)
        .bind(&record.fabricante)
        .bind(&record.modelo)
        .bind(&record.localizacao)
        .bind(&record.service_tag)
        .bind(&record.imei)
        .bind(&record.centro_custo)
        .bind(&record.estado)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "updated equipment");
        Ok(true)
    }

    async fn remove(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM equipamentos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "deleted equipment");
        Ok(true)
    }
}
