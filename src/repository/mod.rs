//! Repository layer: store contracts and their memory / MySQL backends

pub mod access_logs;
pub mod equipment;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{MySql, Pool};

use crate::{
    config::Backend,
    error::AppResult,
    models::{AccessLogEntry, Equipment, EquipmentFilter, EquipmentRecord, PageSpec},
};

/// Persistence contract for equipment records.
///
/// Every backend must give identical results for identical filter and page
/// inputs, so the memory store can stand in for MySQL in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Total number of matching records, and the requested page of them in id order
    async fn list(&self, filter: &EquipmentFilter, page: &PageSpec) -> AppResult<(i64, Vec<Equipment>)>;

    /// Persist a new record and return its id
    async fn insert(&self, record: &EquipmentRecord) -> AppResult<i64>;

    /// Replace every field of record `id`.
    ///
    /// Reports success whether or not `id` exists.
    async fn update(&self, id: i64, record: &EquipmentRecord) -> AppResult<bool>;

    /// Hard-delete record `id`.
    ///
    /// Reports success whether or not `id` exists.
    async fn remove(&self, id: i64) -> AppResult<bool>;
}

/// Read access to the login audit view
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogStore: Send + Sync {
    /// Up to `limit` entries, most recent first
    async fn recent(&self, limit: u32) -> AppResult<Vec<AccessLogEntry>>;
}

/// Main repository struct holding the active backend
#[derive(Clone)]
pub struct Repository {
    backend: Backend,
    pub equipment: Arc<dyn EquipmentStore>,
    pub access_logs: Arc<dyn AccessLogStore>,
}

impl Repository {
    /// Create a MySQL-backed repository with the given database pool
    pub fn new(pool: Pool<MySql>) -> Self {
        Self {
            backend: Backend::Mysql,
            equipment: Arc::new(equipment::EquipmentRepository::new(pool.clone())),
            access_logs: Arc::new(access_logs::AccessLogsRepository::new(pool)),
        }
    }

    /// Create a repository over the seeded in-process store
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::seeded());
        Self {
            backend: Backend::Mock,
            equipment: store.clone(),
            access_logs: store,
        }
    }

    /// Assemble a repository from arbitrary store implementations
    pub fn with_stores(
        backend: Backend,
        equipment: Arc<dyn EquipmentStore>,
        access_logs: Arc<dyn AccessLogStore>,
    ) -> Self {
        Self {
            backend,
            equipment,
            access_logs,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }
}
