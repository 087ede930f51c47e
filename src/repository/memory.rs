//! In-process equipment store.
//!
//! Records live in an id-ordered vector behind a lock. Nothing is persisted:
//! a restart brings back the seed records only.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{AccessLogStore, EquipmentStore};
use crate::{
    error::{AppError, AppResult},
    models::{AccessLogEntry, Equipment, EquipmentFilter, EquipmentRecord, PageSpec},
};

struct MemoryState {
    rows: Vec<Equipment>,
    /// Highest id ever issued, so deleted ids are never handed out again
    last_id: i64,
}

pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new(rows: Vec<Equipment>) -> Self {
        let last_id = rows.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            state: RwLock::new(MemoryState { rows, last_id }),
        }
    }

    /// Store holding the two demo records used in mock mode
    pub fn seeded() -> Self {
        Self::new(seed_rows())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn seed_rows() -> Vec<Equipment> {
    vec![
        Equipment {
            id: 1,
            tipo: "Notebook".to_string(),
            localizacao: "Palmas-Escritório".to_string(),
            fabricante: "Dell".to_string(),
            modelo: "Latitude 3490".to_string(),
            service_tag: "ABC123".to_string(),
            imei: String::new(),
            centro_custo: "CC-100".to_string(),
            estado: "EM USO".to_string(),
        },
        Equipment {
            id: 2,
            tipo: "Celular".to_string(),
            localizacao: "Miracema Usina".to_string(),
            fabricante: "Samsung".to_string(),
            modelo: "A34".to_string(),
            service_tag: String::new(),
            imei: "359876543210123".to_string(),
            centro_custo: "CC-200".to_string(),
            estado: "Estoque".to_string(),
        },
    ]
}

fn clamp_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl EquipmentStore for MemoryStore {
    async fn list(&self, filter: &EquipmentFilter, page: &PageSpec) -> AppResult<(i64, Vec<Equipment>)> {
        let state = self.read()?;
        let matching: Vec<&Equipment> = state.rows.iter().filter(|e| filter.matches(e)).collect();
        let total = matching.len() as i64;
        let data = matching
            .into_iter()
            .skip(clamp_usize(page.offset()))
            .take(clamp_usize(page.page_size))
            .cloned()
            .collect();
        Ok((total, data))
    }

    async fn insert(&self, record: &EquipmentRecord) -> AppResult<i64> {
        let mut state = self.write()?;
        let id = state.last_id + 1;
        state.last_id = id;
        state.rows.push(record.clone().into_equipment(id));
        tracing::debug!(id, "memory store: inserted equipment");
        Ok(id)
    }

    async fn update(&self, id: i64, record: &EquipmentRecord) -> AppResult<bool> {
        let mut state = self.write()?;
        match state.rows.iter_mut().find(|e| e.id == id) {
            Some(row) => *row = record.clone().into_equipment(id),
            None => tracing::debug!(id, "memory store: update matched no record"),
        }
        Ok(true)
    }

    async fn remove(&self, id: i64) -> AppResult<bool> {
        let mut state = self.write()?;
        state.rows.retain(|e| e.id != id);
        Ok(true)
    }
}

/// Mock mode has no login audit trail
#[async_trait]
impl AccessLogStore for MemoryStore {
    async fn recent(&self, _limit: u32) -> AppResult<Vec<AccessLogEntry>> {
        Ok(Vec::new())
    }
}
