//! Equipment service

use crate::{
    error::AppResult,
    models::{
        equipment::{EquipmentPage, EquipmentQuery},
        EquipmentFilter, EquipmentPayload, EquipmentRecord, PageSpec,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List equipment matching the query filters, one page at a time
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<EquipmentPage> {
        let page = PageSpec::from_raw(query.page.as_deref(), query.page_size.as_deref());
        let filter = EquipmentFilter::from_query(query);

        let (total, data) = self.repository.equipment.list(&filter, &page).await?;
        Ok(EquipmentPage {
            total,
            page: page.page,
            data,
        })
    }

    /// Create equipment and return its id
    pub async fn create(&self, data: &EquipmentPayload) -> AppResult<i64> {
        let record = EquipmentRecord::from_payload(data);
        let id = self.repository.equipment.insert(&record).await?;
        tracing::info!(id, tipo = %record.tipo, "equipment created");
        Ok(id)
    }

    /// Replace all fields of equipment `id`; succeeds even if `id` is unknown
    pub async fn update(&self, id: i64, data: &EquipmentPayload) -> AppResult<bool> {
        let record = EquipmentRecord::from_payload(data);
        self.repository.equipment.update(id, &record).await
    }

    /// Delete equipment `id`; succeeds even if `id` is unknown
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        self.repository.equipment.remove(id).await
    }
}
