//! Business logic services

pub mod access_logs;
pub mod equipment;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub access_logs: access_logs::AccessLogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            access_logs: access_logs::AccessLogService::new(repository.clone()),
            repository,
        }
    }

    /// Name of the store backend the services run against
    pub fn backend_name(&self) -> &'static str {
        self.repository.backend().as_str()
    }
}
