//! Data models for the inventory server

pub mod access_log;
pub mod equipment;
pub mod identifier;
pub mod pagination;

// Re-export commonly used types
pub use access_log::AccessLogEntry;
pub use equipment::{Equipment, EquipmentFilter, EquipmentPayload, EquipmentRecord};
pub use identifier::Identifiers;
pub use pagination::PageSpec;
