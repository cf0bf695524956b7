//! Shared data model for the POS/CRM mapping layer.

pub mod mapping;
pub mod tenant;

pub use mapping::{EntityKind, MappingRecord, MappingStats, StatusCounts, SyncStatus, TypeCounts};
pub use tenant::Tenant;
