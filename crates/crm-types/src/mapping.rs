use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of entity an ID mapping refers to.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Business,
    Customer,
    Transaction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Business => "BUSINESS",
            EntityKind::Customer => "CUSTOMER",
            EntityKind::Transaction => "TRANSACTION",
        };
        f.write_str(s)
    }
}

/// Synchronization state of a mapping.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    #[default]
    Active,
    Pending,
    Failed,
    Archived,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncStatus::Active => "ACTIVE",
            SyncStatus::Pending => "PENDING",
            SyncStatus::Failed => "FAILED",
            SyncStatus::Archived => "ARCHIVED",
        };
        f.write_str(s)
    }
}

/// One ID mapping between the POS system and the CRM system.
///
/// `(entity, pos_id)` and `(entity, crm_id)` are each unique within a store.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MappingRecord {
    pub entity: EntityKind,
    /// Identifier on the POS side.
    pub pos_id: String,
    /// UUID on the CRM side.
    pub crm_id: String,
    /// Tenant this mapping belongs to.
    pub tenant_uuid: String,
    #[serde(default)]
    pub status: SyncStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Aggregated mapping statistics for one tenant.
///
/// Serialized field names match the reporting service output consumed by the
/// dashboard (`byType`/`byStatus`).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MappingStats {
    pub total: usize,
    pub by_type: TypeCounts,
    pub by_status: StatusCounts,
}

/// Per-entity-kind mapping counts.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TypeCounts {
    pub business: usize,
    pub customer: usize,
    pub transaction: usize,
}

/// Per-sync-status mapping counts.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub failed: usize,
}
