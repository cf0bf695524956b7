use std::collections::HashMap;

use chrono::Utc;
use crm_types::{EntityKind, MappingRecord, MappingStats, SyncStatus, Tenant};
use indexmap::IndexMap;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreError};
use crate::validate::ValidationReport;
use crate::{stats, validate};

/// Outcome of [`MappingStore::upsert_mapping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// In-memory POS/CRM ID-mapping store.
///
/// Records are keyed by `(entity, pos_id)` with a reverse index on
/// `(entity, crm_id)`; both directions are unique. Insertion order is
/// preserved so listings stay deterministic.
#[derive(Clone, Debug, Default)]
pub struct MappingStore {
    records: IndexMap<(EntityKind, String), MappingRecord>,
    by_crm: HashMap<(EntityKind, String), String>,
}

impl MappingStore {
    /// Build a store from seed data, rejecting duplicates in either direction.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut store = MappingStore::default();
        for record in &config.mappings {
            store
                .insert_new(record.clone())
                .map_err(StoreError::config)?;
        }
        Ok(store)
    }

    fn insert_new(&mut self, record: MappingRecord) -> Result<(), ConfigError> {
        let pos_key = (record.entity, record.pos_id.clone());
        if self.records.contains_key(&pos_key) {
            return Err(ConfigError::DuplicatePosId {
                entity: record.entity,
                pos_id: record.pos_id,
            });
        }
        let crm_key = (record.entity, record.crm_id.clone());
        if self.by_crm.contains_key(&crm_key) {
            return Err(ConfigError::DuplicateCrmId {
                entity: record.entity,
                crm_id: record.crm_id,
            });
        }
        self.by_crm.insert(crm_key, record.pos_id.clone());
        self.records.insert(pos_key, record);
        Ok(())
    }

    /// Create or update a mapping keyed by `(entity, pos_id)`.
    ///
    /// Updating refreshes the sync status to `Active` and stamps
    /// `last_synced_at`, matching how the sync pipeline re-registers an
    /// already-known entity.
    pub fn upsert_mapping(&mut self, record: MappingRecord) -> Result<Upsert, StoreError> {
        let crm_key = (record.entity, record.crm_id.clone());
        if let Some(mapped_pos) = self.by_crm.get(&crm_key) {
            if *mapped_pos != record.pos_id {
                return Err(StoreError::crm_id_conflict(record.entity, record.crm_id));
            }
        }

        let pos_key = (record.entity, record.pos_id.clone());
        match self.records.get_mut(&pos_key) {
            Some(existing) => {
                let old_crm_key = (existing.entity, existing.crm_id.clone());
                self.by_crm.remove(&old_crm_key);
                self.by_crm.insert(crm_key, record.pos_id.clone());

                existing.crm_id = record.crm_id;
                existing.tenant_uuid = record.tenant_uuid;
                existing.status = SyncStatus::Active;
                existing.last_synced_at = Some(Utc::now());
                existing.metadata = record.metadata;
                debug!(entity = %existing.entity, pos_id = %existing.pos_id, "mapping updated");
                Ok(Upsert::Updated)
            }
            None => {
                let mut record = record;
                record.status = SyncStatus::Active;
                record.last_synced_at = Some(Utc::now());
                debug!(entity = %record.entity, pos_id = %record.pos_id, "mapping created");
                self.by_crm.insert(crm_key, record.pos_id.clone());
                self.records.insert(pos_key, record);
                Ok(Upsert::Created)
            }
        }
    }

    /// CRM UUID for a POS identifier, if mapped.
    pub fn crm_id(&self, entity: EntityKind, pos_id: &str) -> Option<&str> {
        self.records
            .get(&(entity, pos_id.to_string()))
            .map(|record| record.crm_id.as_str())
    }

    /// POS identifier for a CRM UUID, if mapped.
    pub fn pos_id(&self, entity: EntityKind, crm_id: &str) -> Option<&str> {
        self.by_crm
            .get(&(entity, crm_id.to_string()))
            .map(String::as_str)
    }

    /// Full mapping record for a POS identifier.
    pub fn mapping(&self, entity: EntityKind, pos_id: &str) -> Option<&MappingRecord> {
        self.records.get(&(entity, pos_id.to_string()))
    }

    /// A tenant's mappings, most recently inserted first, optionally filtered
    /// by entity kind.
    pub fn tenant_mappings(
        &self,
        tenant_uuid: &str,
        kind: Option<EntityKind>,
    ) -> Vec<&MappingRecord> {
        self.records
            .values()
            .rev()
            .filter(|record| record.tenant_uuid == tenant_uuid)
            .filter(|record| kind.is_none_or(|k| record.entity == k))
            .collect()
    }

    /// Remove a mapping, returning the removed record.
    pub fn remove_mapping(
        &mut self,
        entity: EntityKind,
        pos_id: &str,
    ) -> Result<MappingRecord, StoreError> {
        let record = self
            .records
            .shift_remove(&(entity, pos_id.to_string()))
            .ok_or_else(|| StoreError::mapping_not_found(entity, pos_id))?;
        self.by_crm.remove(&(entity, record.crm_id.clone()));
        debug!(%entity, pos_id, "mapping removed");
        Ok(record)
    }

    /// Update a mapping's sync status, stamping `last_synced_at`.
    pub fn set_status(
        &mut self,
        entity: EntityKind,
        pos_id: &str,
        status: SyncStatus,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .get_mut(&(entity, pos_id.to_string()))
            .ok_or_else(|| StoreError::mapping_not_found(entity, pos_id))?;
        record.status = status;
        record.last_synced_at = Some(Utc::now());
        Ok(())
    }

    /// Aggregate mapping statistics for one tenant.
    pub fn mapping_stats(&self, tenant: &Tenant) -> MappingStats {
        stats::compute(
            self.records
                .values()
                .filter(|record| record.tenant_uuid == tenant.tenant_uuid),
        )
    }

    /// Check that every mapping of a tenant still refers to a live entity.
    ///
    /// The store does not own the POS tables, so the existence check is
    /// supplied by the caller.
    pub fn validate_mappings(
        &self,
        tenant_uuid: &str,
        exists: impl Fn(&MappingRecord) -> bool,
    ) -> ValidationReport {
        validate::validate(
            self.records
                .values()
                .filter(|record| record.tenant_uuid == tenant_uuid),
            exists,
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingRecord> {
        self.records.values()
    }
}
