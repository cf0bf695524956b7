mod config;
mod error;
mod stats;
mod store;
mod validate;

pub use config::StoreConfig;
pub use error::{ConfigError, StoreError};
pub use store::{MappingStore, Upsert};
pub use validate::{InvalidMapping, ValidationReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crm_types::{EntityKind, MappingRecord, SyncStatus, Tenant};

    fn record(
        entity: EntityKind,
        pos_id: &str,
        crm_id: &str,
        tenant_uuid: &str,
        status: SyncStatus,
    ) -> MappingRecord {
        MappingRecord {
            entity,
            pos_id: pos_id.into(),
            crm_id: crm_id.into(),
            tenant_uuid: tenant_uuid.into(),
            status,
            last_synced_at: None,
            metadata: None,
        }
    }

    fn tenant(tenant_uuid: &str) -> Tenant {
        Tenant {
            tenant_uuid: tenant_uuid.into(),
            name: "Acme Retail".into(),
            environment: None,
        }
    }

    fn seeded_store() -> MappingStore {
        let config = StoreConfig::new(vec![
            record(
                EntityKind::Business,
                "biz-1",
                "t-acme",
                "t-acme",
                SyncStatus::Active,
            ),
            record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Active,
            ),
            record(
                EntityKind::Customer,
                "cust-2",
                "c-uuid-2",
                "t-acme",
                SyncStatus::Failed,
            ),
            record(
                EntityKind::Transaction,
                "txn-1",
                "x-uuid-1",
                "t-acme",
                SyncStatus::Pending,
            ),
            record(
                EntityKind::Customer,
                "cust-9",
                "c-uuid-9",
                "t-other",
                SyncStatus::Active,
            ),
        ]);
        MappingStore::from_config(&config).expect("seed store")
    }

    #[test]
    fn from_config_rejects_duplicate_pos_id() {
        let config = StoreConfig::new(vec![
            record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Active,
            ),
            record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-2",
                "t-acme",
                SyncStatus::Active,
            ),
        ]);
        let err = MappingStore::from_config(&config).expect_err("duplicate pos id");
        assert!(matches!(
            err,
            StoreError::Config {
                source: ConfigError::DuplicatePosId { .. }
            }
        ));
    }

    #[test]
    fn from_config_rejects_duplicate_crm_id() {
        let config = StoreConfig::new(vec![
            record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Active,
            ),
            record(
                EntityKind::Customer,
                "cust-2",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Active,
            ),
        ]);
        let err = MappingStore::from_config(&config).expect_err("duplicate crm id");
        assert!(matches!(
            err,
            StoreError::Config {
                source: ConfigError::DuplicateCrmId { .. }
            }
        ));
    }

    #[test]
    fn upsert_creates_then_updates() {
        let mut store = MappingStore::default();
        let created = store
            .upsert_mapping(record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Pending,
            ))
            .expect("create");
        assert_eq!(created, Upsert::Created);

        let updated = store
            .upsert_mapping(record(
                EntityKind::Customer,
                "cust-1",
                "c-uuid-1b",
                "t-acme",
                SyncStatus::Failed,
            ))
            .expect("update");
        assert_eq!(updated, Upsert::Updated);

        let mapping = store
            .mapping(EntityKind::Customer, "cust-1")
            .expect("mapping");
        assert_eq!(mapping.crm_id, "c-uuid-1b");
        assert_eq!(mapping.status, SyncStatus::Active);
        assert!(mapping.last_synced_at.is_some());

        // Reverse index follows the new crm id.
        assert_eq!(store.pos_id(EntityKind::Customer, "c-uuid-1"), None);
        assert_eq!(
            store.pos_id(EntityKind::Customer, "c-uuid-1b"),
            Some("cust-1")
        );
    }

    #[test]
    fn upsert_rejects_crm_id_mapped_to_other_pos_id() {
        let mut store = seeded_store();
        let err = store
            .upsert_mapping(record(
                EntityKind::Customer,
                "cust-3",
                "c-uuid-1",
                "t-acme",
                SyncStatus::Active,
            ))
            .expect_err("crm id already owned by cust-1");
        assert!(matches!(err, StoreError::CrmIdConflict { .. }));
    }

    #[test]
    fn directional_lookups() {
        let store = seeded_store();
        assert_eq!(store.crm_id(EntityKind::Customer, "cust-1"), Some("c-uuid-1"));
        assert_eq!(store.pos_id(EntityKind::Customer, "c-uuid-2"), Some("cust-2"));
        assert_eq!(store.crm_id(EntityKind::Customer, "cust-404"), None);
        // Kind is part of the key.
        assert_eq!(store.crm_id(EntityKind::Transaction, "cust-1"), None);
    }

    #[test]
    fn tenant_mappings_filters_and_orders_newest_first() {
        let store = seeded_store();
        let all = store.tenant_mappings("t-acme", None);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].pos_id, "txn-1");
        assert_eq!(all[3].pos_id, "biz-1");

        let customers = store.tenant_mappings("t-acme", Some(EntityKind::Customer));
        assert_eq!(customers.len(), 2);
        assert!(customers.iter().all(|r| r.entity == EntityKind::Customer));
    }

    #[test]
    fn remove_mapping_clears_both_directions() {
        let mut store = seeded_store();
        let removed = store
            .remove_mapping(EntityKind::Customer, "cust-1")
            .expect("remove");
        assert_eq!(removed.crm_id, "c-uuid-1");
        assert_eq!(store.crm_id(EntityKind::Customer, "cust-1"), None);
        assert_eq!(store.pos_id(EntityKind::Customer, "c-uuid-1"), None);

        let err = store
            .remove_mapping(EntityKind::Customer, "cust-1")
            .expect_err("already removed");
        assert!(matches!(err, StoreError::MappingNotFound { .. }));
    }

    #[test]
    fn set_status_stamps_sync_time() {
        let mut store = seeded_store();
        store
            .set_status(EntityKind::Transaction, "txn-1", SyncStatus::Failed)
            .expect("set status");
        let mapping = store
            .mapping(EntityKind::Transaction, "txn-1")
            .expect("mapping");
        assert_eq!(mapping.status, SyncStatus::Failed);
        assert!(mapping.last_synced_at.is_some());
    }

    #[test]
    fn stats_count_by_type_and_status() {
        let store = seeded_store();
        let stats = store.mapping_stats(&tenant("t-acme"));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_type.business, 1);
        assert_eq!(stats.by_type.customer, 2);
        assert_eq!(stats.by_type.transaction, 1);
        assert_eq!(stats.by_status.active, 2);
        assert_eq!(stats.by_status.failed, 1);
    }

    #[test]
    fn stats_ignore_other_tenants() {
        let store = seeded_store();
        let stats = store.mapping_stats(&Tenant {
            tenant_uuid: "t-other".into(),
            name: "Other".into(),
            environment: None,
        });
        assert_eq!(stats.total, 1);
        assert_eq!(stats.by_type.customer, 1);
    }

    #[test]
    fn validate_flags_missing_entities() {
        let store = seeded_store();
        let report = store.validate_mappings("t-acme", |record| record.pos_id != "cust-2");
        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 3);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].pos_id, "cust-2");
        assert_eq!(report.invalid[0].reason, "entity not found in POS system");
    }
}
