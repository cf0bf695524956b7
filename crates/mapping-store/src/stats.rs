use crm_types::{EntityKind, MappingRecord, MappingStats, SyncStatus};

/// Fold a set of mapping records into aggregate counts.
pub fn compute<'a>(records: impl Iterator<Item = &'a MappingRecord>) -> MappingStats {
    let mut stats = MappingStats::default();
    for record in records {
        stats.total += 1;
        match record.entity {
            EntityKind::Business => stats.by_type.business += 1,
            EntityKind::Customer => stats.by_type.customer += 1,
            EntityKind::Transaction => stats.by_type.transaction += 1,
        }
        match record.status {
            SyncStatus::Active => stats.by_status.active += 1,
            SyncStatus::Failed => stats.by_status.failed += 1,
            SyncStatus::Pending | SyncStatus::Archived => {}
        }
    }
    stats
}
