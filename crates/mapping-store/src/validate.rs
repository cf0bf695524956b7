use crm_types::{EntityKind, MappingRecord};
use serde::Serialize;

/// Result of an integrity pass over a tenant's mappings.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: Vec<InvalidMapping>,
}

/// One mapping whose referenced entity could not be found.
#[derive(Clone, Debug, Serialize)]
pub struct InvalidMapping {
    pub entity: EntityKind,
    pub pos_id: String,
    pub crm_id: String,
    pub reason: String,
}

pub fn validate<'a>(
    records: impl Iterator<Item = &'a MappingRecord>,
    exists: impl Fn(&MappingRecord) -> bool,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for record in records {
        report.total += 1;
        if exists(record) {
            report.valid += 1;
        } else {
            report.invalid.push(InvalidMapping {
                entity: record.entity,
                pos_id: record.pos_id.clone(),
                crm_id: record.crm_id.clone(),
                reason: "entity not found in POS system".to_string(),
            });
        }
    }
    report
}
