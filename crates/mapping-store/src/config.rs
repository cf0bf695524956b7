use crm_types::MappingRecord;
use serde::{Deserialize, Serialize};

/// Seed data for a [`MappingStore`](crate::MappingStore).
///
/// Deserializable so fixture files can carry it directly.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub mappings: Vec<MappingRecord>,
}

impl StoreConfig {
    pub fn new(mappings: Vec<MappingRecord>) -> Self {
        Self { mappings }
    }
}
