use crm_types::{MappingRecord, Tenant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic fixture file structure: the tenants and mappings a run is
/// seeded with.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FixtureConfig {
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub mappings: Vec<MappingRecord>,
}

/// Errors surfaced by the diagnostic runner.
#[derive(Debug, Error)]
pub enum DiagError {
    #[error("tenant `{0}` not found")]
    TenantNotFound(String),
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
    #[error(transparent)]
    Store(#[from] mapping_store::StoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] serde_yaml_bw::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DiagError {
    pub fn tenant_not_found(tenant_uuid: impl Into<String>) -> Self {
        DiagError::TenantNotFound(tenant_uuid.into())
    }
}
