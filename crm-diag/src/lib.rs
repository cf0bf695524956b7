//! Diagnostic runner for the POS/CRM mapping service: look a tenant up by
//! identifier, compute its mapping statistics, and render a shape-aware
//! report for human inspection.

pub mod config;
pub mod report;
pub mod tenant_map;
pub mod types;

pub use config::load_fixture;
pub use tenant_map::TenantMap;
pub use types::{DiagError, FixtureConfig};

use std::path::Path;

use mapping_store::{MappingStore, StoreConfig};
use tracing::instrument;

/// Load a fixture from disk and build the [`TenantMap`] and [`MappingStore`]
/// it describes.
pub fn load_environment(path: &Path) -> Result<(TenantMap, MappingStore), DiagError> {
    let fixture = load_fixture(path)?;
    let tenants = TenantMap::from_config(&fixture)?;
    let store = MappingStore::from_config(&StoreConfig::new(fixture.mappings))?;
    Ok((tenants, store))
}

/// Run the diagnostic for one tenant: fetch it by identifier, compute its
/// mapping stats, and render the report.
///
/// A missing tenant is fatal; nothing is rendered past the failure.
#[instrument(skip(tenants, store))]
pub fn run_diagnostic(
    tenants: &TenantMap,
    store: &MappingStore,
    tenant_uuid: &str,
) -> Result<String, DiagError> {
    let tenant = tenants.get(tenant_uuid)?;
    let stats = store.mapping_stats(tenant);
    tracing::debug!(tenant = %tenant.name, total = stats.total, "mapping stats computed");
    let value = serde_json::to_value(&stats)?;
    Ok(report::render_report(tenant, &value))
}
