use crm_types::Tenant;
use indexmap::IndexMap;

use crate::types::{DiagError, FixtureConfig};

/// Identifier to [`Tenant`] lookup.
#[derive(Clone, Debug)]
pub struct TenantMap {
    tenants: IndexMap<String, Tenant>,
}

impl TenantMap {
    /// Build a [`TenantMap`] from a fixture, rejecting duplicate identifiers.
    pub fn from_config(config: &FixtureConfig) -> Result<Self, DiagError> {
        let mut tenants = IndexMap::with_capacity(config.tenants.len());
        for tenant in &config.tenants {
            if tenants.contains_key(&tenant.tenant_uuid) {
                return Err(DiagError::InvalidFixture(format!(
                    "duplicate tenant uuid `{}`",
                    tenant.tenant_uuid
                )));
            }
            tenants.insert(tenant.tenant_uuid.clone(), tenant.clone());
        }

        Ok(TenantMap { tenants })
    }

    /// Retrieve a tenant by identifier.
    pub fn get(&self, tenant_uuid: &str) -> Result<&Tenant, DiagError> {
        self.tenants
            .get(tenant_uuid)
            .ok_or_else(|| DiagError::tenant_not_found(tenant_uuid))
    }

    /// Iterate over known tenants in fixture order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Tenant)> {
        self.tenants.iter()
    }
}
