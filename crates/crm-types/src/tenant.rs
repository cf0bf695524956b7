use serde::{Deserialize, Serialize};

/// A CRM tenant: one customer organization of the multi-tenant system.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tenant {
    /// Opaque unique identifier, e.g. `a-cx-d8bf4`.
    pub tenant_uuid: String,
    /// Display name shown in diagnostics and dashboards.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}
