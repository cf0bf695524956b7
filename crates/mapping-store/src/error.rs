use crm_types::EntityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid mapping fixture: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("conflicting {entity} mapping: crm id `{crm_id}` is already mapped")]
    CrmIdConflict { entity: EntityKind, crm_id: String },
    #[error("no {entity} mapping for pos id `{pos_id}`")]
    MappingNotFound { entity: EntityKind, pos_id: String },
}

impl StoreError {
    pub fn config(source: ConfigError) -> Self {
        Self::Config { source }
    }

    pub fn crm_id_conflict(entity: EntityKind, crm_id: impl Into<String>) -> Self {
        Self::CrmIdConflict {
            entity,
            crm_id: crm_id.into(),
        }
    }

    pub fn mapping_not_found(entity: EntityKind, pos_id: impl Into<String>) -> Self {
        Self::MappingNotFound {
            entity,
            pos_id: pos_id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate {entity} mapping for pos id `{pos_id}`")]
    DuplicatePosId { entity: EntityKind, pos_id: String },
    #[error("duplicate {entity} mapping for crm id `{crm_id}`")]
    DuplicateCrmId { entity: EntityKind, crm_id: String },
}
