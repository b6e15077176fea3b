//! Record and identity store seams consumed by the deletion orchestrator.
//!
//! Blob storage lives in `common::storage`; the two traits here cover the
//! document records and the login principals, both backed by PostgreSQL.

mod identity;
mod records;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

pub use identity::PrincipalStore;
pub use records::SeaOrmRecordStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// The parts of an entity row that deletion needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: String,
    /// Login principal owned by this entity, if any.
    pub principal_id: Option<String>,
    /// Profile image, either a hosted object URL or an arbitrary external link.
    pub image_uri: Option<String>,
}

/// Document store holding entity records of one kind.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<EntityRecord>, StoreError>;

    /// Returns `false` when no row matched.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Identity provider holding login principals.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Returns `false` when the principal did not exist.
    async fn delete_principal(&self, principal_id: &str) -> Result<bool, StoreError>;
}
