use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::{IdentityStore, StoreError};
use crate::entity::principal;

/// Identity store over the `principal` table.
pub struct PrincipalStore {
    db: DatabaseConnection,
}

impl PrincipalStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityStore for PrincipalStore {
    async fn delete_principal(&self, principal_id: &str) -> Result<bool, StoreError> {
        let result = principal::Entity::delete_by_id(principal_id.to_owned())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
