use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::{EntityRecord, RecordStore, StoreError};
use crate::deletion::EntityKind;
use crate::entity::{customer, employee};

impl From<customer::Model> for EntityRecord {
    fn from(model: customer::Model) -> Self {
        Self {
            id: model.id,
            principal_id: model.principal_id,
            image_uri: model.image_uri,
        }
    }
}

impl From<employee::Model> for EntityRecord {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            principal_id: model.principal_id,
            image_uri: model.image_uri,
        }
    }
}

/// Record store over the `customer` or `employee` table, depending on `kind`.
pub struct SeaOrmRecordStore {
    db: DatabaseConnection,
    kind: EntityKind,
}

impl SeaOrmRecordStore {
    pub fn new(db: DatabaseConnection, kind: EntityKind) -> Self {
        Self { db, kind }
    }
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    async fn get(&self, id: &str) -> Result<Option<EntityRecord>, StoreError> {
        let record = match self.kind {
            EntityKind::Customer => customer::Entity::find_by_id(id.to_owned())
                .one(&self.db)
                .await?
                .map(EntityRecord::from),
            EntityKind::Employee => employee::Entity::find_by_id(id.to_owned())
                .one(&self.db)
                .await?
                .map(EntityRecord::from),
        };
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = match self.kind {
            EntityKind::Customer => {
                customer::Entity::delete_by_id(id.to_owned())
                    .exec(&self.db)
                    .await?
            }
            EntityKind::Employee => {
                employee::Entity::delete_by_id(id.to_owned())
                    .exec(&self.db)
                    .await?
            }
        };
        Ok(result.rows_affected > 0)
    }
}
