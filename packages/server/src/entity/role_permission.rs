use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Grants `permission` (`<resource>:<action>`, e.g. `customer:delete`) to every
/// principal whose `role` matches.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub role: String,
    #[sea_orm(primary_key)]
    pub permission: String,
    #[sea_orm(belongs_to, from = "role", to = "name")]
    pub granted_to: BelongsTo<super::role::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
