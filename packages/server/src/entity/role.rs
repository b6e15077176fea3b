use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The role assigned to principals created without an explicit one.
pub const DEFAULT_ROLE: &str = "customer";

/// The role granted to the bootstrap admin principal.
pub const ADMIN_ROLE: &str = "admin";

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub name: String,

    #[sea_orm(has_many)]
    pub permissions: HasMany<super::role_permission::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
