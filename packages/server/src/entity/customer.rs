use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,

    /// Weak reference to `principal.id`; severed by the deletion cascade.
    pub principal_id: Option<String>,

    /// Profile image URL. Only hosted object URLs are deleted with the customer.
    pub image_uri: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
