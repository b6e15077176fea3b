use chrono::{DateTime, Utc};
use serde::Serialize;

pub use super::shared::{ListQuery, Pagination};
use crate::entity::customer;

/// A customer as shown in the admin dashboard.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CustomerResponse {
    #[schema(example = "C1")]
    pub id: String,
    #[schema(example = "Ann Lee")]
    pub name: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Login identity linked to this customer, if any.
    pub principal_id: Option<String>,
    pub image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<customer::Model> for CustomerResponse {
    fn from(m: customer::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            principal_id: m.principal_id,
            image_uri: m.image_uri,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CustomerListResponse {
    pub data: Vec<CustomerResponse>,
    pub pagination: Pagination,
}
