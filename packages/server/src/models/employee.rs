use chrono::{DateTime, Utc};
use serde::Serialize;

pub use super::shared::{ListQuery, Pagination};
use crate::entity::employee;

/// An employee as shown on the staff roster.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = "E7")]
    pub id: String,
    #[schema(example = "Sam Ortiz")]
    pub name: String,
    #[schema(example = "Technician")]
    pub position: String,
    pub phone: Option<String>,
    pub principal_id: Option<String>,
    pub image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<employee::Model> for EmployeeResponse {
    fn from(m: employee::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            position: m.position,
            phone: m.phone,
            principal_id: m.principal_id,
            image_uri: m.image_uri,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeResponse>,
    pub pagination: Pagination,
}
