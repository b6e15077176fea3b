use serde::Serialize;

use crate::deletion::EntityKind;

/// Body returned after a record and its dependents were removed.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Customer deleted successfully")]
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(kind: EntityKind) -> Self {
        Self {
            success: true,
            message: format!("{kind} deleted successfully"),
        }
    }
}
