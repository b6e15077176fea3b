use axum::Json;

use crate::deletion::{EntityId, EntityKind};
use crate::error::AppError;
use crate::models::deletion::DeleteResponse;
use crate::state::AppState;

/// Shared body of the `DELETE /{id}` roster endpoints.
///
/// Store configuration is checked before the id so a misconfigured deployment
/// reports the configuration problem regardless of input.
pub(super) async fn delete_entity(
    state: &AppState,
    kind: EntityKind,
    raw_id: Option<&str>,
) -> Result<Json<DeleteResponse>, AppError> {
    let orchestrator = state.deletion_orchestrator(kind);
    orchestrator.check_configured()?;

    let id = EntityId::parse(kind, raw_id.unwrap_or_default())?;
    orchestrator.delete_entity(&id).await?;

    Ok(Json(DeleteResponse::deleted(kind)))
}
