use thiserror::Error;

use super::entity::EntityKind;
use crate::stores::StoreError;

#[derive(Debug, Error)]
pub enum DeletionError {
    /// One or more backing stores were never initialized.
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0} ID missing")]
    MissingId(EntityKind),

    #[error("Invalid {kind} ID: {reason}")]
    InvalidId {
        kind: EntityKind,
        reason: &'static str,
    },

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Failed to look up record: {0}")]
    Lookup(#[source] StoreError),

    #[error("Failed to delete record: {0}")]
    RecordDelete(#[source] StoreError),

    /// The spawned record-delete task panicked or was aborted.
    #[error("Record deletion task failed: {0}")]
    Interrupted(String),
}
