//! Cascading deletion of an entity across the record, blob and identity stores.
//!
//! The cascade is ordered and non-transactional:
//!
//! 1. look the record up (absent means `NotFound`, nothing else happens)
//! 2. derive the image object, image folder and principal from that snapshot
//! 3. delete the primary image object      (best effort)
//! 4. delete every object in the image folder (best effort)
//! 5. delete the login principal            (best effort)
//! 6. delete the record row
//!
//! Best-effort failures are logged and collected into the report; only the
//! record delete can fail the operation. The row goes last so that a retry can
//! still find it and re-derive the targets of steps 3 to 5.

mod bundle;
mod entity;
mod error;
mod orchestrator;
mod steps;

pub use bundle::StoreBundle;
pub use entity::{EntityId, EntityKind};
pub use error::DeletionError;
pub use orchestrator::{DeletionReport, EntityDeletionOrchestrator};
pub use steps::StepWarning;
