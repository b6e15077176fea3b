use std::future::Future;

use futures::future::BoxFuture;
use tracing::warn;

use super::entity::{EntityId, EntityKind};

pub(crate) const DELETE_PRIMARY_IMAGE: &str = "delete_primary_image";
pub(crate) const DELETE_IMAGE_FOLDER: &str = "delete_image_folder";
pub(crate) const DELETE_PRINCIPAL: &str = "delete_principal";

/// A best-effort step that failed without stopping the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: &'static str,
    pub message: String,
}

/// A named, not yet started step. Futures are lazy, so building the whole
/// list up front does not run anything out of order.
pub(crate) struct BestEffortStep<'a> {
    name: &'static str,
    run: BoxFuture<'a, anyhow::Result<()>>,
}

impl<'a> BestEffortStep<'a> {
    pub(crate) fn new(
        name: &'static str,
        run: impl Future<Output = anyhow::Result<()>> + Send + 'a,
    ) -> Self {
        Self {
            name,
            run: Box::pin(run),
        }
    }
}

/// Run `steps` strictly in order, turning each failure into a warning.
pub(crate) async fn run_best_effort(
    steps: Vec<BestEffortStep<'_>>,
    kind: EntityKind,
    id: &EntityId,
) -> Vec<StepWarning> {
    let mut warnings = Vec::new();

    for step in steps {
        if let Err(e) = step.run.await {
            let message = format!("{e:#}");
            warn!(
                step = step.name,
                kind = %kind,
                id = %id,
                error = %message,
                "Best-effort deletion step failed, continuing"
            );
            warnings.push(StepWarning {
                step: step.name,
                message,
            });
        }
    }

    warnings
}
