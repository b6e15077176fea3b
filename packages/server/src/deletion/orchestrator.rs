use std::sync::Arc;

use anyhow::Context;
use common::storage::{BlobStore, HostedUrlPattern};
use tracing::{debug, info, instrument};

use super::bundle::{ReadyStores, StoreBundle};
use super::entity::{EntityId, EntityKind};
use super::error::DeletionError;
use super::steps::{
    BestEffortStep, DELETE_IMAGE_FOLDER, DELETE_PRIMARY_IMAGE, DELETE_PRINCIPAL, StepWarning,
    run_best_effort,
};
use crate::stores::IdentityStore;

/// Outcome of a successful deletion.
///
/// Callers outside the server only learn that the record is gone; the
/// warnings exist for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub kind: EntityKind,
    pub id: EntityId,
    pub warnings: Vec<StepWarning>,
    /// The record delete matched no row because a concurrent deletion won.
    pub record_already_gone: bool,
}

pub struct EntityDeletionOrchestrator {
    kind: EntityKind,
    stores: StoreBundle,
    hosted_urls: HostedUrlPattern,
}

impl EntityDeletionOrchestrator {
    pub fn new(kind: EntityKind, stores: StoreBundle, hosted_urls: HostedUrlPattern) -> Self {
        Self {
            kind,
            stores,
            hosted_urls,
        }
    }

    /// Fail with `NotConfigured` if any backing store is absent.
    pub fn check_configured(&self) -> Result<(), DeletionError> {
        self.stores.ready().map(|_| ())
    }

    /// Delete the entity `id` and everything it owns.
    #[instrument(skip(self, id), fields(kind = %self.kind, id = %id))]
    pub async fn delete_entity(&self, id: &EntityId) -> Result<DeletionReport, DeletionError> {
        let stores = self.stores.ready()?;

        let record = stores
            .records
            .get(id.as_str())
            .await
            .map_err(DeletionError::Lookup)?
            .ok_or(DeletionError::NotFound(self.kind))?;

        // Targets come from the stored snapshot, never from the request.
        let image_uri = record.image_uri.as_deref();
        let principal_id = record.principal_id.as_deref();
        let folder_prefix = self.kind.folder_prefix(id);

        let steps = vec![
            BestEffortStep::new(
                DELETE_PRIMARY_IMAGE,
                self.delete_primary_image(&*stores.blobs, image_uri),
            ),
            BestEffortStep::new(
                DELETE_IMAGE_FOLDER,
                delete_image_folder(&*stores.blobs, &folder_prefix),
            ),
            BestEffortStep::new(
                DELETE_PRINCIPAL,
                delete_principal(&*stores.identities, principal_id),
            ),
        ];
        let warnings = run_best_effort(steps, self.kind, id).await;

        let removed = delete_record(&stores, id).await?;
        if !removed {
            info!("Record already removed by a concurrent deletion, treating as deleted");
        }

        info!(warnings = warnings.len(), "Entity deleted");

        Ok(DeletionReport {
            kind: self.kind,
            id: id.clone(),
            warnings,
            record_already_gone: !removed,
        })
    }

    async fn delete_primary_image(
        &self,
        blobs: &dyn BlobStore,
        image_uri: Option<&str>,
    ) -> anyhow::Result<()> {
        let Some(uri) = image_uri.filter(|u| !u.trim().is_empty()) else {
            return Ok(());
        };

        let Some(path) = self
            .hosted_urls
            .object_path(uri)
            .context("Malformed hosted image URL")?
        else {
            debug!(uri, "Image is not hosted in our object storage, skipping");
            return Ok(());
        };

        let deleted = blobs
            .delete_object(&path)
            .await
            .with_context(|| format!("Failed to delete image object '{path}'"))?;
        if !deleted {
            debug!(path, "Image object already absent");
        }
        Ok(())
    }
}

async fn delete_image_folder(blobs: &dyn BlobStore, prefix: &str) -> anyhow::Result<()> {
    let deleted = blobs
        .delete_prefix(prefix)
        .await
        .with_context(|| format!("Failed to delete objects under '{prefix}'"))?;
    debug!(prefix, deleted, "Image folder cleared");
    Ok(())
}

async fn delete_principal(
    identities: &dyn IdentityStore,
    principal_id: Option<&str>,
) -> anyhow::Result<()> {
    let Some(principal_id) = principal_id.filter(|p| !p.trim().is_empty()) else {
        return Ok(());
    };

    let deleted = identities
        .delete_principal(principal_id)
        .await
        .with_context(|| format!("Failed to delete principal '{principal_id}'"))?;
    if !deleted {
        debug!(principal_id, "Principal already absent");
    }
    Ok(())
}

/// Runs on its own task: once started, dropping the caller cannot interrupt it.
async fn delete_record(stores: &ReadyStores, id: &EntityId) -> Result<bool, DeletionError> {
    let records = Arc::clone(&stores.records);
    let id = id.as_str().to_owned();

    tokio::spawn(async move { records.delete(&id).await })
        .await
        .map_err(|e| DeletionError::Interrupted(e.to_string()))?
        .map_err(DeletionError::RecordDelete)
}
