use std::sync::Arc;

use common::storage::BlobStore;

use super::error::DeletionError;
use crate::stores::{IdentityStore, RecordStore};

/// The three store handles a deletion needs. Any member may be absent when its
/// backend failed to initialize at startup.
#[derive(Clone, Default)]
pub struct StoreBundle {
    pub records: Option<Arc<dyn RecordStore>>,
    pub blobs: Option<Arc<dyn BlobStore>>,
    pub identities: Option<Arc<dyn IdentityStore>>,
}

/// A bundle with every member present.
#[derive(Clone)]
pub(crate) struct ReadyStores {
    pub records: Arc<dyn RecordStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub identities: Arc<dyn IdentityStore>,
}

impl StoreBundle {
    pub fn new(
        records: Arc<dyn RecordStore>,
        blobs: Arc<dyn BlobStore>,
        identities: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            records: Some(records),
            blobs: Some(blobs),
            identities: Some(identities),
        }
    }

    pub(crate) fn ready(&self) -> Result<ReadyStores, DeletionError> {
        match (&self.records, &self.blobs, &self.identities) {
            (Some(records), Some(blobs), Some(identities)) => Ok(ReadyStores {
                records: Arc::clone(records),
                blobs: Arc::clone(blobs),
                identities: Arc::clone(identities),
            }),
            _ => {
                let missing: Vec<&str> = [
                    ("record store", self.records.is_none()),
                    ("object storage", self.blobs.is_none()),
                    ("identity store", self.identities.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(DeletionError::NotConfigured(format!(
                    "Backing stores not configured: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}
