use async_trait::async_trait;
use futures::future::join_all;

use super::error::StorageError;

/// A listed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHandle {
    /// Full object path, including the listed prefix.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

/// Path-addressed object storage.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes at `path`, replacing any existing object.
    async fn put_object(&self, path: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Retrieve all bytes of the object at `path`.
    async fn get_object(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether an object exists.
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Delete a single object.
    ///
    /// Returns `true` if the object was deleted, `false` if it did not exist.
    /// Backends that cannot tell the two apart report `true`.
    async fn delete_object(&self, path: &str) -> Result<bool, StorageError>;

    /// List every object whose path starts with `prefix`.
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectHandle>, StorageError>;

    /// Delete every object under `prefix`, returning how many were removed.
    ///
    /// Deletes are issued concurrently. All of them are attempted even if some
    /// fail; the first failure is returned afterwards.
    async fn delete_prefix(&self, prefix: &str) -> Result<usize, StorageError> {
        let handles = self.list_objects(prefix).await?;
        let results = join_all(handles.iter().map(|h| self.delete_object(&h.path))).await;

        let mut deleted = 0;
        let mut first_error = None;
        for result in results {
            match result {
                Ok(true) => deleted += 1,
                Ok(false) => {}
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(deleted),
        }
    }
}
