use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::path::{validate_object_path, validate_prefix};
use super::traits::{BlobStore, ObjectHandle};

/// Filesystem-backed object store.
///
/// Object paths map directly onto the directory tree under `base_path`:
/// `customerImage/C1/photo.png` lives at `{base_path}/customerImage/C1/photo.png`.
pub struct FilesystemBlobStore {
    base_path: PathBuf,
    max_size: u64,
}

impl FilesystemBlobStore {
    /// Create a new filesystem object store.
    pub async fn new(base_path: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            max_size,
        })
    }

    /// Resolve a validated object path to its location on disk.
    fn object_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let path = validate_object_path(path)?;
        Ok(self.base_path.join(path))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }

    /// Convert an on-disk file location back into a `/`-separated object path.
    fn relative_object_path(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.base_path).ok()?;
        let segments: Option<Vec<&str>> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect();
        Some(segments?.join("/"))
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn put_object(&self, path: &str, data: &[u8]) -> Result<(), StorageError> {
        let object_path = self.object_path(path)?;

        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Some(parent) = object_path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                let _ = fs::remove_file(&temp_path).await;
                return Err(e.into());
            }
        }

        if let Err(e) = fs::rename(&temp_path, &object_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn get_object(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let object_path = self.object_path(path)?;
        match fs::read(&object_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let object_path = self.object_path(path)?;
        match fs::metadata(&object_path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_object(&self, path: &str) -> Result<bool, StorageError> {
        let object_path = self.object_path(path)?;
        match fs::remove_file(&object_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectHandle>, StorageError> {
        let prefix = validate_prefix(prefix)?;
        let root = self.base_path.join(prefix.trim_end_matches('/'));

        let mut handles = Vec::new();
        let mut pending = vec![root];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            while let Some(entry) = entries.next_entry().await? {
                let file_type = entry.file_type().await?;
                let entry_path = entry.path();
                if file_type.is_dir() {
                    pending.push(entry_path);
                } else if file_type.is_file() {
                    let Some(path) = self.relative_object_path(&entry_path) else {
                        tracing::warn!(file = %entry_path.display(), "Skipping non UTF-8 object path");
                        continue;
                    };
                    let size = entry.metadata().await?.len();
                    handles.push(ObjectHandle { path, size });
                }
            }
        }

        handles.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(handles)
    }
}
