use async_trait::async_trait;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::{Bucket, Region};

use super::error::StorageError;
use super::path::{validate_object_path, validate_prefix};
use super::traits::{BlobStore, ObjectHandle};
use crate::config::S3Config;

fn backend_error(err: S3Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

fn check_status(status: u16, op: &str, path: &str) -> Result<(), StorageError> {
    if (200..300).contains(&status) {
        Ok(())
    } else if status == 404 {
        Err(StorageError::NotFound(path.to_string()))
    } else {
        Err(StorageError::Backend(format!(
            "{op} {path} returned HTTP {status}"
        )))
    }
}

/// Maps a HEAD or DELETE status onto "object was there".
fn presence(status: u16, op: &str, path: &str) -> Result<bool, StorageError> {
    match check_status(status, op, path) {
        Ok(()) => Ok(true),
        Err(StorageError::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Object store backed by an S3-compatible bucket.
pub struct S3BlobStore {
    bucket: Box<Bucket>,
}

impl S3BlobStore {
    /// Build a bucket handle. Fails when credentials cannot be resolved.
    pub fn new(config: &S3Config) -> Result<Self, StorageError> {
        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse()
                .map_err(|e| StorageError::Backend(format!("invalid region: {e}")))?,
        };

        let credentials = Credentials::new(
            config.access_key.as_deref(),
            config.secret_key.as_deref(),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Backend(format!("credentials unavailable: {e}")))?;

        let mut bucket =
            Bucket::new(&config.bucket, region, credentials).map_err(backend_error)?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        Ok(Self { bucket })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(&self, path: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = validate_object_path(path)?;
        let response = self
            .bucket
            .put_object(path, data)
            .await
            .map_err(backend_error)?;
        check_status(response.status_code(), "PUT", path)
    }

    async fn get_object(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let path = validate_object_path(path)?;
        let response = self.bucket.get_object(path).await.map_err(backend_error)?;
        check_status(response.status_code(), "GET", path)?;
        Ok(response.bytes().to_vec())
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let path = validate_object_path(path)?;
        let (_, status) = self.bucket.head_object(path).await.map_err(backend_error)?;
        presence(status, "HEAD", path)
    }

    /// S3 usually answers deletes of absent keys with success, which reports `true`.
    async fn delete_object(&self, path: &str) -> Result<bool, StorageError> {
        let path = validate_object_path(path)?;
        let response = self
            .bucket
            .delete_object(path)
            .await
            .map_err(backend_error)?;
        presence(response.status_code(), "DELETE", path)
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectHandle>, StorageError> {
        let prefix = validate_prefix(prefix)?;
        let pages = self
            .bucket
            .list(prefix.to_string(), None)
            .await
            .map_err(backend_error)?;

        Ok(pages
            .into_iter()
            .flat_map(|page| page.contents)
            .map(|object| ObjectHandle {
                path: object.key,
                size: object.size,
            })
            .collect())
    }
}
