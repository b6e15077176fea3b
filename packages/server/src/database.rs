use std::sync::Arc;
use std::time::Duration;

use common::config::{StorageAppConfig, StorageBackendKind};
use common::storage::filesystem::FilesystemBlobStore;
use common::storage::s3::S3BlobStore;
use common::storage::{BlobStore, StorageError};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    // Set connection pool options
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("admin_server::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Build the configured object storage backend.
pub async fn init_blob_store(
    config: &StorageAppConfig,
) -> Result<Arc<dyn BlobStore>, StorageError> {
    match config.backend {
        StorageBackendKind::Filesystem => {
            let store =
                FilesystemBlobStore::new(config.root.clone(), config.max_object_size).await?;
            Ok(Arc::new(store))
        }
        StorageBackendKind::S3 => {
            let s3 = config.s3.as_ref().ok_or_else(|| {
                StorageError::Backend("storage.s3 section is required for the s3 backend".into())
            })?;
            Ok(Arc::new(S3BlobStore::new(s3)?))
        }
    }
}
