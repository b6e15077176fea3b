use std::sync::Arc;

use common::storage::{BlobStore, HostedUrlPattern};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::deletion::{EntityDeletionOrchestrator, EntityKind, StoreBundle};
use crate::stores::{PrincipalStore, SeaOrmRecordStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    /// `None` when the configured storage backend failed to initialize.
    pub blob_store: Option<Arc<dyn BlobStore>>,
}

impl AppState {
    pub fn store_bundle(&self, kind: EntityKind) -> StoreBundle {
        StoreBundle {
            records: Some(Arc::new(SeaOrmRecordStore::new(self.db.clone(), kind))),
            blobs: self.blob_store.clone(),
            identities: Some(Arc::new(PrincipalStore::new(self.db.clone()))),
        }
    }

    pub fn deletion_orchestrator(&self, kind: EntityKind) -> EntityDeletionOrchestrator {
        EntityDeletionOrchestrator::new(
            kind,
            self.store_bundle(kind),
            HostedUrlPattern::new(&self.config.storage.hosted_host_suffix),
        )
    }
}

#[cfg(test)]
impl AppState {
    /// State over `db` with a fixed JWT secret and default storage settings.
    pub(crate) fn for_tests(
        db: DatabaseConnection,
        jwt_secret: &str,
        blob_store: Option<Arc<dyn BlobStore>>,
    ) -> Self {
        use crate::config::{AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};

        Self {
            db,
            config: AppConfig {
                server: ServerConfig {
                    host: "127.0.0.1".into(),
                    port: 0,
                    cors: CorsConfig {
                        allow_origins: vec![],
                        max_age: 0,
                    },
                },
                database: DatabaseConfig { url: String::new() },
                auth: AuthConfig {
                    jwt_secret: jwt_secret.into(),
                    admin_email: None,
                    admin_password: None,
                },
                storage: Default::default(),
            },
            blob_store,
        }
    }
}
