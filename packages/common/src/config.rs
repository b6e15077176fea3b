use std::path::PathBuf;

use serde::Deserialize;

/// Which object storage backend holds entity images.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Local directory tree. Default.
    #[default]
    Filesystem,
    /// S3-compatible bucket.
    S3,
}

/// Connection settings for an S3-compatible bucket.
#[derive(Debug, Deserialize, Clone)]
pub struct S3Config {
    pub bucket: String,
    /// Region name. Default: "us-east-1".
    #[serde(default = "default_s3_region")]
    pub region: String,
    /// Custom endpoint (MinIO, R2, ...). When set, `region` is only used for signing.
    pub endpoint: Option<String>,
    /// Falls back to the standard AWS environment/profile chain when absent.
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Use path-style addressing instead of virtual-hosted buckets. Default: false.
    #[serde(default)]
    pub path_style: bool,
}

fn default_s3_region() -> String {
    "us-east-1".into()
}

/// App-level object storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageAppConfig {
    /// Default: filesystem.
    #[serde(default)]
    pub backend: StorageBackendKind,
    /// Root directory of the filesystem backend. Default: "./data/storage".
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    /// Upload size limit in bytes. Default: 16 MiB.
    #[serde(default = "default_max_object_size")]
    pub max_object_size: u64,
    /// Required when `backend = "s3"`.
    #[serde(default)]
    pub s3: Option<S3Config>,
    /// Host suffix of public object URLs whose objects we own. Default: "googleapis.com".
    #[serde(default = "default_hosted_host_suffix")]
    pub hosted_host_suffix: String,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("./data/storage")
}
fn default_max_object_size() -> u64 {
    16 * 1024 * 1024
}
fn default_hosted_host_suffix() -> String {
    "googleapis.com".into()
}

impl Default for StorageAppConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::default(),
            root: default_storage_root(),
            max_object_size: default_max_object_size(),
            s3: None,
            hosted_host_suffix: default_hosted_host_suffix(),
        }
    }
}
