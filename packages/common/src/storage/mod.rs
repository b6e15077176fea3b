mod error;
mod hosted_url;
mod path;
mod traits;

pub mod filesystem;
#[cfg(feature = "object-storage")]
pub mod s3;

pub use error::StorageError;
pub use hosted_url::{HostedUrlError, HostedUrlPattern};
pub use path::{validate_object_path, validate_prefix};
pub use traits::{BlobStore, ObjectHandle};
