//! Blob storage for uploaded files.
//!
//! Everything the server stores is addressed by a [`BlobKey`], a relative,
//! slash-separated path such as `category/image/3f2a...9c.png`.
//! The [`BlobStore`] trait is the only way the rest of the backend touches files;
//! [`LocalBlobStore`] implements it on top of a directory on disk (the "public disk").

mod errors;
mod key;
mod local;
mod naming;

pub use errors::*;
pub use key::*;
pub use local::*;
pub use naming::*;

use async_trait::async_trait;
use bytes::Bytes;


#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns whether a blob is currently stored under `key`.
    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError>;

    /// Stores `contents` under `key`, replacing any existing blob.
    async fn put(&self, key: &BlobKey, contents: Bytes) -> Result<(), BlobStoreError>;

    /// Removes the blob under `key`. Removing a blob that does not exist is not an error.
    async fn delete(&self, key: &BlobKey) -> Result<(), BlobStoreError>;
}
