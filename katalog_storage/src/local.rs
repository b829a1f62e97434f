use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::{BlobKey, BlobStore, BlobStoreError};


/// A [`BlobStore`] that keeps blobs as plain files under a root directory.
///
/// A blob with the key `category/image/a.png` lives at `{root}/category/image/a.png`.
/// Directories are created on demand.
#[derive(Clone, Debug)]
pub struct LocalBlobStore {
    root_directory_path: PathBuf,
}

impl LocalBlobStore {
    pub fn new<P>(root_directory_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            root_directory_path: root_directory_path.into(),
        }
    }

    pub fn root_directory_path(&self) -> &Path {
        &self.root_directory_path
    }

    /// Returns the on-disk path of the given blob.
    pub fn file_path_for(&self, key: &BlobKey) -> PathBuf {
        let mut file_path = self.root_directory_path.clone();
        file_path.extend(key.segments());

        file_path
    }
}


#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError> {
        let file_path = self.file_path_for(key);

        match tokio::fs::metadata(&file_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(BlobStoreError::UnableToCheckExistence {
                key: key.to_string(),
                error,
            }),
        }
    }

    async fn put(&self, key: &BlobKey, contents: Bytes) -> Result<(), BlobStoreError> {
        let file_path = self.file_path_for(key);

        if let Some(parent_directory_path) = file_path.parent() {
            tokio::fs::create_dir_all(parent_directory_path)
                .await
                .map_err(|error| BlobStoreError::UnableToCreateDirectory {
                    directory_path: parent_directory_path.to_path_buf(),
                    error,
                })?;
        }

        tokio::fs::write(&file_path, &contents)
            .await
            .map_err(|error| BlobStoreError::UnableToWrite {
                key: key.to_string(),
                error,
            })?;

        debug!(
            key = key.as_str(),
            size = contents.len(),
            "Stored blob on local disk."
        );

        Ok(())
    }

    async fn delete(&self, key: &BlobKey) -> Result<(), BlobStoreError> {
        let file_path = self.file_path_for(key);

        match tokio::fs::remove_file(&file_path).await {
            Ok(()) => {
                debug!(key = key.as_str(), "Deleted blob from local disk.");
                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(BlobStoreError::UnableToDelete {
                key: key.to_string(),
                error,
            }),
        }
    }
}



#[cfg(test)]
mod test {
    use super::*;

    fn sample_key() -> BlobKey {
        BlobKey::in_directory("category/image", "sample.png").unwrap()
    }

    #[tokio::test]
    async fn stores_checks_and_deletes_blobs() {
        let temporary_directory = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(temporary_directory.path());
        let key = sample_key();

        assert!(!store.exists(&key).await.unwrap());

        store
            .put(&key, Bytes::from_static(b"not really a png"))
            .await
            .unwrap();

        assert!(store.exists(&key).await.unwrap());

        let on_disk = std::fs::read(
            temporary_directory
                .path()
                .join("category")
                .join("image")
                .join("sample.png"),
        )
        .unwrap();
        assert_eq!(on_disk, b"not really a png");

        store.delete(&key).await.unwrap();
        assert!(!store.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_missing_blob_is_a_no_op() {
        let temporary_directory = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(temporary_directory.path());
        let key = sample_key();

        store.delete(&key).await.unwrap();
        store.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn directories_are_not_blobs() {
        let temporary_directory = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temporary_directory.path().join("category").join("image")).unwrap();

        let store = LocalBlobStore::new(temporary_directory.path());
        let directory_key = BlobKey::new("category/image").unwrap();

        assert!(!store.exists(&directory_key).await.unwrap());
    }

    #[tokio::test]
    async fn overwrites_existing_blob() {
        let temporary_directory = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(temporary_directory.path());
        let key = sample_key();

        store.put(&key, Bytes::from_static(b"first")).await.unwrap();
        store.put(&key, Bytes::from_static(b"second")).await.unwrap();

        let on_disk = std::fs::read(store.file_path_for(&key)).unwrap();
        assert_eq!(on_disk, b"second");
    }
}
