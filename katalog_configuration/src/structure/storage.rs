use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{base_paths::create_directory_if_missing, BasePathsConfiguration};
use crate::{
    traits::TryResolveWithContext,
    utilities::replace_placeholders_in_path,
    MissingDirectoryCreationError,
    StorageConfigurationError,
};


fn default_serve_public_disk() -> bool {
    true
}


#[derive(Debug, Deserialize)]
pub(super) struct UnresolvedStorageConfiguration {
    public_disk_directory_path: String,

    maximum_upload_size_bytes: usize,

    #[serde(default = "default_serve_public_disk")]
    serve_public_disk: bool,
}


/// Configuration of the public disk, i.e. the directory uploaded images are stored in.
#[derive(Debug, Clone)]
pub struct StorageConfiguration {
    /// Root directory of the public disk.
    /// Category images end up in `{this}/category/image`.
    pub public_disk_directory_path: PathBuf,

    /// Maximum size of an entire multipart request body.
    pub maximum_upload_size_bytes: usize,

    /// Whether to serve the contents of the public disk under `/storage`.
    pub serve_public_disk: bool,
}


impl<'r> TryResolveWithContext<'r> for UnresolvedStorageConfiguration {
    type Resolved = StorageConfiguration;
    type Context = &'r BasePathsConfiguration;
    type Error = StorageConfigurationError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        if self.maximum_upload_size_bytes == 0 {
            return Err(StorageConfigurationError::ZeroMaximumUploadSize);
        }

        let public_disk_directory_path = replace_placeholders_in_path(
            Path::new(&self.public_disk_directory_path),
            context.placeholders(),
        );

        Ok(Self::Resolved {
            public_disk_directory_path,
            maximum_upload_size_bytes: self.maximum_upload_size_bytes,
            serve_public_disk: self.serve_public_disk,
        })
    }
}

impl StorageConfiguration {
    pub fn create_public_disk_directory_if_missing(
        &self,
    ) -> Result<(), MissingDirectoryCreationError> {
        create_directory_if_missing(&self.public_disk_directory_path)
    }
}
