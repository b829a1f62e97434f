use std::{borrow::Cow, io, path::PathBuf};

use thiserror::Error;


#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("invalid blob key \"{}\": {}", .key, .reason)]
    InvalidKey {
        key: String,
        reason: Cow<'static, str>,
    },

    #[error("unable to check whether blob {} exists", .key)]
    UnableToCheckExistence {
        key: String,

        #[source]
        error: io::Error,
    },

    #[error("unable to create blob directory {}", .directory_path.display())]
    UnableToCreateDirectory {
        directory_path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("unable to write blob {}", .key)]
    UnableToWrite {
        key: String,

        #[source]
        error: io::Error,
    },

    #[error("unable to delete blob {}", .key)]
    UnableToDelete {
        key: String,

        #[source]
        error: io::Error,
    },
}

impl BlobStoreError {
    pub fn invalid_key<K, R>(key: K, reason: R) -> Self
    where
        K: Into<String>,
        R: Into<Cow<'static, str>>,
    {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
