use std::fmt::{Display, Formatter};

use crate::BlobStoreError;


/// A validated blob address: relative, `/`-separated, with no empty,
/// `.` or `..` segments and no backslashes.
///
/// Because of these rules a key can always be safely joined onto a storage root directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlobKey(String);

impl BlobKey {
    pub fn new<K>(key: K) -> Result<Self, BlobStoreError>
    where
        K: Into<String>,
    {
        let key: String = key.into();

        if key.is_empty() {
            return Err(BlobStoreError::invalid_key(key, "key is empty"));
        }

        if key.contains('\\') || key.contains('\0') {
            return Err(BlobStoreError::invalid_key(
                key,
                "key contains a forbidden character",
            ));
        }

        let has_invalid_segment = key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

        if has_invalid_segment {
            return Err(BlobStoreError::invalid_key(
                key,
                "key must be a relative path without empty, \".\" or \"..\" segments",
            ));
        }

        Ok(Self(key))
    }

    /// Builds the key `{directory}/{file_name}`.
    pub fn in_directory(directory: &str, file_name: &str) -> Result<Self, BlobStoreError> {
        Self::new(format!("{directory}/{file_name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the `/`-separated segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl Display for BlobKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_nested_relative_keys() {
        let key = BlobKey::in_directory("category/image", "abc.png").unwrap();

        assert_eq!(key.as_str(), "category/image/abc.png");
        assert_eq!(
            key.segments().collect::<Vec<_>>(),
            vec!["category", "image", "abc.png"]
        );
    }

    #[test]
    fn rejects_keys_that_could_escape_the_root() {
        assert!(BlobKey::new("").is_err());
        assert!(BlobKey::new("/etc/passwd").is_err());
        assert!(BlobKey::new("category/../../secret").is_err());
        assert!(BlobKey::new("category//image").is_err());
        assert!(BlobKey::new("category/./image").is_err());
        assert!(BlobKey::new("category\\image").is_err());
        assert!(BlobKey::in_directory("category/image", "").is_err());
    }
}
