use bytes::Bytes;


/// An uploaded file, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// File name as reported by the client. Only its extension is ever used.
    pub original_file_name: String,

    pub contents: Bytes,
}


/// Validated input for creating a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCategoryInput {
    pub title: String,

    pub description: String,

    pub status: bool,

    /// Creating a category always requires an image.
    pub image: UploadedImage,
}


/// Validated input for updating a category.
///
/// `title` and `description` are always overwritten; `status` only if provided.
/// A new `image` replaces (and removes) the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateCategoryInput {
    pub title: String,

    pub description: String,

    pub status: Option<bool>,

    pub image: Option<UploadedImage>,
}
