use std::borrow::Cow;

use serde::{Deserialize, Serialize};



/// Pertains to all endpoints under `/categories`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "category-error-type")]
#[non_exhaustive]
pub enum CategoryErrorReason {
    #[serde(rename = "category-not-found")]
    CategoryNotFound,

    /// The category ID in the URL is not an integer.
    #[serde(rename = "invalid-category-id")]
    InvalidCategoryId,

    /*
     * Category creation/update errors
     */
    /// A required form field was not sent at all.
    #[serde(rename = "missing-field")]
    MissingField { field: Cow<'static, str> },

    /// A required text field was sent, but is empty (or only whitespace).
    #[serde(rename = "empty-field")]
    EmptyField { field: Cow<'static, str> },

    /// The `status` field could not be interpreted as a boolean.
    #[serde(rename = "invalid-status")]
    InvalidStatus { value: String },

    /// Creating a category requires an image file.
    #[serde(rename = "missing-image-file")]
    MissingImageFile,
}

impl CategoryErrorReason {
    pub const fn category_not_found() -> Self {
        Self::CategoryNotFound
    }

    pub const fn invalid_category_id() -> Self {
        Self::InvalidCategoryId
    }

    pub fn missing_field<F>(field: F) -> Self
    where
        F: Into<Cow<'static, str>>,
    {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn empty_field<F>(field: F) -> Self
    where
        F: Into<Cow<'static, str>>,
    {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn invalid_status(value: String) -> Self {
        // To avoid resending a huge chunk of data
        // if the "wrong" status value is something large.
        if value.len() > 120 {
            return Self::InvalidStatus {
                value: "[redacted]".to_string(),
            };
        }

        Self::InvalidStatus { value }
    }

    pub const fn missing_image_file() -> Self {
        Self::MissingImageFile
    }
}



#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "type", content = "data")]
#[non_exhaustive]
pub enum ErrorReason {
    /*
     * Category-related
     */
    #[serde(rename = "category")]
    Category(CategoryErrorReason),
}

impl From<CategoryErrorReason> for ErrorReason {
    fn from(value: CategoryErrorReason) -> Self {
        Self::Category(value)
    }
}



/// Simple JSON-encodable response containing a strongly-typed error reason
/// (see [`ErrorReason`]).
///
/// This is useful when responding with a HTTP status code
/// where the precise error reason is ambiguous.
/// For example, on a `422 Unprocessable Entity` we can use this to
/// specify which form field was at fault.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct ErrorResponseWithReason {
    pub reason: ErrorReason,
}

impl ErrorResponseWithReason {
    pub fn new<R>(reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        Self {
            reason: reason.into(),
        }
    }
}
