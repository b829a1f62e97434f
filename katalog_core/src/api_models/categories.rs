use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;


/// A complete category, as returned when requesting a specific category.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct Category {
    pub id: CategoryId,

    pub title: String,

    pub description: String,

    /// Generated filename of the category image, relative to `category/image/`
    /// on the public disk.
    pub image: Option<String>,

    pub status: bool,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


/// The subset of category fields exposed in category listings.
///
/// Deliberately does not include timestamps or anything else a category might gain.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
#[cfg_attr(
    feature = "serde_impls_for_client_on_models",
    serde(deny_unknown_fields)
)]
pub struct CategorySummary {
    pub id: CategoryId,

    pub title: String,

    pub description: String,

    pub image: Option<String>,

    pub status: bool,
}


#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Deserialize))]
pub struct CategoryResponse {
    pub category: Category,
}



/// Envelope returned by all category mutations, successful or not.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CategoryMessageResponse {
    pub message: String,
}

impl CategoryMessageResponse {
    pub const CREATED: &'static str = "Category Created Successfully!!";
    pub const CREATION_FAILED: &'static str = "Something goes wrong while creating a category!!";

    pub const UPDATED: &'static str = "Category Updated Successfully!!";
    pub const UPDATE_FAILED: &'static str = "Something goes wrong while updating a category!!";

    pub const DELETED: &'static str = "Category Deleted Successfully!!";
    pub const DELETION_FAILED: &'static str = "Something goes wrong while deleting a category!!";

    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
        }
    }
}
