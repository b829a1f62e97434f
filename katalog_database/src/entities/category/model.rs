use chrono::{DateTime, Utc};
use katalog_core::ids::CategoryId;

use crate::IntoExternalModel;


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CategoryModel {
    pub id: CategoryId,

    pub title: String,

    pub description: String,

    /// Generated filename of the image blob (without the `category/image/` prefix).
    pub image: Option<String>,

    pub status: bool,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


/// Only the columns that category listings are allowed to expose.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CategorySummaryModel {
    pub id: CategoryId,

    pub title: String,

    pub description: String,

    pub image: Option<String>,

    pub status: bool,
}



#[derive(sqlx::FromRow)]
pub(crate) struct InternalCategoryModel {
    pub(crate) id: i64,

    pub(crate) title: String,

    pub(crate) description: String,

    pub(crate) image: Option<String>,

    pub(crate) status: bool,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalCategoryModel {
    type ExternalModel = CategoryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: CategoryId::new(self.id),
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


#[derive(sqlx::FromRow)]
pub(crate) struct InternalCategorySummaryModel {
    pub(crate) id: i64,

    pub(crate) title: String,

    pub(crate) description: String,

    pub(crate) image: Option<String>,

    pub(crate) status: bool,
}

impl IntoExternalModel for InternalCategorySummaryModel {
    type ExternalModel = CategorySummaryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: CategoryId::new(self.id),
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status,
        }
    }
}
