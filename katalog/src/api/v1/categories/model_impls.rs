use katalog_core::api_models::{Category, CategorySummary};
use katalog_database::entities::{CategoryModel, CategorySummaryModel};

use crate::api::traits::IntoApiModel;


impl IntoApiModel for CategoryModel {
    type ApiModel = Category;

    fn into_api_model(self) -> Self::ApiModel {
        Self::ApiModel {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}

impl IntoApiModel for CategorySummaryModel {
    type ApiModel = CategorySummary;

    fn into_api_model(self) -> Self::ApiModel {
        Self::ApiModel {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status,
        }
    }
}
