use katalog_core::ids::CategoryId;
use sqlx::PgConnection;

use super::{
    CategoryModel,
    CategorySummaryModel,
    InternalCategoryModel,
    InternalCategorySummaryModel,
};
use crate::{IntoExternalModel, QueryResult};


pub struct CategoryQuery;

impl CategoryQuery {
    pub async fn get_all_category_summaries(
        database_connection: &mut PgConnection,
    ) -> QueryResult<Vec<CategorySummaryModel>> {
        let internal_summaries = sqlx::query_as::<_, InternalCategorySummaryModel>(
            "SELECT \
                    id, title, description, image, status \
                FROM katalog.category \
                ORDER BY id ASC",
        )
        .fetch_all(database_connection)
        .await?;

        Ok(internal_summaries
            .into_iter()
            .map(InternalCategorySummaryModel::into_external_model)
            .collect())
    }

    pub async fn get_by_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<Option<CategoryModel>> {
        let internal_category = sqlx::query_as::<_, InternalCategoryModel>(
            "SELECT \
                    id, title, description, image, status, \
                    created_at, last_modified_at \
                FROM katalog.category \
                WHERE id = $1",
        )
        .bind(category_id.into_inner())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_category.map(InternalCategoryModel::into_external_model))
    }
}
