use async_trait::async_trait;
use katalog_core::ids::CategoryId;
use sqlx::PgPool;

use super::{
    CategoryModel,
    CategoryMutation,
    CategoryQuery,
    CategorySummaryModel,
    CategoryValuesToUpdate,
    NewCategory,
};
use crate::QueryResult;


/// Category persistence, as seen by the category resource handler.
///
/// [`PgCategoryRepository`] is the implementation used by the server.
/// Each call runs on its own pooled connection; there is no transaction
/// spanning multiple calls.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_summaries(&self) -> QueryResult<Vec<CategorySummaryModel>>;

    async fn get_by_id(&self, category_id: CategoryId) -> QueryResult<Option<CategoryModel>>;

    async fn create(&self, new_category: NewCategory) -> QueryResult<CategoryModel>;

    /// Returns `false` if the category does not exist (anymore).
    async fn update(
        &self,
        category_id: CategoryId,
        values_to_update: CategoryValuesToUpdate,
    ) -> QueryResult<bool>;

    /// Returns `false` if the category does not exist (anymore).
    async fn delete(&self, category_id: CategoryId) -> QueryResult<bool>;
}



/// PostgreSQL-backed [`CategoryRepository`].
#[derive(Clone)]
pub struct PgCategoryRepository {
    database_pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(database_pool: PgPool) -> Self {
        Self { database_pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_summaries(&self) -> QueryResult<Vec<CategorySummaryModel>> {
        let mut database_connection = self.database_pool.acquire().await?;

        CategoryQuery::get_all_category_summaries(&mut database_connection).await
    }

    async fn get_by_id(&self, category_id: CategoryId) -> QueryResult<Option<CategoryModel>> {
        let mut database_connection = self.database_pool.acquire().await?;

        CategoryQuery::get_by_id(&mut database_connection, category_id).await
    }

    async fn create(&self, new_category: NewCategory) -> QueryResult<CategoryModel> {
        let mut database_connection = self.database_pool.acquire().await?;

        CategoryMutation::create(&mut database_connection, new_category).await
    }

    async fn update(
        &self,
        category_id: CategoryId,
        values_to_update: CategoryValuesToUpdate,
    ) -> QueryResult<bool> {
        let mut database_connection = self.database_pool.acquire().await?;

        CategoryMutation::update(
            &mut database_connection,
            category_id,
            values_to_update,
        )
        .await
    }

    async fn delete(&self, category_id: CategoryId) -> QueryResult<bool> {
        let mut database_connection = self.database_pool.acquire().await?;

        CategoryMutation::delete(&mut database_connection, category_id).await
    }
}
