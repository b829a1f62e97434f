use chrono::{DateTime, Utc};
use katalog_core::ids::CategoryId;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::{CategoryModel, InternalCategoryModel};
use crate::{IntoExternalModel, QueryError, QueryResult};


/// Values of a category that is about to be inserted.
///
/// These are exactly the columns a caller is allowed to write on creation;
/// the ID and timestamps are assigned by the database layer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewCategory {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub status: bool,
}



/// Values of an existing category to update. `None` fields are left untouched.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CategoryValuesToUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,

    /// `None` leaves the image as is, `Some(None)` clears it.
    pub image: Option<Option<String>>,
}

impl CategoryValuesToUpdate {
    pub fn has_any_values_to_update(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.image.is_some()
    }
}


fn build_category_update_query(
    category_id: CategoryId,
    values_to_update: CategoryValuesToUpdate,
    last_modified_at: DateTime<Utc>,
) -> QueryBuilder<'static, Postgres> {
    let mut update_query_builder = QueryBuilder::new("UPDATE katalog.category SET ");

    let mut separated_set_expressions = update_query_builder.separated(", ");

    separated_set_expressions.push("last_modified_at = ");
    separated_set_expressions.push_bind_unseparated(last_modified_at);

    if let Some(new_title) = values_to_update.title {
        separated_set_expressions.push("title = ");
        separated_set_expressions.push_bind_unseparated(new_title);
    }

    if let Some(new_description) = values_to_update.description {
        separated_set_expressions.push("description = ");
        separated_set_expressions.push_bind_unseparated(new_description);
    }

    if let Some(new_status) = values_to_update.status {
        separated_set_expressions.push("status = ");
        separated_set_expressions.push_bind_unseparated(new_status);
    }

    if let Some(new_image) = values_to_update.image {
        separated_set_expressions.push("image = ");
        separated_set_expressions.push_bind_unseparated(new_image);
    }


    update_query_builder.push(" WHERE id = ");
    update_query_builder.push_bind(category_id.into_inner());

    update_query_builder
}




pub struct CategoryMutation;

impl CategoryMutation {
    pub async fn create(
        database_connection: &mut PgConnection,
        new_category: NewCategory,
    ) -> QueryResult<CategoryModel> {
        let new_category_created_at = Utc::now();
        let new_category_last_modified_at = new_category_created_at;

        let newly_created_category = sqlx::query_as::<_, InternalCategoryModel>(
            "INSERT INTO katalog.category \
                (title, description, image, status, \
                 created_at, last_modified_at) \
                VALUES ($1, $2, $3, $4, $5, $6) \
                RETURNING \
                    id, title, description, image, status, \
                    created_at, last_modified_at",
        )
        .bind(new_category.title)
        .bind(new_category.description)
        .bind(new_category.image)
        .bind(new_category.status)
        .bind(new_category_created_at)
        .bind(new_category_last_modified_at)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_category.into_external_model())
    }


    /// Returns `false` if no category with the given ID exists.
    pub async fn update(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
        category_values_to_update: CategoryValuesToUpdate,
    ) -> QueryResult<bool> {
        if !category_values_to_update.has_any_values_to_update() {
            return Ok(true);
        }


        let mut update_query_builder =
            build_category_update_query(category_id, category_values_to_update, Utc::now());

        let query_result = update_query_builder
            .build()
            .execute(database_connection)
            .await?;


        Ok(query_result.rows_affected() == 1)
    }

    /// Returns `false` if no category with the given ID exists.
    pub async fn delete(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM katalog.category \
                WHERE id = $1",
        )
        .bind(category_id.into_inner())
        .execute(database_connection)
        .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "attempted to delete a category by ID, but more than one row matched",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}



#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn update_query_only_sets_provided_columns() {
        let last_modified_at = Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap();

        let query_builder = build_category_update_query(
            CategoryId::new(5),
            CategoryValuesToUpdate {
                title: Some("Chairs".to_string()),
                image: Some(Some("0a1b.png".to_string())),
                ..Default::default()
            },
            last_modified_at,
        );

        assert_eq!(
            query_builder.sql(),
            "UPDATE katalog.category SET last_modified_at = $1, title = $2, image = $3 WHERE id = $4"
        );
    }

    #[test]
    fn empty_update_has_nothing_to_update() {
        assert!(!CategoryValuesToUpdate::default().has_any_values_to_update());

        assert!(CategoryValuesToUpdate {
            status: Some(false),
            ..Default::default()
        }
        .has_any_values_to_update());
    }
}
