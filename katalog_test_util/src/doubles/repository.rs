use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use katalog_core::ids::CategoryId;
use katalog_database::{
    entities::{
        CategoryModel,
        CategoryRepository,
        CategorySummaryModel,
        CategoryValuesToUpdate,
        NewCategory,
    },
    QueryError,
    QueryResult,
};


/// The error returned by [`InMemoryCategoryRepository`] while write failures are enabled.
pub fn simulated_persistence_error() -> QueryError {
    QueryError::SqlxError {
        error: sqlx::Error::PoolTimedOut,
    }
}


#[derive(Default)]
struct StoredCategories {
    categories: BTreeMap<CategoryId, CategoryModel>,

    last_assigned_id: i64,
}


/// [`CategoryRepository`] backed by a map, with switchable write failures.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    stored: Mutex<StoredCategories>,

    fail_writes: AtomicBool,

    writes_match_no_rows: AtomicBool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// While enabled, `create`, `update` and `delete` return [`simulated_persistence_error`].
    pub fn set_fail_writes(&self, fail_writes: bool) {
        self.fail_writes.store(fail_writes, Ordering::SeqCst);
    }

    /// While enabled, `update` and `delete` act as if the category had been
    /// removed concurrently: they change nothing and report that no row matched.
    pub fn set_writes_match_no_rows(&self, writes_match_no_rows: bool) {
        self.writes_match_no_rows
            .store(writes_match_no_rows, Ordering::SeqCst);
    }

    /// Inserts a category directly, bypassing write failures.
    pub fn insert(&self, new_category: NewCategory) -> CategoryModel {
        let mut stored = self.stored.lock().expect("repository lock poisoned");

        stored.last_assigned_id += 1;
        let now = Utc::now();

        let category = CategoryModel {
            id: CategoryId::new(stored.last_assigned_id),
            title: new_category.title,
            description: new_category.description,
            image: new_category.image,
            status: new_category.status,
            created_at: now,
            last_modified_at: now,
        };

        stored.categories.insert(category.id, category.clone());

        category
    }

    pub fn get(&self, category_id: CategoryId) -> Option<CategoryModel> {
        self.stored
            .lock()
            .expect("repository lock poisoned")
            .categories
            .get(&category_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.stored
            .lock()
            .expect("repository lock poisoned")
            .categories
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writes_allowed(&self) -> QueryResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(simulated_persistence_error());
        }

        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_summaries(&self) -> QueryResult<Vec<CategorySummaryModel>> {
        let stored = self.stored.lock().expect("repository lock poisoned");

        Ok(stored
            .categories
            .values()
            .map(|category| CategorySummaryModel {
                id: category.id,
                title: category.title.clone(),
                description: category.description.clone(),
                image: category.image.clone(),
                status: category.status,
            })
            .collect())
    }

    async fn get_by_id(&self, category_id: CategoryId) -> QueryResult<Option<CategoryModel>> {
        Ok(self.get(category_id))
    }

    async fn create(&self, new_category: NewCategory) -> QueryResult<CategoryModel> {
        self.check_writes_allowed()?;

        Ok(self.insert(new_category))
    }

    async fn update(
        &self,
        category_id: CategoryId,
        values_to_update: CategoryValuesToUpdate,
    ) -> QueryResult<bool> {
        self.check_writes_allowed()?;

        if self.writes_match_no_rows.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let mut stored = self.stored.lock().expect("repository lock poisoned");

        let Some(category) = stored.categories.get_mut(&category_id) else {
            return Ok(false);
        };

        if let Some(title) = values_to_update.title {
            category.title = title;
        }

        if let Some(description) = values_to_update.description {
            category.description = description;
        }

        if let Some(status) = values_to_update.status {
            category.status = status;
        }

        if let Some(image) = values_to_update.image {
            category.image = image;
        }

        category.last_modified_at = Utc::now();

        Ok(true)
    }

    async fn delete(&self, category_id: CategoryId) -> QueryResult<bool> {
        self.check_writes_allowed()?;

        if self.writes_match_no_rows.load(Ordering::SeqCst) {
            return Ok(false);
        }

        let mut stored = self.stored.lock().expect("repository lock poisoned");

        Ok(stored.categories.remove(&category_id).is_some())
    }
}
