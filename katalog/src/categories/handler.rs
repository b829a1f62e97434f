use std::sync::Arc;

use katalog_core::{
    api_models::{CategoryResponse, CategorySummary},
    ids::CategoryId,
};
use katalog_database::{
    entities::{CategoryModel, CategoryRepository, CategoryValuesToUpdate, NewCategory},
    QueryResult,
};
use katalog_storage::{generate_random_file_name, BlobKey, BlobStore, BlobStoreError};
use tracing::{debug, info, warn};

use super::{
    CategoryOperation,
    CategoryOperationError,
    CreateCategoryInput,
    OperationFailureSink,
    UpdateCategoryInput,
    UploadedImage,
};
use crate::{api::traits::IntoApiModel, logging::error_chain_message};


/// Directory on the public disk that holds all category images.
pub const CATEGORY_IMAGE_DIRECTORY: &str = "category/image";

/// Returns the blob key of a category image with the given (generated) file name.
pub fn category_image_key(image_file_name: &str) -> Result<BlobKey, BlobStoreError> {
    BlobKey::in_directory(CATEGORY_IMAGE_DIRECTORY, image_file_name)
}



/// Result of a category mutation.
///
/// Failures have already been reported to the failure sink by the time
/// this is returned; only the generic message is left for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMutationOutcome {
    pub operation: CategoryOperation,

    pub succeeded: bool,
}

impl CategoryMutationOutcome {
    #[inline]
    const fn success(operation: CategoryOperation) -> Self {
        Self {
            operation,
            succeeded: true,
        }
    }

    #[inline]
    const fn failure(operation: CategoryOperation) -> Self {
        Self {
            operation,
            succeeded: false,
        }
    }

    /// The human-readable message to send back to the API caller.
    pub const fn message(&self) -> &'static str {
        if self.succeeded {
            self.operation.success_message()
        } else {
            self.operation.failure_message()
        }
    }
}



/// Coordinates the category persistence store and the image blob store.
///
/// Blob and record writes are two separate steps without a transaction
/// between them. If the second step fails, the first one is not undone.
pub struct CategoryResourceHandler {
    repository: Arc<dyn CategoryRepository>,

    blob_store: Arc<dyn BlobStore>,

    failure_sink: Arc<dyn OperationFailureSink>,
}

impl CategoryResourceHandler {
    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        blob_store: Arc<dyn BlobStore>,
        failure_sink: Arc<dyn OperationFailureSink>,
    ) -> Self {
        Self {
            repository,
            blob_store,
            failure_sink,
        }
    }

    pub async fn list(&self) -> QueryResult<Vec<CategorySummary>> {
        let summaries = self.repository.list_summaries().await?;

        Ok(summaries
            .into_iter()
            .map(IntoApiModel::into_api_model)
            .collect())
    }

    /// Looks up a category so it can be passed to
    /// [`Self::show`], [`Self::update`] or [`Self::delete`].
    pub async fn find(&self, category_id: CategoryId) -> QueryResult<Option<CategoryModel>> {
        self.repository.get_by_id(category_id).await
    }

    pub fn show(&self, category: CategoryModel) -> CategoryResponse {
        CategoryResponse {
            category: category.into_api_model(),
        }
    }

    pub async fn create(&self, input: CreateCategoryInput) -> CategoryMutationOutcome {
        match self.try_create(input).await {
            Ok(category) => {
                info!(
                    category_id = %category.id,
                    image = category.image.as_deref().unwrap_or_default(),
                    "Category created."
                );

                CategoryMutationOutcome::success(CategoryOperation::Create)
            }
            Err(error) => self.report_failure(CategoryOperation::Create, error),
        }
    }

    pub async fn update(
        &self,
        category: CategoryModel,
        input: UpdateCategoryInput,
    ) -> CategoryMutationOutcome {
        let category_id = category.id;

        match self.try_update(category, input).await {
            Ok(()) => {
                info!(category_id = %category_id, "Category updated.");

                CategoryMutationOutcome::success(CategoryOperation::Update)
            }
            Err(error) => self.report_failure(CategoryOperation::Update, error),
        }
    }

    pub async fn delete(&self, category: CategoryModel) -> CategoryMutationOutcome {
        let category_id = category.id;

        match self.try_delete(category).await {
            Ok(()) => {
                info!(category_id = %category_id, "Category deleted.");

                CategoryMutationOutcome::success(CategoryOperation::Delete)
            }
            Err(error) => self.report_failure(CategoryOperation::Delete, error),
        }
    }


    async fn try_create(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryModel, CategoryOperationError> {
        let image_file_name = self.store_image(input.image).await?;

        let new_category = self
            .repository
            .create(NewCategory {
                title: input.title,
                description: input.description,
                image: Some(image_file_name),
                status: input.status,
            })
            .await?;

        Ok(new_category)
    }

    async fn try_update(
        &self,
        category: CategoryModel,
        input: UpdateCategoryInput,
    ) -> Result<(), CategoryOperationError> {
        let fields_updated = self
            .repository
            .update(
                category.id,
                CategoryValuesToUpdate {
                    title: Some(input.title),
                    description: Some(input.description),
                    status: input.status,
                    image: None,
                },
            )
            .await?;

        if !fields_updated {
            return Err(CategoryOperationError::CategoryNoLongerExists {
                category_id: category.id,
            });
        }


        let Some(new_image) = input.image else {
            return Ok(());
        };

        if let Some(previous_image_file_name) = category.image.as_deref() {
            self.remove_image_if_present(previous_image_file_name)
                .await?;
        }

        let new_image_file_name = self.store_image(new_image).await?;

        let image_updated = self
            .repository
            .update(
                category.id,
                CategoryValuesToUpdate {
                    image: Some(Some(new_image_file_name)),
                    ..Default::default()
                },
            )
            .await?;

        if !image_updated {
            return Err(CategoryOperationError::CategoryNoLongerExists {
                category_id: category.id,
            });
        }

        Ok(())
    }

    async fn try_delete(&self, category: CategoryModel) -> Result<(), CategoryOperationError> {
        if let Some(image_file_name) = category.image.as_deref() {
            self.remove_image_if_present(image_file_name).await?;
        }

        let deleted = self.repository.delete(category.id).await?;
        if !deleted {
            warn!(
                category_id = %category.id,
                "Category was already gone when attempting to delete it."
            );
        }

        Ok(())
    }


    /// Stores the image under a freshly generated name and returns that name.
    async fn store_image(&self, image: UploadedImage) -> Result<String, CategoryOperationError> {
        let image_file_name = generate_random_file_name(&image.original_file_name);
        let image_key = category_image_key(&image_file_name)?;

        self.blob_store.put(&image_key, image.contents).await?;

        debug!(
            key = %image_key,
            original_file_name = %image.original_file_name,
            "Stored category image."
        );

        Ok(image_file_name)
    }

    async fn remove_image_if_present(
        &self,
        image_file_name: &str,
    ) -> Result<(), CategoryOperationError> {
        let image_key = category_image_key(image_file_name)?;

        if self.blob_store.exists(&image_key).await? {
            self.blob_store.delete(&image_key).await?;
            debug!(key = %image_key, "Removed category image.");
        }

        Ok(())
    }

    fn report_failure(
        &self,
        operation: CategoryOperation,
        error: CategoryOperationError,
    ) -> CategoryMutationOutcome {
        let message = error_chain_message(&error);
        self.failure_sink.record_failure(operation, &message);

        CategoryMutationOutcome::failure(operation)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_image_keys_live_under_the_image_directory() {
        let key = category_image_key("0123abcd.png").unwrap();
        assert_eq!(key.as_str(), "category/image/0123abcd.png");

        assert!(category_image_key("../escape.png").is_err());
        assert!(category_image_key("").is_err());
    }

    #[test]
    fn outcome_messages_follow_the_operation() {
        assert_eq!(
            CategoryMutationOutcome::success(CategoryOperation::Create).message(),
            "Category Created Successfully!!"
        );
        assert_eq!(
            CategoryMutationOutcome::failure(CategoryOperation::Update).message(),
            "Something goes wrong while updating a category!!"
        );
        assert_eq!(
            CategoryMutationOutcome::failure(CategoryOperation::Delete).message(),
            "Something goes wrong while deleting a category!!"
        );
    }
}
