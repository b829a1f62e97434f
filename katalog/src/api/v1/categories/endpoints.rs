use std::str::FromStr;

use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, http::StatusCode, post, route, web};
use katalog_core::{api_models::CategoryMessageResponse, ids::CategoryId};
use katalog_database::entities::CategoryModel;

use super::{CategoryCreationForm, CategoryUpdateForm};
use crate::{
    api::{
        errors::{EndpointError, EndpointResponseBuilder, EndpointResult},
        OptionalIfModifiedSince,
    },
    categories::{CategoryMutationOutcome, CategoryOperation},
    state::{ApplicationState, ApplicationStateInner},
};


pub fn parse_category_id(raw_category_id: &str) -> Result<CategoryId, EndpointError> {
    CategoryId::from_str(raw_category_id)
        .map_err(|error| EndpointError::InvalidCategoryId { error })
}

/// Parses the category ID from the URL and loads the category,
/// failing with a `404` if it does not exist.
async fn resolve_category(
    state: &ApplicationStateInner,
    raw_category_id: &str,
) -> Result<CategoryModel, EndpointError> {
    let category_id = parse_category_id(raw_category_id)?;

    state
        .categories
        .find(category_id)
        .await?
        .ok_or(EndpointError::CategoryNotFound { category_id })
}

/// Builds the `{"message": ...}` response of a category mutation.
///
/// Failed deletions answer with `200 OK` unless
/// `categories.report_delete_failures_as_server_error` is enabled.
fn mutation_response(
    state: &ApplicationStateInner,
    outcome: CategoryMutationOutcome,
) -> EndpointResult {
    let status_code = match (outcome.succeeded, outcome.operation) {
        (true, _) => StatusCode::OK,
        (false, CategoryOperation::Delete)
            if !state
                .configuration
                .categories
                .report_delete_failures_as_server_error =>
        {
            StatusCode::OK
        }
        (false, _) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    EndpointResponseBuilder::new(status_code)
        .with_json_body(CategoryMessageResponse::new(outcome.message()))
        .build()
}



/// List all categories
///
/// Answers with a JSON array of category summaries
/// (`id`, `title`, `description`, `image` and `status`).
#[get("")]
pub async fn get_all_categories(state: ApplicationState) -> EndpointResult {
    let categories = state.categories.list().await?;

    EndpointResponseBuilder::ok()
        .with_json_body(categories)
        .build()
}



/// Create a category
///
/// Expects a `multipart/form-data` body with the `title`, `description` and
/// (optional) `status` fields and an `image` file.
#[post("")]
pub async fn create_category(
    state: ApplicationState,
    form: MultipartForm<CategoryCreationForm>,
) -> EndpointResult {
    let input = form.into_inner().into_input().await?;

    let outcome = state.categories.create(input).await;

    mutation_response(&state, outcome)
}



/// Get a specific category
///
/// Supports conditional requests through `If-Modified-Since`.
#[get("/{category_id}")]
pub async fn get_specific_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    if_modified_since: OptionalIfModifiedSince,
) -> EndpointResult {
    let category = resolve_category(&state, &parameters.into_inner().0).await?;
    let last_modified_at = category.last_modified_at;

    if if_modified_since.enabled_and_has_not_changed_since(&last_modified_at) {
        return EndpointResponseBuilder::not_modified()
            .with_last_modified_at(&last_modified_at)
            .build();
    }


    EndpointResponseBuilder::ok()
        .with_json_body(state.categories.show(category))
        .with_last_modified_at(&last_modified_at)
        .build()
}



/// Update a category
///
/// Expects a `multipart/form-data` body with `title` and `description`,
/// and optionally `status` and a new `image` file.
#[route("/{category_id}", method = "PUT", method = "PATCH")]
pub async fn update_specific_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    form: MultipartForm<CategoryUpdateForm>,
) -> EndpointResult {
    let category = resolve_category(&state, &parameters.into_inner().0).await?;

    let input = form.into_inner().into_input().await?;

    let outcome = state.categories.update(category, input).await;

    mutation_response(&state, outcome)
}



/// Delete a category
///
/// Removes the category image (if any) and then the category itself.
#[delete("/{category_id}")]
pub async fn delete_specific_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let category = resolve_category(&state, &parameters.into_inner().0).await?;

    let outcome = state.categories.delete(category).await;

    mutation_response(&state, outcome)
}
