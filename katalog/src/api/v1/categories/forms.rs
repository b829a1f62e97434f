use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use bytes::Bytes;
use katalog_core::api_models::CategoryErrorReason;

use crate::{
    api::errors::EndpointError,
    categories::{CreateCategoryInput, UpdateCategoryInput, UploadedImage},
};


/// Multipart form accepted by `POST /categories`.
///
/// Every field is optional at the extractor level so that missing fields
/// can be answered with a category error reason instead of a bare `400`.
#[derive(MultipartForm)]
pub struct CategoryCreationForm {
    pub title: Option<Text<String>>,

    pub description: Option<Text<String>>,

    pub status: Option<Text<String>>,

    pub image: Option<TempFile>,
}

impl CategoryCreationForm {
    pub async fn into_input(self) -> Result<CreateCategoryInput, EndpointError> {
        let title = required_text_field("title", self.title)
            .map_err(EndpointError::invalid_category_form)?;

        let description = required_text_field("description", self.description)
            .map_err(EndpointError::invalid_category_form)?;

        let status = optional_status_field(self.status)
            .map_err(EndpointError::invalid_category_form)?
            .unwrap_or(true);

        let Some(image_file) = self.image.filter(is_file_upload) else {
            return Err(EndpointError::invalid_category_form(
                CategoryErrorReason::missing_image_file(),
            ));
        };

        let image = read_uploaded_image(image_file).await?;


        Ok(CreateCategoryInput {
            title,
            description,
            status,
            image,
        })
    }
}



/// Multipart form accepted by `PUT`/`PATCH /categories/{category_id}`.
///
/// `image` may also arrive as a plain text field (the current file name echoed
/// back by a client); only an actual file upload replaces the image.
#[derive(MultipartForm)]
pub struct CategoryUpdateForm {
    pub title: Option<Text<String>>,

    pub description: Option<Text<String>>,

    pub status: Option<Text<String>>,

    pub image: Option<TempFile>,
}

impl CategoryUpdateForm {
    pub async fn into_input(self) -> Result<UpdateCategoryInput, EndpointError> {
        let title = required_text_field("title", self.title)
            .map_err(EndpointError::invalid_category_form)?;

        let description = required_text_field("description", self.description)
            .map_err(EndpointError::invalid_category_form)?;

        let status =
            optional_status_field(self.status).map_err(EndpointError::invalid_category_form)?;

        let image = match self.image.filter(is_file_upload) {
            Some(image_file) => Some(read_uploaded_image(image_file).await?),
            None => None,
        };


        Ok(UpdateCategoryInput {
            title,
            description,
            status,
            image,
        })
    }
}



/// The value is kept as submitted; trimming is only used to reject blank values.
fn required_text_field(
    field_name: &'static str,
    field: Option<Text<String>>,
) -> Result<String, CategoryErrorReason> {
    let Some(Text(value)) = field else {
        return Err(CategoryErrorReason::missing_field(field_name));
    };

    if value.trim().is_empty() {
        return Err(CategoryErrorReason::empty_field(field_name));
    }

    Ok(value)
}

/// An empty `status` field counts as not provided.
fn optional_status_field(field: Option<Text<String>>) -> Result<Option<bool>, CategoryErrorReason> {
    let Some(Text(value)) = field else {
        return Ok(None);
    };

    if value.trim().is_empty() {
        return Ok(None);
    }

    match parse_status(&value) {
        Some(status) => Ok(Some(status)),
        None => Err(CategoryErrorReason::invalid_status(value)),
    }
}

/// Parses the usual HTML-form spellings of a boolean (case-insensitive).
pub fn parse_status(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Only parts that came with a non-empty file name are file uploads.
fn is_file_upload(file: &TempFile) -> bool {
    file.file_name
        .as_deref()
        .is_some_and(|file_name| !file_name.is_empty())
}

async fn read_uploaded_image(file: TempFile) -> Result<UploadedImage, EndpointError> {
    let original_file_name = file.file_name.unwrap_or_default();

    let contents = tokio::fs::read(file.file.path())
        .await
        .map_err(|error| EndpointError::UnableToReadUploadedFile { error })?;

    Ok(UploadedImage {
        original_file_name,
        contents: Bytes::from(contents),
    })
}



#[cfg(test)]
mod test {
    use super::*;

    fn text(value: &str) -> Option<Text<String>> {
        Some(Text(value.to_string()))
    }

    #[test]
    fn parses_form_booleans() {
        for truthy in ["1", "true", "TRUE", "on", "Yes", " 1 "] {
            assert_eq!(parse_status(truthy), Some(true), "{truthy}");
        }

        for falsy in ["0", "false", "Off", "no"] {
            assert_eq!(parse_status(falsy), Some(false), "{falsy}");
        }

        assert_eq!(parse_status("maybe"), None);
        assert_eq!(parse_status("2"), None);
    }

    #[test]
    fn required_fields_must_be_present_and_non_blank() {
        assert_eq!(
            required_text_field("title", None),
            Err(CategoryErrorReason::missing_field("title"))
        );
        assert_eq!(
            required_text_field("title", text("   ")),
            Err(CategoryErrorReason::empty_field("title"))
        );
        assert_eq!(
            required_text_field("title", text(" Shoes ")),
            Ok(" Shoes ".to_string())
        );
    }

    #[test]
    fn blank_status_counts_as_absent() {
        assert_eq!(optional_status_field(None), Ok(None));
        assert_eq!(optional_status_field(text("")), Ok(None));
        assert_eq!(optional_status_field(text("off")), Ok(Some(false)));
        assert_eq!(
            optional_status_field(text("sometimes")),
            Err(CategoryErrorReason::invalid_status(
                "sometimes".to_string()
            ))
        );
    }
}
