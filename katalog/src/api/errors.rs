//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.

use std::borrow::Cow;
use std::num::ParseIntError;
use std::time::SystemTime;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use katalog_core::api_models::{CategoryErrorReason, ErrorReason, ErrorResponseWithReason};
use katalog_core::ids::CategoryId;
use katalog_database::QueryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::logging::error_chain_message;


/// Formats a timestamp as an HTTP date, for use in the `Last-Modified` header.
pub fn construct_last_modified_header_value(last_modified_at: &DateTime<Utc>) -> HeaderValue {
    let http_date = httpdate::fmt_http_date(SystemTime::from(*last_modified_at));

    // PANIC SAFETY: HTTP dates only ever contain visible ASCII characters.
    HeaderValue::from_str(&http_date).unwrap()
}



/// General-purpose API error type.
///
/// Use this type alongside an [`EndpointResult`] return type in your actix endpoint handlers
/// to be able to `?`-return errors and have them automatically converted into
/// HTTP 4xx and 5xx responses (see the [`ResponseError`] implementation below).
///
/// Client errors are answered with an [`ErrorResponseWithReason`] body.
/// Server errors are logged and answered with an empty `500 Internal Server Error`;
/// their details never leak through the API.
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     */
    /// The category ID in the URL is not an integer.
    #[error("invalid category ID")]
    InvalidCategoryId {
        #[source]
        error: ParseIntError,
    },

    #[error("category {} does not exist", .category_id)]
    CategoryNotFound { category_id: CategoryId },

    /// The submitted category form did not pass validation.
    #[error("invalid category form: {:?}", .reason)]
    InvalidCategoryForm { reason: CategoryErrorReason },

    /*
     * Server errors.
     */
    #[error("unable to read uploaded file")]
    UnableToReadUploadedFile {
        #[source]
        error: std::io::Error,
    },

    /// Internal error with a string reason.
    #[error("internal server error: {}", .reason)]
    InternalErrorWithReason { reason: Cow<'static, str> },

    /// Internal error, constructed from a boxed [`Error`][std::error::Error].
    #[error("internal server error")]
    InternalGenericError {
        #[from]
        #[source]
        error: Box<dyn std::error::Error>,
    },

    /// Internal error, constructed from a [`sqlx::Error`].
    #[error("internal database error")]
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}

impl EndpointError {
    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    #[inline]
    pub const fn invalid_category_form(reason: CategoryErrorReason) -> Self {
        Self::InvalidCategoryForm { reason }
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCategoryId { .. } => StatusCode::BAD_REQUEST,
            Self::CategoryNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidCategoryForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnableToReadUploadedFile { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let fallibly_built_response = match self {
            Self::InvalidCategoryId { .. } => EndpointResponseBuilder::bad_request()
                .with_error_reason(CategoryErrorReason::invalid_category_id())
                .build(),
            Self::CategoryNotFound { .. } => EndpointResponseBuilder::not_found()
                .with_error_reason(CategoryErrorReason::category_not_found())
                .build(),
            Self::InvalidCategoryForm { reason } => EndpointResponseBuilder::unprocessable_entity()
                .with_error_reason(reason.clone())
                .build(),
            Self::UnableToReadUploadedFile { .. }
            | Self::InternalErrorWithReason { .. }
            | Self::InternalGenericError { .. }
            | Self::InternalDatabaseError { .. } => {
                error!(
                    error = %error_chain_message(self),
                    "Responding with an internal server error."
                );

                EndpointResponseBuilder::internal_server_error().build()
            }
        };

        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::InternalErrorWithReason { reason: problem }
            }
        }
    }
}




pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    #[inline]
    pub fn not_modified() -> Self {
        Self::new(StatusCode::NOT_MODIFIED)
    }

    #[inline]
    pub fn unprocessable_entity() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY)
    }

    #[inline]
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_json_body<S>(mut self, data: S) -> Self
    where
        S: Serialize,
    {
        let body = serde_json::to_vec(&data);

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn with_error_reason<R>(self, reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        self.with_json_body(ErrorResponseWithReason::new(reason))
    }

    pub fn with_last_modified_at(mut self, last_modified_at: &DateTime<Utc>) -> Self {
        self.additional_headers.push((
            header::LAST_MODIFIED,
            construct_last_modified_header_value(last_modified_at),
        ));

        Self {
            status_code: self.status_code,
            body: self.body,
            additional_headers: self.additional_headers,
        }
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            Some(body) => response_builder
                .message_body(body.boxed())
                // Never fails, `Vec<u8>` has `type Error = Infallible`.
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                .map_err(EndpointError::internal_error),
        }
    }
}




/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`, intended to be used
/// as the return type of most endpoint functions.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;



#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn last_modified_header_is_an_http_date() {
        let time = Utc.with_ymd_and_hms(2024, 10, 19, 8, 30, 5).unwrap();

        assert_eq!(
            construct_last_modified_header_value(&time),
            "Sat, 19 Oct 2024 08:30:05 GMT"
        );
    }

    #[test]
    fn client_errors_map_to_their_status_codes() {
        let invalid_id = EndpointError::InvalidCategoryId {
            error: "abc".parse::<i64>().unwrap_err(),
        };
        assert_eq!(invalid_id.status_code(), StatusCode::BAD_REQUEST);

        let not_found = EndpointError::CategoryNotFound {
            category_id: CategoryId::new(4),
        };
        assert_eq!(
            not_found.error_response().status(),
            StatusCode::NOT_FOUND
        );

        let invalid_form =
            EndpointError::invalid_category_form(CategoryErrorReason::missing_image_file());
        assert_eq!(
            invalid_form.error_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[actix_web::test]
    async fn server_errors_do_not_leak_details() {
        let error = EndpointError::from(QueryError::database_inconsistency(
            "secret connection string",
        ));
        let response = error.error_response();

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
