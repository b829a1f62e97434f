//! HTTP API of the category administration backend.

use std::future::{ready, Ready};

use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{http::header, web, FromRequest, HttpRequest, Scope};
use chrono::{DateTime, SubsecRound, Utc};

use self::v1::v1_api_router;
use crate::state::ApplicationState;

pub mod errors;
pub mod traits;
pub mod v1;


/// Extractor for the optional `If-Modified-Since` request header.
///
/// HTTP dates have a resolution of one second, so all comparisons
/// ignore sub-second precision.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OptionalIfModifiedSince {
    Unspecified,
    Specified(DateTime<Utc>),
}

impl OptionalIfModifiedSince {
    #[inline]
    fn new_unspecified() -> Self {
        Self::Unspecified
    }

    #[inline]
    fn new_specified(date_time: DateTime<Utc>) -> Self {
        Self::Specified(date_time.trunc_subsecs(0))
    }

    /// Returns `true` if the header was provided and the resource
    /// has not been modified since that time.
    #[inline]
    pub fn enabled_and_has_not_changed_since(
        &self,
        real_last_modification_time: &DateTime<Utc>,
    ) -> bool {
        match self {
            OptionalIfModifiedSince::Unspecified => false,
            OptionalIfModifiedSince::Specified(user_provided_conditional_time) => {
                let real_modification_time_no_frac = real_last_modification_time.trunc_subsecs(0);

                *user_provided_conditional_time >= real_modification_time_no_frac
            }
        }
    }
}

impl FromRequest for OptionalIfModifiedSince {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(if_modified_header_value) = req.headers().get(header::IF_MODIFIED_SINCE) else {
            return ready(Ok(Self::new_unspecified()));
        };

        let Ok(if_modified_header_value) = if_modified_header_value.to_str() else {
            return ready(Err(actix_web::error::ParseError::Header.into()));
        };

        let Ok(parsed_date_time) = httpdate::parse_http_date(if_modified_header_value) else {
            return ready(Err(actix_web::error::ParseError::Header.into()));
        };

        ready(Ok(Self::new_specified(parsed_date_time.into())))
    }
}



/// Router for the entire public API.
///
/// Lives under the `/api` path and is made up of `/v1` and its sub-routes.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("/api")
        .service(v1_api_router())
}


/// Registers the application state, the multipart upload limits, the API router
/// and (if enabled) the public disk under `/storage`.
///
/// Used both by the server binary and by in-process tests, which is why
/// middleware is left to the caller.
pub fn configure_application(service_config: &mut web::ServiceConfig, state: ApplicationState) {
    let multipart_form_config = MultipartFormConfig::default()
        .total_limit(state.configuration.storage.maximum_upload_size_bytes);

    let public_disk = state
        .configuration
        .storage
        .serve_public_disk
        .then(|| state.configuration.storage.public_disk_directory_path.clone());


    service_config
        .app_data(multipart_form_config)
        .app_data(state)
        .service(api_router());

    if let Some(public_disk_directory_path) = public_disk {
        service_config.service(Files::new("/storage", public_disk_directory_path));
    }
}



#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn if_modified_since_ignores_subsecond_precision() {
        let header_time = Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap();
        let condition = OptionalIfModifiedSince::new_specified(header_time);

        let modified_within_same_second = header_time + chrono::Duration::milliseconds(400);
        let modified_later = header_time + chrono::Duration::seconds(2);

        assert!(condition.enabled_and_has_not_changed_since(&modified_within_same_second));
        assert!(!condition.enabled_and_has_not_changed_since(&modified_later));
        assert!(!OptionalIfModifiedSince::Unspecified
            .enabled_and_has_not_changed_since(&modified_within_same_second));
    }
}
