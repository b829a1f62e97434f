pub use actix_web::http::{header, Method, StatusCode};
pub use katalog_core::api_models::*;
pub use katalog_core::ids::CategoryId;

pub use super::doubles::*;
pub use super::multipart::MultipartBodyBuilder;
pub use super::sample_categories::*;
pub use super::server::{initialize_test_server, initialize_test_server_with, TestServer, TestServerOptions};
