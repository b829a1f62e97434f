use actix_web::get;
use katalog_core::api_models::PingResponse;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult};


/// Ping the server
///
/// Answers `{"ok": true}` as long as the HTTP server is up.
/// The database is not consulted.
#[get("/ping")]
pub async fn ping() -> EndpointResult {
    EndpointResponseBuilder::ok()
        .with_json_body(PingResponse { ok: true })
        .build()
}
