//! # Development note
//!
//! We use "" instead of "/" in many places (e.g. `#[get("")`, etc.)
//! because this allows the user to request e.g. `GET /api/v1/categories` OR
//! `GET /api/v1/categories/` and get the correct endpoint both times.
//!
//! For more information, see `actix_web::middleware::NormalizePath` (trim mode).

pub mod categories;
pub mod health;

use actix_web::{web, Scope};

use self::{categories::categories_router, health::health_router};


#[rustfmt::skip]
pub fn v1_api_router() -> Scope {
    web::scope("/v1")
        .service(health_router())
        .service(categories_router())
}
