//! Test doubles and helpers for exercising the category API in-process.

mod doubles;
mod multipart;
pub mod prelude;
mod response;
pub mod sample_categories;
mod server;

pub use doubles::*;
pub use multipart::*;
pub use response::*;
pub use server::*;
