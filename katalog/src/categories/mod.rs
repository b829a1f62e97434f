//! The category resource: listing, creating, showing, updating and deleting
//! categories along with their image blobs.
//!
//! HTTP concerns (parsing forms, status codes) live in
//! [`crate::api::v1::categories`]; this module only coordinates the
//! persistence store and the blob store.

mod failure;
mod handler;
mod inputs;

pub use failure::*;
pub use handler::*;
pub use inputs::*;
