mod blob_store;
mod failure_sink;
mod repository;

pub use blob_store::*;
pub use failure_sink::*;
pub use repository::*;
