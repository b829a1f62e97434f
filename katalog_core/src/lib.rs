//! Types shared between the server, the database layer and API consumers.

pub mod api_models;
pub mod ids;
