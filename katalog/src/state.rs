//! Application-wide state (shared between endpoint functions).

use std::sync::Arc;

use actix_web::web::Data;
use katalog_configuration::Configuration;
use katalog_database::entities::PgCategoryRepository;
use katalog_storage::LocalBlobStore;
use sqlx::PgPool;

use crate::categories::{CategoryResourceHandler, TracingFailureSink};



pub struct ApplicationStateInner {
    pub configuration: Configuration,

    pub categories: CategoryResourceHandler,
}

impl ApplicationStateInner {
    /// Wires the category handler to PostgreSQL, the public disk
    /// and `tracing`-based failure reporting.
    pub fn new(configuration: Configuration, database_pool: PgPool) -> Self {
        let categories = CategoryResourceHandler::new(
            Arc::new(PgCategoryRepository::new(database_pool)),
            Arc::new(LocalBlobStore::new(
                &configuration.storage.public_disk_directory_path,
            )),
            Arc::new(TracingFailureSink),
        );

        Self::from_parts(configuration, categories)
    }

    /// Builds the state around an already constructed category handler
    /// (e.g. one with in-memory stores).
    pub fn from_parts(configuration: Configuration, categories: CategoryResourceHandler) -> Self {
        Self {
            configuration,
            categories,
        }
    }
}


pub type ApplicationState = Data<ApplicationStateInner>;
