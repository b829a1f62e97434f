use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod base_paths;
mod categories;
mod database;
mod http;
mod logging;
mod storage;

pub use base_paths::*;
pub use categories::*;
pub use database::*;
pub use http::*;
pub use logging::*;
pub use storage::*;

use crate::traits::{Resolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    /// Base paths.
    base_paths: UnresolvedBasePathsConfiguration,

    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the HTTP server.
    http: UnresolvedHttpConfiguration,

    /// Configuration related to the database.
    database: UnresolvedDatabaseConfiguration,

    /// Configuration related to the public file disk.
    storage: UnresolvedStorageConfiguration,

    /// Category endpoint behaviour.
    #[serde(default)]
    categories: UnresolvedCategoriesConfiguration,
}


/// The entire Katalog backend configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from.
    pub configuration_file_path: PathBuf,

    /// Base paths.
    pub base_paths: BasePathsConfiguration,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the HTTP server.
    pub http: HttpConfiguration,

    /// Configuration related to the database.
    pub database: DatabaseConfiguration,

    /// Configuration related to the public file disk.
    pub storage: StorageConfiguration,

    /// Category endpoint behaviour.
    pub categories: CategoriesConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: PathBuf,
}


impl TryResolveWithContext<'static> for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let base_paths = self.base_paths.resolve();
        let logging = self.logging.try_resolve_with_context(&base_paths)?;
        let http = self.http.resolve();
        let database = self.database.resolve();
        let storage = self.storage.try_resolve_with_context(&base_paths)?;
        let categories = self.categories.resolve();

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            base_paths,
            logging,
            http,
            database,
            storage,
            categories,
        })
    }
}


impl Configuration {
    /// Parse and resolve configuration from a TOML string.
    ///
    /// `configuration_file_path` is only recorded, not read.
    pub fn load_from_str(
        configuration_string: &str,
        configuration_file_path: PathBuf,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Parse the string into the [`UnresolvedConfiguration`] structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path,
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Read the configuration file into memory as a string.
        let configuration_string =
            fs::read_to_string(configuration_file_path.as_ref()).map_err(|error| {
                ConfigurationLoadingError::UnableToReadConfigurationFile {
                    path: configuration_file_path.as_ref().to_path_buf(),
                    error,
                }
            })?;

        let canonical_configuration_file_path =
            dunce::canonicalize(configuration_file_path.as_ref()).map_err(|error| {
                ConfigurationLoadingError::UnableToCanonicalizePath {
                    path: configuration_file_path.as_ref().to_path_buf(),
                    error,
                }
            })?;

        Self::load_from_str(
            &configuration_string,
            canonical_configuration_file_path,
        )
    }

    /// Load the configuration from the default path (`./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Self, ConfigurationLoadingError> {
        Configuration::load_from_path(get_default_configuration_file_path())
    }
}



#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE_CONFIGURATION: &str = r#"
[base_paths]
base_data_directory_path = "/srv/katalog"

[logging]
console_output_level_filter = "info,katalog=debug"
log_file_output_level_filter = "info"
log_file_output_directory = "{BASE_DATA_DIRECTORY}/logs"

[http]
host = "127.0.0.1"
port = 8866

[database]
host = "localhost"
port = 5432
username = "katalog"
database_name = "katalog"

[storage]
public_disk_directory_path = "{BASE_DATA_DIRECTORY}/public"
maximum_upload_size_bytes = 4194304
serve_public_disk = true
"#;

    #[test]
    fn loads_sample_configuration() {
        let configuration = Configuration::load_from_str(
            SAMPLE_CONFIGURATION,
            PathBuf::from("configuration.toml"),
        )
        .unwrap();

        assert_eq!(configuration.http.port, 8866);
        assert_eq!(configuration.database.password, None);
        assert_eq!(
            configuration.storage.public_disk_directory_path,
            PathBuf::from("/srv/katalog/public")
        );
        assert_eq!(
            configuration.logging.log_file_output_directory,
            PathBuf::from("/srv/katalog/logs")
        );
        assert_eq!(configuration.storage.maximum_upload_size_bytes, 4194304);

        // The `[categories]` table is optional.
        assert!(!configuration.categories.report_delete_failures_as_server_error);
    }

    #[test]
    fn rejects_invalid_log_filter() {
        let broken_configuration = SAMPLE_CONFIGURATION.replace(
            "console_output_level_filter = \"info,katalog=debug\"",
            "console_output_level_filter = \"info,katalog=not-a-level\"",
        );

        let result = Configuration::load_from_str(
            &broken_configuration,
            PathBuf::from("configuration.toml"),
        );

        assert!(matches!(
            result,
            Err(ConfigurationLoadingError::ResolutionError {
                error: ConfigurationResolutionError::LoggingConfigurationError { .. }
            })
        ));
    }

    #[test]
    fn rejects_zero_upload_size() {
        let broken_configuration = SAMPLE_CONFIGURATION.replace(
            "maximum_upload_size_bytes = 4194304",
            "maximum_upload_size_bytes = 0",
        );

        let result = Configuration::load_from_str(
            &broken_configuration,
            PathBuf::from("configuration.toml"),
        );

        assert!(matches!(
            result,
            Err(ConfigurationLoadingError::ResolutionError {
                error: ConfigurationResolutionError::StorageConfigurationError { .. }
            })
        ));
    }
}
