//! Command-line interface definitions for the server binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};


#[derive(Parser)]
#[command(
    name = "katalog",
    author,
    about = "API server for administering catalog categories and their images.",
    version
)]
pub struct CLIArgs {
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "apply-pending-migrations",
        action = ArgAction::SetTrue,
        help = "On startup, apply any pending database migrations."
    )]
    pub apply_pending_migrations: bool,
}



#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        CLIArgs::command().debug_assert();
    }

    #[test]
    fn parses_configuration_path_and_migration_flag() {
        let arguments = CLIArgs::parse_from([
            "katalog",
            "-c",
            "./custom.toml",
            "--apply-pending-migrations",
        ]);

        assert_eq!(
            arguments.configuration_file_path,
            Some(PathBuf::from("./custom.toml"))
        );
        assert!(arguments.apply_pending_migrations);

        let defaults = CLIArgs::parse_from(["katalog"]);
        assert_eq!(defaults.configuration_file_path, None);
        assert!(!defaults.apply_pending_migrations);
    }
}
