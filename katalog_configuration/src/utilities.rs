use std::{
    collections::HashMap,
    env::current_dir,
    path::{Path, PathBuf},
};


/// Returns the default configuration filepath, which is at
/// `{current directory}/data/configuration.toml`.
///
/// If the current directory can't be determined, the path is relative.
pub fn get_default_configuration_file_path() -> PathBuf {
    let mut configuration_filepath = current_dir().unwrap_or_default();
    configuration_filepath.push("data/configuration.toml");

    configuration_filepath
}


/// Replaces every occurrence of each placeholder key (e.g. `{BASE_DATA_DIRECTORY}`)
/// in the given path with its value.
pub(crate) fn replace_placeholders_in_path(
    path: &Path,
    placeholders: HashMap<&'static str, String>,
) -> PathBuf {
    let mut path_string = path.to_string_lossy().to_string();

    for (placeholder_key, placeholder_value) in placeholders {
        path_string = path_string.replace(placeholder_key, &placeholder_value);
    }

    PathBuf::from(path_string)
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn replaces_base_directory_placeholder() {
        let mut placeholders = HashMap::new();
        placeholders.insert("{BASE_DATA_DIRECTORY}", "/srv/katalog".to_string());

        let replaced = replace_placeholders_in_path(
            Path::new("{BASE_DATA_DIRECTORY}/public"),
            placeholders,
        );

        assert_eq!(replaced, PathBuf::from("/srv/katalog/public"));
    }

    #[test]
    fn leaves_paths_without_placeholders_alone() {
        let replaced = replace_placeholders_in_path(Path::new("./logs"), HashMap::new());

        assert_eq!(replaced, PathBuf::from("./logs"));
    }
}
