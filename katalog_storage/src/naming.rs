use uuid::Uuid;


/// Returns the extension of a client-provided file name, if it has a usable one.
///
/// Only the last path component is considered (clients may send full paths,
/// with either kind of separator). The extension is returned verbatim, but only if
/// it is non-empty and ASCII alphanumeric.
pub fn client_file_extension(original_file_name: &str) -> Option<&str> {
    let last_component = original_file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_file_name);

    let (_, extension) = last_component.rsplit_once('.')?;

    let is_usable = !extension.is_empty()
        && extension.chars().all(|character| character.is_ascii_alphanumeric());

    is_usable.then_some(extension)
}


/// Generates a random, collision-resistant file name that keeps the extension
/// of the original (client-provided) file name, e.g. `photo.png` becomes
/// `9b0c6f1e3d2a4b5c8e7f6a5b4c3d2e1f.png`.
///
/// If the original name has no usable extension (see [`client_file_extension`]),
/// the generated name has none either.
pub fn generate_random_file_name(original_file_name: &str) -> String {
    let random_token = Uuid::new_v4().simple().to_string();

    match client_file_extension(original_file_name) {
        Some(extension) => format!("{random_token}.{extension}"),
        None => random_token,
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_original_extension() {
        let generated = generate_random_file_name("photo.png");

        assert!(generated.ends_with(".png"));
        assert_ne!(generated, "photo.png");
        assert_eq!(generated.len(), 32 + ".png".len());
    }

    #[test]
    fn generates_distinct_names() {
        let first = generate_random_file_name("photo.png");
        let second = generate_random_file_name("photo.png");

        assert_ne!(first, second);
    }

    #[test]
    fn extracts_extension_from_last_component_only() {
        assert_eq!(client_file_extension("holiday.photo.JPG"), Some("JPG"));
        assert_eq!(
            client_file_extension("C:\\Users\\me\\Pictures\\cat.webp"),
            Some("webp")
        );
        assert_eq!(client_file_extension("some.dir/no_extension"), None);
        assert_eq!(client_file_extension("trailing-dot."), None);
        assert_eq!(client_file_extension("weird.p/ng"), None);
        assert_eq!(client_file_extension("shell.p$g"), None);
    }

    #[test]
    fn keeps_long_extensions() {
        let generated = generate_random_file_name("scan.averyveryverylongext");

        assert!(generated.ends_with(".averyveryverylongext"));
        assert_eq!(generated.len(), 32 + ".averyveryverylongext".len());
    }

    #[test]
    fn omits_unusable_extension() {
        let generated = generate_random_file_name("README");

        assert_eq!(generated.len(), 32);
        assert!(!generated.contains('.'));
    }
}
