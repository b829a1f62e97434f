use bytes::Bytes;
use uuid::Uuid;


/// Builds a `multipart/form-data` request body by hand.
pub struct MultipartBodyBuilder {
    boundary: String,

    body: Vec<u8>,
}

impl MultipartBodyBuilder {
    pub fn new() -> Self {
        Self {
            boundary: format!("katalog-test-{}", Uuid::new_v4().simple()),
            body: Vec::new(),
        }
    }

    pub fn with_text<N, V>(mut self, name: N, value: V) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        self.push_part_headers(name.as_ref(), None, "text/plain; charset=utf-8");
        self.body.extend_from_slice(value.as_ref().as_bytes());
        self.body.extend_from_slice(b"\r\n");

        self
    }

    pub fn with_file<N, F>(mut self, name: N, file_name: F, content_type: &str, contents: &[u8]) -> Self
    where
        N: AsRef<str>,
        F: AsRef<str>,
    {
        self.push_part_headers(
            name.as_ref(),
            Some(file_name.as_ref()),
            content_type,
        );
        self.body.extend_from_slice(contents);
        self.body.extend_from_slice(b"\r\n");

        self
    }

    /// Returns the `Content-Type` header value and the body.
    pub fn build(mut self) -> (String, Bytes) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        (
            format!("multipart/form-data; boundary={}", self.boundary),
            Bytes::from(self.body),
        )
    }

    fn push_part_headers(&mut self, name: &str, file_name: Option<&str>, content_type: &str) {
        let content_disposition = match file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\""
            ),
            None => format!("Content-Disposition: form-data; name=\"{name}\""),
        };

        self.body.extend_from_slice(
            format!(
                "--{}\r\n{content_disposition}\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
    }
}

impl Default for MultipartBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
