use std::{path::Path, sync::Arc};

use actix_web::{
    http::{
        header::{self, HeaderName, TryIntoHeaderPair, TryIntoHeaderValue},
        Method,
    },
    middleware::NormalizePath,
    test::{self, TestRequest},
    web,
    App,
};
use katalog::{
    api::configure_application,
    categories::{category_image_key, CategoryResourceHandler, CATEGORY_IMAGE_DIRECTORY},
    state::{ApplicationState, ApplicationStateInner},
};
use katalog_configuration::Configuration;
use katalog_storage::LocalBlobStore;
use tempfile::TempDir;

use crate::{
    FaultInjectingBlobStore,
    InMemoryCategoryRepository,
    MultipartBodyBuilder,
    RecordingFailureSink,
    TestResponse,
};


#[derive(Clone, Copy, Debug, Default)]
pub struct TestServerOptions {
    pub report_delete_failures_as_server_error: bool,
}


fn test_configuration(public_disk_directory: &Path, options: TestServerOptions) -> Configuration {
    let configuration_string = format!(
        r#"
[base_paths]
base_data_directory_path = '{}'

[logging]
console_output_level_filter = "info"
log_file_output_level_filter = "info"
log_file_output_directory = "{{BASE_DATA_DIRECTORY}}/logs"

[http]
host = "127.0.0.1"
port = 8866

[database]
host = "localhost"
port = 5432
username = "katalog"
database_name = "katalog"

[storage]
public_disk_directory_path = "{{BASE_DATA_DIRECTORY}}"
maximum_upload_size_bytes = 4194304
serve_public_disk = true

[categories]
report_delete_failures_as_server_error = {}
"#,
        public_disk_directory.display(),
        options.report_delete_failures_as_server_error,
    );

    Configuration::load_from_str(
        &configuration_string,
        public_disk_directory.join("configuration.toml"),
    )
    .expect("failed to load test configuration")
}



/// The full HTTP application with in-memory persistence, a temporary public disk
/// and a recording failure sink. Requests are served in-process.
pub struct TestServer {
    state: ApplicationState,

    repository: Arc<InMemoryCategoryRepository>,

    blob_store: Arc<FaultInjectingBlobStore>,

    failure_sink: Arc<RecordingFailureSink>,

    public_disk_directory: TempDir,
}

impl TestServer {
    pub fn request<U>(&self, method: Method, endpoint: U) -> TestRequestBuilder
    where
        U: AsRef<str>,
    {
        TestRequestBuilder {
            state: self.state.clone(),
            request: TestRequest::default()
                .method(method)
                .uri(endpoint.as_ref()),
        }
    }

    pub fn repository(&self) -> &InMemoryCategoryRepository {
        &self.repository
    }

    pub fn blob_store(&self) -> &FaultInjectingBlobStore {
        &self.blob_store
    }

    pub fn failure_sink(&self) -> &RecordingFailureSink {
        &self.failure_sink
    }

    pub fn public_disk_path(&self) -> &Path {
        self.public_disk_directory.path()
    }

    /// Returns whether `category/image/{image_file_name}` exists on the public disk.
    pub fn category_image_exists(&self, image_file_name: &str) -> bool {
        self.category_image_path(image_file_name).is_file()
    }

    /// Writes a category image directly onto the public disk.
    pub async fn write_category_image(&self, image_file_name: &str, contents: &[u8]) {
        let image_path = self.category_image_path(image_file_name);

        if let Some(parent_directory) = image_path.parent() {
            tokio::fs::create_dir_all(parent_directory)
                .await
                .expect("failed to create image directory");
        }

        tokio::fs::write(image_path, contents)
            .await
            .expect("failed to write image");
    }

    /// Names of all files currently in `category/image` on the public disk.
    pub fn category_image_file_names(&self) -> Vec<String> {
        let image_directory = self.public_disk_path().join(CATEGORY_IMAGE_DIRECTORY);

        let Ok(entries) = std::fs::read_dir(image_directory) else {
            return Vec::new();
        };

        let mut file_names = entries
            .map(|entry| {
                entry
                    .expect("failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect::<Vec<_>>();

        file_names.sort();
        file_names
    }

    fn category_image_path(&self, image_file_name: &str) -> std::path::PathBuf {
        let key = category_image_key(image_file_name).expect("invalid image file name");

        LocalBlobStore::new(self.public_disk_path()).file_path_for(&key)
    }
}


pub fn initialize_test_server() -> TestServer {
    initialize_test_server_with(TestServerOptions::default())
}

pub fn initialize_test_server_with(options: TestServerOptions) -> TestServer {
    let public_disk_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let configuration = test_configuration(public_disk_directory.path(), options);

    let repository = Arc::new(InMemoryCategoryRepository::new());
    let blob_store = Arc::new(FaultInjectingBlobStore::new(Arc::new(
        LocalBlobStore::new(public_disk_directory.path()),
    )));
    let failure_sink = Arc::new(RecordingFailureSink::new());

    let categories = CategoryResourceHandler::new(
        repository.clone(),
        blob_store.clone(),
        failure_sink.clone(),
    );

    let state = web::Data::new(ApplicationStateInner::from_parts(
        configuration,
        categories,
    ));

    TestServer {
        state,
        repository,
        blob_store,
        failure_sink,
        public_disk_directory,
    }
}



pub struct TestRequestBuilder {
    state: ApplicationState,

    request: TestRequest,
}

impl TestRequestBuilder {
    pub fn with_header<N, V>(mut self, header_name: N, header_value: V) -> Self
    where
        N: Into<HeaderName>,
        V: TryIntoHeaderValue,
        (HeaderName, V): TryIntoHeaderPair,
    {
        self.request = self
            .request
            .insert_header((header_name.into(), header_value));
        self
    }

    pub fn with_multipart_body(mut self, body: MultipartBodyBuilder) -> Self {
        let (content_type, body) = body.build();

        self.request = self
            .request
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body);
        self
    }

    pub async fn send(self) -> TestResponse {
        let state = self.state;

        let application = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .configure(|service_config| configure_application(service_config, state)),
        )
        .await;

        let response = test::call_service(&application, self.request.to_request()).await;

        TestResponse::from_service_response(response).await
    }
}
