use std::fmt::Debug;

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::{
        header::{HeaderMap, HeaderName},
        StatusCode,
    },
    test,
};
use bytes::Bytes;
use serde::Deserialize;


pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
}

impl TestResponse {
    pub(crate) async fn from_service_response<B>(response: ServiceResponse<B>) -> Self
    where
        B: MessageBody,
    {
        let status = response.status();
        let headers = response.headers().to_owned();
        let body_bytes = test::read_body(response).await;

        Self {
            status,
            headers,
            body_bytes,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn assert_status_equals(&self, status_code: StatusCode) {
        assert_eq!(
            self.status,
            status_code,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
    }

    pub fn header_value<N>(&self, header_name: N) -> Option<&str>
    where
        N: Into<HeaderName>,
    {
        let header_name: HeaderName = header_name.into();

        self.headers
            .get(&header_name)
            .map(|value| value.to_str().expect("header value is not visible ASCII"))
    }

    pub fn assert_header_exists<N>(&self, header_name: N)
    where
        N: Into<HeaderName>,
    {
        let header_name: HeaderName = header_name.into();

        assert!(
            self.headers.contains_key(&header_name),
            "header {} does not exist on response",
            header_name.as_str()
        );
    }

    pub fn assert_body_is_empty(&self) {
        assert!(
            self.body_bytes.is_empty(),
            "expected empty body, got: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
    }

    pub fn json_body<'de, D>(&'de self) -> D
    where
        D: Deserialize<'de>,
    {
        serde_json::from_slice::<D>(&self.body_bytes).expect("failed to deserialize body as JSON")
    }

    pub fn assert_json_body_matches<'de, D>(&'de self, expected_content: D)
    where
        D: Deserialize<'de> + PartialEq + Eq + Debug,
    {
        let data = self.json_body::<D>();

        assert_eq!(data, expected_content);
    }
}
