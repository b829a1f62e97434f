use katalog_test_util::prelude::*;


#[actix_web::test]
async fn ping_answers_while_the_server_is_up() {
    let server = initialize_test_server();

    let response = server
        .request(Method::GET, "/api/v1/health/ping")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(PingResponse { ok: true });
}
