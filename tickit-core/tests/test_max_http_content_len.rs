mod common;
pub use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires running server"]
async fn max_content_length_http() {
    init_env();

    // sending too large content should result in 413

    let max_content_len: usize = std::env::var("TICKIT_CORE_MAX_HTTP_CONTENT_LEN")
        .unwrap()
        .parse()
        .unwrap();

    // content does not matter, it should be rejected because of its size
    let content = "0".repeat(max_content_len + 1);

    let client = Client::new();

    let response = client
        .post(format!("http://{}/api/v1/tickets", address()))
        .bearer_auth(create_access_token())
        .header(CONTENT_TYPE, "application/json")
        .body(content)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(
        body,
        json!({ "code": 413, "message": "request body too large" })
    );
}
