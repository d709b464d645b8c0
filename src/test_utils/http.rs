use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};

use crate::{TransactionId, endpoints};

#[track_caller]
pub(crate) fn assert_content_type(response: &TestResponse, content_type: &str) {
    let content_type_header = response.header("content-type");
    assert_eq!(content_type_header, content_type);
}

#[track_caller]
pub(crate) fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    response.assert_json(&json!({ "error": message }));
}

/// POST `body` to the transactions endpoint and return the new ID.
pub(crate) async fn must_create_transaction(server: &TestServer, body: Value) -> TransactionId {
    let response = server.post(endpoints::TRANSACTIONS).json(&body).await;
    response.assert_status(StatusCode::CREATED);

    response.json::<Value>()["transactionId"]
        .as_i64()
        .expect("response did not contain a transaction ID")
}
