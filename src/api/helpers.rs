//! Response builders for the API handler.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummaryError;

/// Returns a 200 OK response with `body` serialized as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    let body = serde_json::to_value(body).unwrap_or(Value::Null);
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a pipeline error onto its status code and caller-facing message.
#[must_use]
pub fn error_response(error: &SummaryError) -> Value {
    err_response(error.status_code(), &error.public_message())
}
