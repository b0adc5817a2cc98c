use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

use crate::core::models::SummarizeRequest;
use crate::errors::SummaryError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path for both REST (v1) and HTTP (v2) API Gateway payloads.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Returns the request body, decoding it when API Gateway marked it as base64.
pub fn extract_body(payload: &Value) -> Result<String, SummaryError> {
    let Some(body) = payload.get("body") else {
        return Err(SummaryError::ParseError("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(SummaryError::ParseError("Invalid body format".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body_str.to_string());
    }

    let bytes = general_purpose::STANDARD
        .decode(body_str)
        .map_err(|e| SummaryError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SummaryError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

pub fn parse_summarize_request(body: &str) -> Result<SummarizeRequest, SummaryError> {
    Ok(serde_json::from_str(body)?)
}
