//! API Lambda handler - thin router in front of the summarization service.
//!
//! Routes:
//! - `POST .../summarize` runs the pipeline
//! - `GET .../health` reports whether the model is ready

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::service::SummaryService;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails at the Lambda level; every failure is turned into an HTTP response.
pub async fn function_handler(
    service: &SummaryService,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route_request(service, &event.payload).await)
}

/// Dispatches an API Gateway proxy payload and returns the proxy response.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn route_request(service: &SummaryService, payload: &Value) -> Value {
    let path = parsing::request_path(payload).unwrap_or_default();
    let method = parsing::request_method(payload).unwrap_or("GET");
    info!(path = %path, method = %method, "API request");

    if path.ends_with("/health") {
        if !method.eq_ignore_ascii_case("GET") {
            return helpers::err_response(405, "Method not allowed");
        }
        return helpers::ok_json(&service.health());
    }

    if path.ends_with("/summarize") {
        if !method.eq_ignore_ascii_case("POST") {
            return helpers::err_response(405, "Method not allowed");
        }
        return handle_summarize(service, payload).await;
    }

    warn!(path = %path, "No route for request");
    helpers::err_response(404, "Not found")
}

async fn handle_summarize(service: &SummaryService, payload: &Value) -> Value {
    let request = match parsing::extract_body(payload)
        .and_then(|body| parsing::parse_summarize_request(&body))
    {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected summarize request");
            return helpers::error_response(&e);
        }
    };

    match service.summarize(&request).await {
        Ok(response) => helpers::ok_json(&response),
        Err(e) => {
            error!(error = %e, "Failed to summarize text");
            helpers::error_response(&e)
        }
    }
}
