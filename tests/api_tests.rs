mod common;

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Value, json};
use std::sync::Arc;

use briefly::api::handler::route_request;
use briefly::errors::{MODEL_UNAVAILABLE_MESSAGE, PROCESSING_FAILURE_MESSAGE};
use common::{ARTICLE, FakeGenerator, service_with, service_without_model};

fn http_event(method: &str, path: &str, body: Option<&str>) -> Value {
    let mut event = json!({
        "rawPath": path,
        "requestContext": { "http": { "method": method } },
        "isBase64Encoded": false
    });
    if let Some(body) = body {
        event["body"] = Value::String(body.to_string());
    }
    event
}

fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_summarize_returns_finished_summary() {
    let service = service_with(Arc::new(FakeGenerator::replying(
        "Researchers unveiled a faster learning method",
    )));
    let request = json!({ "text": ARTICLE, "min_length": 30, "max_length": 100 }).to_string();

    let response = route_request(&service, &http_event("POST", "/summarize", Some(&request))).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        body_of(&response),
        json!({ "summary": "Researchers unveiled a faster learning method." })
    );
}

#[tokio::test]
async fn test_length_defaults_apply() {
    let generator = Arc::new(FakeGenerator::replying("Fine."));
    let service = service_with(Arc::clone(&generator));
    let request = json!({ "text": ARTICLE }).to_string();

    route_request(&service, &http_event("POST", "/prod/summarize", Some(&request))).await;

    let seen = &generator.requests()[0];
    assert_eq!(seen.min_length, 40);
    assert_eq!(seen.max_length, 110);
}

#[tokio::test]
async fn test_rest_api_payload_with_base64_body() {
    let service = service_with(Arc::new(FakeGenerator::replying("Encoded ok.")));
    let request = json!({ "text": ARTICLE }).to_string();
    let event = json!({
        "path": "/summarize",
        "httpMethod": "POST",
        "isBase64Encoded": true,
        "body": general_purpose::STANDARD.encode(request)
    });

    let response = route_request(&service, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_of(&response)["summary"], "Encoded ok.");
}

#[tokio::test]
async fn test_missing_model_is_service_unavailable() {
    let service = service_without_model();
    let request = json!({ "text": ARTICLE }).to_string();

    let response = route_request(&service, &http_event("POST", "/summarize", Some(&request))).await;

    assert_eq!(response["statusCode"], 503);
    assert_eq!(body_of(&response)["error"], MODEL_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn test_loading_model_is_service_unavailable() {
    let generator = Arc::new(FakeGenerator::loading(
        "Model facebook/bart-large-cnn is currently loading",
    ));
    let service = service_with(Arc::clone(&generator));
    let request = json!({ "text": ARTICLE }).to_string();

    let response = route_request(&service, &http_event("POST", "/summarize", Some(&request))).await;

    assert_eq!(response["statusCode"], 503);
    assert_eq!(body_of(&response)["error"], MODEL_UNAVAILABLE_MESSAGE);
    assert!(!response.to_string().contains("currently loading"));
    assert_eq!(generator.requests().len(), 1);
}

#[tokio::test]
async fn test_model_failure_does_not_leak_details() {
    let service = service_with(Arc::new(FakeGenerator::failing(
        "token sk-secret rejected by upstream",
    )));
    let request = json!({ "text": ARTICLE }).to_string();

    let response = route_request(&service, &http_event("POST", "/summarize", Some(&request))).await;

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body_of(&response)["error"], PROCESSING_FAILURE_MESSAGE);
    assert!(!response.to_string().contains("sk-secret"));
}

#[tokio::test]
async fn test_bad_requests_are_rejected() {
    let service = service_with(Arc::new(FakeGenerator::replying("Unused.")));

    let missing_body = route_request(&service, &http_event("POST", "/summarize", None)).await;
    assert_eq!(missing_body["statusCode"], 400);

    let not_json = route_request(&service, &http_event("POST", "/summarize", Some("text=hi"))).await;
    assert_eq!(not_json["statusCode"], 400);

    let no_text = route_request(
        &service,
        &http_event("POST", "/summarize", Some(r#"{"min_length": 10}"#)),
    )
    .await;
    assert_eq!(no_text["statusCode"], 400);
    assert_eq!(
        body_of(&no_text)["error"],
        "Invalid request body: missing field `text`"
    );
    assert!(!no_text["body"].as_str().unwrap().contains("column"));
}

#[tokio::test]
async fn test_health_route() {
    let ready = route_request(
        &service_with(Arc::new(FakeGenerator::replying("x"))),
        &http_event("GET", "/health", None),
    )
    .await;
    assert_eq!(ready["statusCode"], 200);
    let body = body_of(&ready);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_ready"], true);
    assert_eq!(body["model"], "fake/bart");

    let missing = route_request(&service_without_model(), &http_event("GET", "/health", None)).await;
    assert_eq!(missing["statusCode"], 200);
    assert_eq!(body_of(&missing)["model_ready"], false);
}

#[tokio::test]
async fn test_unknown_routes_and_methods() {
    let service = service_without_model();

    let not_found = route_request(&service, &http_event("GET", "/articles", None)).await;
    assert_eq!(not_found["statusCode"], 404);

    let wrong_method = route_request(&service, &http_event("GET", "/summarize", None)).await;
    assert_eq!(wrong_method["statusCode"], 405);

    let post_health = route_request(&service, &http_event("POST", "/health", Some("{}"))).await;
    assert_eq!(post_health["statusCode"], 405);
}
