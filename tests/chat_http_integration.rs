//! Integration tests for the purchase chat and profile HTTP endpoints.
//!
//! These tests drive the full router with the built-in catalog, the Amazon
//! link builder and an in-memory profile store:
//! 1. Complete requests return ranked picks and a search link
//! 2. Incomplete requests list what is missing
//! 3. Memory carries slots across turns for the same user
//! 4. Invalid requests are rejected with localized errors

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rider_purchases::adapters::http::{app_router, ApiHandlers};
use rider_purchases::adapters::{AmazonSearchLinkBuilder, InMemoryProfileStore, StaticCatalog};
use rider_purchases::application::TurnResolver;
use rider_purchases::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let resolver = TurnResolver::new(
        Arc::new(StaticCatalog::builtin()),
        Arc::new(AmazonSearchLinkBuilder::default()),
    );
    let handlers = ApiHandlers::new(Arc::new(resolver), Arc::new(InMemoryProfileStore::new()));
    app_router(handlers, &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_chat(app: &Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

async fn post_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat/purchases")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn product_ids(body: &Value) -> Vec<&str> {
    body["products"]
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["id"].as_str()).collect())
        .unwrap_or_default()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoints_report_ok() {
    let app = app();
    for uri in ["/", "/health"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["service"], "Rider Purchases Bot");
    }
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn arabic_full_face_request_is_complete_with_picks_and_link() {
    let app = app();

    let (status, body) = post_chat(
        &app,
        json!({ "message": "بدي خوذة فل فيس للمدينة على دراجة سبورت", "locale": "ar" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["botName"], "رايدر المشتريات");
    assert_eq!(body["locale"], "ar");
    assert_eq!(body["userId"], "anonymous");
    assert_eq!(body["category"], "safety");
    assert_eq!(body["itemType"], "helmet-fullface");
    assert_eq!(body["usage"], "city");
    assert_eq!(body["bikeType"], "sport");
    assert_eq!(body["missingInfo"], json!([]));
    assert_eq!(
        product_ids(&body),
        vec!["helmet-ls2-ff353-rapid", "helmet-hjc-c70", "helmet-icon-airflite"]
    );
    assert_eq!(body["searchQuery"], "motorcycle helmet sport bike city riding");
    assert_eq!(
        body["searchUrl"],
        "https://www.amazon.com/s?k=motorcycle+helmet+sport+bike+city+riding"
    );

    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("https://www.amazon.com/s?k="));
    assert!(reply.contains("LS2 FF353 Rapid"));
}

#[tokio::test]
async fn generic_english_helmet_asks_for_usage_and_bike_type() {
    let app = app();

    let (status, body) = post_chat(&app, json!({ "message": "helmet", "locale": "en" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "safety");
    assert_eq!(body["itemType"], "helmet-unknown");
    assert_eq!(body["usage"], Value::Null);
    assert_eq!(body["missingInfo"], json!(["usage", "bikeType"]));
    assert!(body.get("searchUrl").is_none());
    assert!(body.get("products").is_none());

    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("Which helmet style do you prefer"));
    assert!(reply.contains("Where will you mostly ride"));
    assert!(reply.contains("What type of bike do you ride"));
}

#[tokio::test]
async fn spare_part_request_gets_link_and_compatibility_note() {
    let app = app();

    let (status, body) = post_chat(
        &app,
        json!({ "message": "need oil filter for Yamaha R3 2019", "locale": "en" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "spare-part");
    assert_eq!(body["bikeBrand"], "Yamaha");
    assert_eq!(body["bikeModel"], "R3");
    assert_eq!(body["bikeYear"], "2019");
    assert_eq!(body["partName"], "oil filter");
    assert_eq!(body["missingInfo"], json!([]));
    assert_eq!(
        body["searchUrl"],
        "https://www.amazon.com/s?k=motorcycle+spare+part+oil+filter+Yamaha+R3+2019+sport+bike"
    );
    assert!(body.get("products").is_none());
    assert!(body["reply"]
        .as_str()
        .unwrap()
        .contains("Please double-check compatibility"));
}

#[tokio::test]
async fn follow_up_turn_completes_from_memory() {
    let app = app();

    let (_, first) = post_chat(
        &app,
        json!({ "message": "helmet", "userId": "rider-42", "locale": "en" }),
    )
    .await;
    assert_eq!(first["missingInfo"], json!(["usage", "bikeType"]));

    let (status, second) = post_chat(
        &app,
        json!({ "message": "for touring on my cruiser", "userId": "rider-42", "locale": "en" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["category"], "safety");
    assert_eq!(second["itemType"], "helmet-unknown");
    assert_eq!(second["usage"], "touring");
    assert_eq!(second["bikeType"], "cruiser");
    assert_eq!(second["missingInfo"], json!([]));
    assert_eq!(product_ids(&second)[2], "helmet-shoei-gt-air-2");
}

#[tokio::test]
async fn explicit_context_completes_request() {
    let app = app();

    let (status, body) = post_chat(
        &app,
        json!({
            "message": "jacket",
            "locale": "en",
            "bikeInfo": { "usage": "touring", "bikeType": "adventure" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemType"], "jacket");
    assert_eq!(body["missingInfo"], json!([]));
    assert_eq!(body["searchQuery"], "motorcycle jacket adventure bike touring");
}

#[tokio::test]
async fn unrecognized_message_asks_for_category() {
    let app = app();

    let (status, body) = post_chat(&app, json!({ "message": "hello there", "locale": "en" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "none");
    assert_eq!(body["missingInfo"], json!(["category"]));
}

#[tokio::test]
async fn empty_message_is_rejected_with_localized_error() {
    let app = app();

    let (status, body) = post_chat(&app, json!({ "message": "   ", "locale": "en" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Please type your message.");

    let (status, body) = post_chat(&app, json!({ "message": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "الرجاء كتابة رسالتك.");
}

#[tokio::test]
async fn missing_or_non_string_message_is_rejected() {
    let app = app();

    let (status, _) = post_chat(&app, json!({ "userId": "u" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_chat(&app, json!({ "message": ["helmet"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_raw(&app, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Profiles
// =============================================================================

#[tokio::test]
async fn profile_records_last_known_slots_and_history() {
    let app = app();
    post_chat(
        &app,
        json!({ "message": "helmet", "userId": "rider-7", "locale": "en" }),
    )
    .await;
    post_chat(
        &app,
        json!({ "message": "city riding please", "userId": "rider-7", "locale": "en" }),
    )
    .await;

    let (status, body) = get(&app, "/api/profiles/rider-7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "rider-7");
    assert_eq!(body["lastKnown"]["itemType"], "helmet-unknown");
    assert_eq!(body["lastKnown"]["usage"], "city");
    assert_eq!(body["turnCount"], 2);
    assert_eq!(body["history"][0]["message"], "helmet");
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/profiles/nobody?locale=en").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "No saved profile for this user.");
}
