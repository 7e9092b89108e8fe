#![cfg(feature = "server")]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use ed25519_dalek::{Signer, SigningKey};
use herald::commands;
use herald::constants::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use herald::http::Http;
use herald::interactions_endpoint::Verifier;
use herald::model::id::ApplicationId;
use herald::server::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[42; 32])
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn app() -> Router {
    let verifier = Verifier::try_new(signing_key().verifying_key().to_bytes()).unwrap();
    let http = Arc::new(Http::new("http://127.0.0.1:1", None).unwrap());
    let dispatcher = commands::dispatcher(http, "http://127.0.0.1:1/image.png").build();

    router(AppState::new(ApplicationId::new(1234), verifier, dispatcher))
}

fn signed(body: &str) -> Request<Body> {
    let timestamp = "1700000000";
    let message = [timestamp.as_bytes(), body.as_bytes()].concat();
    let signature = to_hex(&signing_key().sign(&message).to_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(SIGNATURE_HEADER, signature)
        .header(TIMESTAMP_HEADER, timestamp)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn call(request: Request<Body>) -> (StatusCode, String) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn command(name: &str, options: Value, resolved: Value) -> String {
    json!({
        "type": 2,
        "id": "900",
        "application_id": "1234",
        "token": "interaction-token",
        "guild_id": "55",
        "channel_id": "66",
        "data": {"id": "77", "name": name, "type": 1, "options": options, "resolved": resolved},
        "member": {"user": {"id": "101", "username": "alice"}, "roles": []},
    })
    .to_string()
}

#[tokio::test]
async fn ping_gets_pong() {
    let body = json!({
        "type": 1,
        "id": "1",
        "application_id": "1234",
        "token": "t",
        "user": {"id": "5", "username": "x"},
        "version": 1,
    });

    let (status, body) = call(signed(&body.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"type":1}"#);

    for minimal in [
        r#"{"type":1}"#,
        r#"{"type":1,"id":"1","application_id":"x","token":"t"}"#,
        r#"{"type":1,"id":"1","application_id":"1234","token":null}"#,
    ] {
        let (status, body) = call(signed(minimal)).await;
        assert_eq!(status, StatusCode::OK, "{minimal}");
        assert_eq!(body, r#"{"type":1}"#, "{minimal}");
    }
}

#[tokio::test]
async fn bad_signature_is_rejected_before_parsing() {
    let mut request = signed(r#"{"type":1}"#);
    request.headers_mut().insert(SIGNATURE_HEADER, "00".repeat(64).parse().unwrap());
    let (status, body) = call(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Bad request signature.");

    let garbage = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(TIMESTAMP_HEADER, "1700000000")
        .body(Body::from("\u{0}\u{1} definitely not json"))
        .unwrap();
    let (status, body) = call(garbage).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Bad request signature.");
}

#[tokio::test]
async fn tampered_body_is_rejected() {
    let request = signed(r#"{"type":1}"#);
    let (parts, _) = request.into_parts();
    let request = Request::from_parts(parts, Body::from(r#"{"type":2}"#));

    assert_eq!(call(request).await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_command_is_a_bad_request() {
    let (status, body) = call(signed(&command("doesnotexist", json!([]), json!({})))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"error": "Unknown Type"}));
}

#[tokio::test]
async fn component_interaction_is_a_bad_request() {
    let body = json!({"type": 3, "id": "1", "application_id": "1234", "token": "t"});
    assert_eq!(call(signed(&body.to_string())).await.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn string_echoes_text() {
    let options = json!([{"name": "text", "type": 3, "value": "hello"}]);
    let (status, body) = call(signed(&command("string", options, json!({})))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"type": 4, "data": {"content": "Your string: hello"}})
    );
}

#[tokio::test]
async fn number_mentions_the_caller() {
    let (status, body) = call(signed(&command("number", json!([]), json!({})))).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["type"], json!(4));

    let content = body["data"]["content"].as_str().unwrap();
    let n: i64 = content.strip_prefix("<@101>'s random number: ").unwrap().parse().unwrap();
    assert!((0..=100).contains(&n));
}

#[tokio::test]
async fn embed_and_button_replies() {
    let (_, body) = call(signed(&command("embed", json!([]), json!({})))).await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({"type": 4, "data": {
            "content": "Bot message",
            "embeds": [{
                "color": 0xFB05EF,
                "author": {"name": "Author name", "icon_url": ""},
                "title": "Title",
                "url": "https://example.com",
                "description": "Description",
            }],
        }})
    );

    let (_, body) = call(signed(&command("button", json!([]), json!({})))).await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body["data"]["components"],
        json!([{"type": 1, "components": [{
            "type": 2,
            "style": 5,
            "label": "Open Browser",
            "url": "https://example.com",
            "disabled": false,
        }]}])
    );
}

#[tokio::test]
async fn ship_uses_resolved_users() {
    let options = json!([
        {"name": "user1", "type": 6, "value": "101"},
        {"name": "user2", "type": 6, "value": "202"},
    ]);
    let resolved = json!({"users": {
        "101": {"id": "101", "username": "alice"},
        "202": {"id": "202", "username": "bob"},
    }});

    let (status, body) = call(signed(&command("ship", options, resolved))).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    let description = body["data"]["embeds"][0]["description"].as_str().unwrap();
    assert!(description.contains("<@101> & <@202> are **"));
    assert!(description.ends_with("Ship name: **aliob**."));
    assert_eq!(body["data"]["embeds"][0]["color"], json!(0xFB05EF));
}

#[tokio::test]
async fn upload_command_defers() {
    let (status, body) = call(signed(&command("files", json!([]), json!({})))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"type":5,"data":{}}"#);
}
