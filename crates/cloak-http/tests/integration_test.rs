//! HTTP integration tests against a live axum server

use cloak_core::{
    select_signer, CodecAlgorithm, SecretKey, SignatureService, SignerAlgorithm,
};
use cloak_http::{router, AppState, CloakClient, ErrorResponse};
use serde_json::{json, Map, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const TEST_SECRET: &str = "extremely-secret-hmac-secret";

/// Start a test server and return its address
async fn start_test_server() -> SocketAddr {
    let signature = SignatureService::new(select_signer(
        SignerAlgorithm::HmacSha256,
        SecretKey::from(TEST_SECRET),
    ));
    let app = router(AppState::new(CodecAlgorithm::Base64, signature));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    addr
}

async fn start_client() -> (CloakClient, SocketAddr) {
    let addr = start_test_server().await;
    (CloakClient::new(format!("http://{}", addr)), addr)
}

fn as_map(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[tokio::test]
async fn test_encode_decode_round_trip() {
    let (client, _) = start_client().await;

    let payload = as_map(json!({"name": "John Doe", "age": 30}));

    let encoded = client.encode(&payload).await.unwrap();
    assert_eq!(encoded["name"], json!("IkpvaG4gRG9lIg=="));
    assert_eq!(encoded["age"], json!("MzA="));

    let decoded = client.decode(&encoded).await.unwrap();
    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn test_decode_mixed_content() {
    let (client, _) = start_client().await;

    let payload = as_map(json!({
        "name": "IkpvaG4gRG9lIg==",
        "age": "MzA=",
        "birth_date": "1998-11-19"
    }));

    let decoded = client.decode(&payload).await.unwrap();
    assert_eq!(
        Value::Object(decoded),
        json!({"name": "John Doe", "age": 30, "birth_date": "1998-11-19"})
    );
}

#[tokio::test]
async fn test_empty_payload() {
    let (client, _) = start_client().await;

    let empty = Map::new();
    assert!(client.encode(&empty).await.unwrap().is_empty());
    assert!(client.decode(&empty).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rot13_override() {
    let (client, _) = start_client().await;

    let payload = as_map(json!({"name": "John"}));

    let encoded = client
        .encode_with(CodecAlgorithm::Rot13, &payload)
        .await
        .unwrap();
    assert_eq!(encoded["name"], json!("\"Wbua\""));

    let decoded = client
        .decode_with(CodecAlgorithm::Rot13, &encoded)
        .await
        .unwrap();
    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn test_sign_and_verify() {
    let (client, _) = start_client().await;

    let data = json!({"message": "Hello World", "timestamp": 1616161616});

    let signature = client.sign(&data).await.unwrap();
    assert_eq!(signature.len(), 64);

    assert!(client.verify(&data, &signature).await.unwrap());

    // same data, different key order
    let reordered = json!({"timestamp": 1616161616, "message": "Hello World"});
    assert!(client.verify(&reordered, &signature).await.unwrap());

    // tampered data
    let tampered = json!({"message": "Goodbye World", "timestamp": 1616161616});
    assert!(!client.verify(&tampered, &signature).await.unwrap());

    // malformed tag
    assert!(!client.verify(&data, "invalid-signature").await.unwrap());
}

#[tokio::test]
async fn test_verify_status_codes() {
    let addr = start_test_server().await;
    let http = reqwest::Client::new();

    let data = json!({"message": "Hello World"});
    let signature = CloakClient::new(format!("http://{}", addr))
        .sign(&data)
        .await
        .unwrap();

    let valid = http
        .post(format!("http://{}/verify", addr))
        .json(&json!({"signature": signature, "data": data}))
        .send()
        .await
        .unwrap();
    assert_eq!(valid.status(), reqwest::StatusCode::NO_CONTENT);

    let invalid = http
        .post(format!("http://{}/verify", addr))
        .json(&json!({"signature": "bad", "data": data}))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: ErrorResponse = invalid.json().await.unwrap();
    assert_eq!(body.error, "INVALID_SIGNATURE");
}

#[tokio::test]
async fn test_unknown_algorithm_rejected() {
    let addr = start_test_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("http://{}/encrypt?algorithm=aes-256", addr))
        .json(&json!({"name": "John"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "UNKNOWN_ALGORITHM");
    assert!(body.message.contains("aes-256"));
}

#[tokio::test]
async fn test_non_object_bodies_rejected() {
    let addr = start_test_server().await;
    let http = reqwest::Client::new();

    for endpoint in ["encrypt", "decrypt", "sign"] {
        for body in [json!("string"), json!(123), json!([1, 2, 3]), json!(null)] {
            let response = http
                .post(format!("http://{}/{}", addr, endpoint))
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                reqwest::StatusCode::BAD_REQUEST,
                "{} should reject {}",
                endpoint,
                body
            );
        }
    }
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let addr = start_test_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("http://{}/encrypt", addr))
        .header("content-type", "application/json")
        .body("{not valid json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_requires_object_data() {
    let addr = start_test_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("http://{}/verify", addr))
        .json(&json!({"signature": "abc", "data": [1, 2, 3]}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "PARSE_ERROR");
}

#[tokio::test]
async fn test_health() {
    let addr = start_test_server().await;

    let response = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
}
