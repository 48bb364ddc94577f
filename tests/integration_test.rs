//! Integration tests using TestServer harness

mod harness;

use std::sync::Arc;

use harness::{StubModel, TestServer};
use mudworksd::config::Config;
use mudworksd::gemini::{GeminiClient, GenerativeModel, Part, DEFAULT_BASE_URL};

const ARTWORK: &str = "data:image/png;base64,AAAA";
const ROOM_STYLE: &str = "A bright, modern minimalist living room";

#[tokio::test]
async fn test_server_starts_and_responds() {
    let server = TestServer::start(StubModel::empty())
        .await
        .expect("Failed to start server");

    let resp = server.get("/").await.expect("Failed to get root");
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "mudworksd");
}

#[tokio::test]
async fn test_health_endpoint_reports_ai_configuration() {
    let server = TestServer::start(StubModel::empty())
        .await
        .expect("Failed to start server");

    let resp = server.get("/health").await.expect("Failed to get health");
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai"], "unconfigured");

    let mut config = Config::default();
    config.gemini.api_key = Some("test-key".to_string());
    let server = TestServer::start_with_config(config, StubModel::empty())
        .await
        .expect("Failed to start server");

    let body: serde_json::Value = server.get("/health").await.unwrap().json().await.unwrap();
    assert_eq!(body["ai"], "configured");
}

#[tokio::test]
async fn test_parallel_servers() {
    let server1 = TestServer::start(StubModel::empty()).await.unwrap();
    let server2 = TestServer::start(StubModel::empty()).await.unwrap();

    assert_ne!(server1.addr, server2.addr);

    assert_eq!(server1.get("/health").await.unwrap().status(), 200);
    assert_eq!(server2.get("/health").await.unwrap().status(), 200);
}

// --- Catalog ---

#[tokio::test]
async fn test_product_listing_and_lookup() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let products: serde_json::Value = server.get("/api/products").await.unwrap().json().await.unwrap();
    assert_eq!(products.as_array().unwrap().len(), 12);
    assert_eq!(products[0]["id"], "prod-1");
    assert_eq!(products[0]["imageId"], "mud-art-1");

    let product: serde_json::Value = server
        .get("/api/products/prod-5")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(product["name"], "Clay Moons");

    let resp = server.get("/api/products/prod-999").await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_categories_faqs_and_room_styles() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let categories: serde_json::Value =
        server.get("/api/categories").await.unwrap().json().await.unwrap();
    assert_eq!(categories.as_array().unwrap().len(), 4);

    let faqs: serde_json::Value = server.get("/api/faqs").await.unwrap().json().await.unwrap();
    assert_eq!(faqs.as_array().unwrap().len(), 4);

    let styles: serde_json::Value =
        server.get("/api/room-styles").await.unwrap().json().await.unwrap();
    assert_eq!(styles.as_array().unwrap().len(), 4);
    assert_eq!(styles[0], ROOM_STYLE);
}

// --- Inquiry ---

#[tokio::test]
async fn test_inquiry_accepted() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let resp = server
        .post(
            "/api/inquiry",
            &serde_json::json!({
                "name": "Priya",
                "email": "priya@example.com",
                "message": "I would like to ask about a custom piece."
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["name"], "Priya");
}

#[tokio::test]
async fn test_inquiry_validation() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let resp = server
        .post(
            "/api/inquiry",
            &serde_json::json!({
                "name": "Priya",
                "email": "not-an-email",
                "message": "I would like to ask about a custom piece."
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Please enter a valid email address.");
}

// --- Idea flow ---

#[tokio::test]
async fn test_art_idea_success() {
    let stub = StubModel::returning(vec![Part::text(
        r#"{"name": "Forest Hush", "description": "Layered loam and moss-green pigment."}"#,
    )]);
    let server = TestServer::start(stub).await.unwrap();

    let resp = server
        .post(
            "/api/art-idea",
            &serde_json::json!({"prompt": "a quiet forest floor"}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Forest Hush");
    assert_eq!(body["description"], "Layered loam and moss-green pigment.");
}

#[tokio::test]
async fn test_art_idea_prompt_too_short() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let resp = server
        .post("/api/art-idea", &serde_json::json!({"prompt": "mud"}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Please enter at least 10 characters to spark an idea."
    );
}

#[tokio::test]
async fn test_art_idea_failure_propagates() {
    // Fail-open: the flow error surfaces as a gateway error, not a default object
    let server = TestServer::start(StubModel::failing()).await.unwrap();

    let resp = server
        .post(
            "/api/art-idea",
            &serde_json::json!({"prompt": "a quiet forest floor"}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("500"));
}

// --- Visualization flow ---

#[tokio::test]
async fn test_visualize_success() {
    let stub = StubModel::returning(vec![Part::inline_data("image/png", "QUJD")]);
    let server = TestServer::start(stub).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["generatedImage"], "data:image/png;base64,QUJD");
    assert!(body.get("errorKind").is_none());
}

#[tokio::test]
async fn test_visualize_rate_limited() {
    let server = TestServer::start(StubModel::rate_limited()).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    // Fail-closed: still a 200, the outcome is data
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["generatedImage"], "");
    assert_eq!(body["errorKind"], "rate-limited");
}

#[tokio::test]
async fn test_visualize_generation_failed_on_empty_response() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["generatedImage"], "");
    assert_eq!(body["errorKind"], "generation-failed");
}

#[tokio::test]
async fn test_visualize_generation_failed_on_error() {
    let server = TestServer::start(StubModel::failing()).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["generatedImage"], "");
    assert_eq!(body["errorKind"], "generation-failed");
}

#[tokio::test]
async fn test_visualize_rejects_malformed_payload() {
    let server = TestServer::start(StubModel::empty()).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": "not-a-data-uri", "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    // A non-image media type is also rejected before invocation
    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({
                "artworkImage": "data:application/pdf;base64,AAAA",
                "roomStyle": ROOM_STYLE
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": "  "}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn test_visualize_with_unconfigured_real_client() {
    // The real client with no API key fails before any network call; the
    // flow still normalizes that into generation-failed
    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::with_credentials(
        None,
        DEFAULT_BASE_URL.to_string(),
    ));
    let server = TestServer::start(model).await.unwrap();

    let resp = server
        .post(
            "/api/visualize",
            &serde_json::json!({"artworkImage": ARTWORK, "roomStyle": ROOM_STYLE}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["generatedImage"], "");
    assert_eq!(body["errorKind"], "generation-failed");
}
