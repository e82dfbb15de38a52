//! HTTP surface integration tests
//!
//! Boots the site on an ephemeral port and exercises the public routes with
//! raw HTTP requests.

use folio_core::config::Config;
use folio_core::media::MediaStore;
use folio_core::seed;
use folio_core::storage::Database;
use folio_server::{AppState, build_router};
use serde_json::Value;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_site(seeded: bool) -> (std::net::SocketAddr, TempDir) {
    let db = Database::in_memory().await.expect("in-memory database");
    let dir = TempDir::new().expect("tempdir");
    let media = MediaStore::new(dir.path());
    if seeded {
        seed::seed(&db, &media).await.expect("seed sample data");
    }

    let app = build_router(AppState::new(db, media, Config::default().site));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    (addr, dir)
}

async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("read response");
    let response = String::from_utf8_lossy(&response).to_string();

    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

/// Pull the embedded JSON payload out of the listing page
fn embedded_cards(body: &str) -> Value {
    let start = body
        .find("<script id=\"projects-data\" type=\"application/json\">")
        .expect("listing page embeds its data payload");
    let rest = &body[start..];
    let open = rest.find('>').expect("script open tag") + 1;
    let close = rest.find("</script>").expect("script close tag");
    let json = rest[open..close].replace("\\u003c", "<");
    serde_json::from_str(&json).expect("embedded payload is JSON")
}

#[tokio::test]
async fn home_page_renders_badges_and_featured() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(body.contains("GOLANG"));
    assert!(body.contains("CI/CD"));

    // Default curated ids are 1 and 2
    assert!(body.contains("Distributed Payment System"));
    assert!(body.contains("Cloud Migration API"));
    assert!(!body.contains("Real-time Analytics Engine"));
}

#[tokio::test]
async fn home_page_omits_missing_featured_ids() {
    let (addr, _media) = spawn_site(false).await;

    // Empty store: curated ids 1 and 2 simply don't resolve
    let (status, _, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(body.contains("Featured Projects"));
    assert!(!body.contains("Distributed Payment System"));
}

#[tokio::test]
async fn listing_shows_every_project_without_filter() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, body) = get(addr, "/projects").await;
    assert_eq!(status, 200);
    assert!(body.contains("Distributed Payment System"));
    assert!(body.contains("Cloud Migration API"));
    assert!(body.contains("Real-time Analytics Engine"));

    let cards = embedded_cards(&body);
    assert_eq!(cards.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn listing_filters_by_category() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, body) = get(addr, "/projects?category=WEB_DEV").await;
    assert_eq!(status, 200);
    assert!(body.contains("Distributed Payment System"));
    assert!(!body.contains("Cloud Migration API"));

    let (status, _, body) = get(addr, "/projects?category=SYS_DESIGN").await;
    assert_eq!(status, 200);
    let cards = embedded_cards(&body);
    assert_eq!(cards.as_array().map(Vec::len), Some(2));

    let (status, _, body) = get(addr, "/projects?category=all").await;
    assert_eq!(status, 200);
    let cards = embedded_cards(&body);
    assert_eq!(cards.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn unknown_category_yields_empty_listing_not_error() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, body) = get(addr, "/projects?category=BOGUS").await;
    assert_eq!(status, 200);
    assert!(body.contains("No projects found"));
    assert!(!body.contains("Distributed Payment System"));

    let cards = embedded_cards(&body);
    assert_eq!(cards.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn embedded_payload_has_fixed_record_shape() {
    let (addr, _media) = spawn_site(true).await;

    let (_, _, body) = get(addr, "/projects").await;
    let cards = embedded_cards(&body);
    let first = &cards.as_array().expect("array")[0];

    for key in ["id", "title", "category", "year", "short_summary", "tags"] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(first["title"], "Distributed Payment System");
    assert_eq!(first["tags"], serde_json::json!(["GOLANG", "KAFKA", "REDIS"]));
}

#[tokio::test]
async fn detail_page_renders_project_fields() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, body) = get(addr, "/projects/1").await;
    assert_eq!(status, 200);
    assert!(body.contains("Distributed Payment System"));
    assert!(body.contains("Lead Backend Engineer"));
    assert!(body.contains("Web Development"));
    assert!(body.contains("KAFKA"));
    assert!(body.contains("https://github.com/example/payment-system"));

    // Trailing slash variant works as well
    let (status, _, _) = get(addr, "/projects/1/").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn detail_page_404_for_absent_ids() {
    let (addr, _media) = spawn_site(true).await;

    for id in [99999, 12345, 54321] {
        let (status, _, body) = get(addr, &format!("/projects/{id}")).await;
        assert_eq!(status, 404, "id {id} was never created");
        assert!(body.contains("404"));
    }
}

#[tokio::test]
async fn malformed_detail_id_is_a_404() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, _) = get(addr, "/projects/not-a-number").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn media_assets_are_served() {
    let (addr, _media) = spawn_site(true).await;

    let (status, head, _) = get(addr, "/media/projects/payment-system.png").await;
    assert_eq!(status, 200);
    assert!(head.to_lowercase().contains("content-type: image/png"));

    let (status, _, _) = get(addr, "/media/projects/nope.png").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn media_traversal_is_rejected() {
    let (addr, _media) = spawn_site(true).await;

    let (status, _, _) = get(addr, "/media/projects/..%2F..%2Fsecrets.txt").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn empty_store_renders_empty_listing() {
    let (addr, _media) = spawn_site(false).await;

    let (status, _, body) = get(addr, "/projects").await;
    assert_eq!(status, 200);
    assert!(body.contains("No projects found"));

    let cards = embedded_cards(&body);
    assert_eq!(cards.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn health_probe_reports_ok() {
    let (addr, _media) = spawn_site(false).await;

    let (status, _, body) = get(addr, "/healthz").await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn unknown_routes_get_the_404_page() {
    let (addr, _media) = spawn_site(false).await;

    let (status, _, body) = get(addr, "/nowhere").await;
    assert_eq!(status, 404);
    assert!(body.contains("404"));
}
