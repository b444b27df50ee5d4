use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vodarr::config::Config;

fn write_doc(root: &std::path::Path, rel: &str, body: &serde_json::Value) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(body).unwrap()).unwrap();
}

fn movie_doc() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "title": "A",
        "year": 2020,
        "thumbnail": "t.jpg",
        "description": "d",
        "tags": "x",
        "draft": false,
        "video": { "source_type": "mp4", "source": "a.mp4" }
    })
}

fn show_doc(tv: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "tv": tv,
        "title": title,
        "description": "d",
        "thumbnail": "s.jpg",
        "year": 2019,
        "tags": "drama"
    })
}

async fn spawn_app(content_root: &std::path::Path) -> Router {
    let mut config = Config::default();
    config.source.content_path = content_root.display().to_string();

    let state = vodarr::api::create_app_state(config)
        .await
        .expect("Failed to create app state");
    vodarr::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_movies_response_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "movies/1.json", &movie_doc());
    let app = spawn_app(dir.path()).await;

    let (status, content_type, body) = get(&app, "/api/movies.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        r#"[{"id":1,"title":"A","year":2020,"thumbnail":"t.jpg","description":"d","tags":"x"}]"#
    );
}

#[tokio::test]
async fn test_draft_movie_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = movie_doc();
    doc["draft"] = serde_json::json!(true);
    write_doc(dir.path(), "movies/1.json", &doc);
    let app = spawn_app(dir.path()).await;

    let (status, _, body) = get(&app, "/api/movies.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_empty_collections_return_empty_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    for uri in ["/api/movies.json", "/api/shows.json", "/api/anime.json"] {
        let (status, content_type, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("application/json"), "{uri}");
        assert_eq!(body, "[]", "{uri}");
    }
}

#[tokio::test]
async fn test_shows_and_anime_are_separate_collections() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "shows/1.json", &show_doc(1, "Show one"));
    write_doc(dir.path(), "anime/1.json", &show_doc(1, "Anime one"));
    let app = spawn_app(dir.path()).await;

    let (_, _, shows) = get(&app, "/api/shows.json").await;
    let (_, _, anime) = get(&app, "/api/anime.json").await;

    let shows: serde_json::Value = serde_json::from_str(&shows).unwrap();
    let anime: serde_json::Value = serde_json::from_str(&anime).unwrap();

    assert_eq!(shows.as_array().unwrap().len(), 1);
    assert_eq!(anime.as_array().unwrap().len(), 1);
    assert_eq!(shows[0]["title"], "Show one");
    assert_eq!(anime[0]["title"], "Anime one");
    assert_eq!(shows[0]["tv"], 1);
}

#[tokio::test]
async fn test_show_projection_has_exact_field_set() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "shows/1.json", &show_doc(3, "S"));
    let app = spawn_app(dir.path()).await;

    let (_, _, body) = get(&app, "/api/shows.json").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    let mut keys: Vec<&str> = value[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["description", "tags", "thumbnail", "title", "tv", "year"]
    );
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "movies/1.json", &movie_doc());
    let mut second = movie_doc();
    second["id"] = serde_json::json!(2);
    second["title"] = serde_json::json!("B");
    write_doc(dir.path(), "movies/2.json", &second);
    let app = spawn_app(dir.path()).await;

    let (_, _, first) = get(&app, "/api/movies.json").await;
    let (_, _, again) = get(&app, "/api/movies.json").await;

    assert_eq!(first, again);
}

#[tokio::test]
async fn test_discovery_order_follows_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut b = movie_doc();
    b["id"] = serde_json::json!(2);
    b["title"] = serde_json::json!("B");
    write_doc(dir.path(), "movies/b.json", &b);
    write_doc(dir.path(), "movies/a.json", &movie_doc());
    let app = spawn_app(dir.path()).await;

    let (_, _, body) = get(&app, "/api/movies.json").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(value[0]["title"], "A");
    assert_eq!(value[1]["title"], "B");
}

#[tokio::test]
async fn test_invalid_document_is_opaque_server_fault() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = movie_doc();
    doc["video"]["source_type"] = serde_json::json!("avi");
    write_doc(dir.path(), "movies/1.json", &doc);
    let app = spawn_app(dir.path()).await;

    let (status, _, _) = get(&app, "/api/movies.json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_system_status_reports_public_counts() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "movies/1.json", &movie_doc());
    let mut draft = movie_doc();
    draft["id"] = serde_json::json!(2);
    draft["draft"] = serde_json::json!(true);
    write_doc(dir.path(), "movies/2.json", &draft);
    write_doc(dir.path(), "anime/1.json", &show_doc(1, "Anime one"));
    let app = spawn_app(dir.path()).await;

    let (status, _, body) = get(&app, "/api/system/status").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["movies"], 1);
    assert_eq!(value["data"]["shows"], 0);
    assert_eq!(value["data"]["anime"], 1);
    assert_eq!(value["data"]["source_mode"], "files");
}
