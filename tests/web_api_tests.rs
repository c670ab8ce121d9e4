use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pathgraph::graph::generators::generate_grid;
use pathgraph::io;
use pathgraph::web::{build_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_text(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &Router, graph: &str) -> String {
    let (status, summary) = send_json(app, post_text("/api/graphs", graph)).await;
    assert_eq!(status, StatusCode::CREATED);
    summary["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = build_app(&ServerConfig::default());
    let (status, body) = send_json(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_search_integer_graph() {
    let app = build_app(&ServerConfig::default());
    let id = create(&app, "0 1,5 2,2\n1 2,1\n2").await;

    let (status, summary) = send_json(&app, get(&format!("/api/graphs/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["vertex_count"], 3);
    assert_eq!(summary["arc_count"], 3);
    assert_eq!(summary["mapped"], false);

    let (status, result) = send_json(
        &app,
        post_json(
            &format!("/api/graphs/{}/search", id),
            json!({ "source": 0, "destination": 2 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["distance"], 2);
    assert_eq!(result["path"], json!(["0", "2"]));
    assert_eq!(result["visited_destination"], true);
    assert_eq!(result["predecessors"]["2"], json!(["0"]));

    let (_, result) = send_json(
        &app,
        post_json(&format!("/api/graphs/{}/search", id), json!({ "source": "0" })),
    )
    .await;
    assert_eq!(result["distances"], json!({ "0": 0, "1": 5, "2": 2 }));
    assert_eq!(result["reachable"], 3);

    let (_, summary) = send_json(&app, get(&format!("/api/graphs/{}", id))).await;
    assert_eq!(summary["searches"], 2);
}

#[tokio::test]
async fn test_search_mapped_graph_with_ties() {
    let app = build_app(&ServerConfig::default());
    let id = create(&app, "a b,1 c,1\nb d,1\nc d,1\nd").await;

    let (status, result) = send_json(
        &app,
        post_json(
            &format!("/api/graphs/{}/search", id),
            json!({ "source": "a", "destination": "d", "all_paths": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["distance"], 2);

    let mut preds: Vec<String> = serde_json::from_value(result["predecessors"]["d"].clone()).unwrap();
    preds.sort();
    assert_eq!(preds, vec!["b", "c"]);

    let mut paths: Vec<Vec<String>> = serde_json::from_value(result["all_paths"].clone()).unwrap();
    paths.sort();
    assert_eq!(paths, vec![vec!["a", "b", "d"], vec!["a", "c", "d"]]);
}

#[tokio::test]
async fn test_export_round_trips() {
    let app = build_app(&ServerConfig::default());
    let id = create(&app, "x y,3\ny z,4\nz").await;

    let (status, body) = send(&app, get(&format!("/api/graphs/{}/export", id))).await;
    assert_eq!(status, StatusCode::OK);

    let graph = io::parse_str(&String::from_utf8(body).unwrap()).unwrap();
    assert!(graph.is_mapped());
    assert_eq!(graph.resolve_label("z").unwrap(), 2);
}

#[tokio::test]
async fn test_rejects_malformed_graph() {
    let app = build_app(&ServerConfig::default());

    let (status, body) = send_json(&app, post_text("/api/graphs", "0 1:5")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "wrong_format");

    let (status, body) = send_json(&app, post_text("/api/graphs", "0 1,1\n1 b,2")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "mixed_mode");

    let (status, body) = send_json(&app, post_text("/api/graphs", "0 7,1")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_failed");
}

#[tokio::test]
async fn test_unknown_session_and_vertex() {
    let app = build_app(&ServerConfig::default());

    let (status, body) = send_json(
        &app,
        get("/api/graphs/00000000-0000-0000-0000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session_not_found");

    let id = create(&app, "0 1,1\n1").await;
    let (status, body) = send_json(
        &app,
        post_json(&format!("/api/graphs/{}/search", id), json!({ "source": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "vertex_not_found");
}

#[tokio::test]
async fn test_delete_and_list_sessions() {
    let app = build_app(&ServerConfig::default());
    let first = create(&app, "0").await;
    let _second = create(&app, "0 1,1\n1").await;

    let (_, sessions) = send_json(&app, get("/api/sessions")).await;
    assert_eq!(sessions.as_array().unwrap().len(), 2);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/graphs/{}", first))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&format!("/api/graphs/{}", first))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_limit_evicts_oldest() {
    let config = ServerConfig {
        max_sessions: 2,
        ..Default::default()
    };
    let app = build_app(&config);

    let first = create(&app, "0").await;
    create(&app, "1").await;
    create(&app, "2").await;

    let (_, sessions) = send_json(&app, get("/api/sessions")).await;
    assert_eq!(sessions.as_array().unwrap().len(), 2);
    let (status, _) = send(&app, get(&format!("/api/graphs/{}", first))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_all_paths_are_capped() {
    let config = ServerConfig {
        max_paths: 5,
        ..Default::default()
    };
    let app = build_app(&config);
    // a 3x3 unit grid has six shortest paths between opposite corners
    let id = create(&app, &io::to_text(&generate_grid(3, 3)).unwrap()).await;
    let uri = format!("/api/graphs/{}/search", id);

    let (status, result) = send_json(
        &app,
        post_json(&uri, json!({ "source": 0, "destination": 8, "all_paths": true, "max_paths": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["distance"], 4);
    assert_eq!(result["all_paths"].as_array().unwrap().len(), 2);
    assert_eq!(result["all_paths_truncated"], true);
    assert_eq!(result["visited_destination"], true);

    // the request cannot raise the server limit
    let (_, result) = send_json(
        &app,
        post_json(&uri, json!({ "source": 0, "destination": 8, "all_paths": true, "max_paths": 100 })),
    )
    .await;
    assert_eq!(result["all_paths"].as_array().unwrap().len(), 5);
    assert_eq!(result["all_paths_truncated"], true);

    let app = build_app(&ServerConfig::default());
    let id = create(&app, &io::to_text(&generate_grid(3, 3)).unwrap()).await;
    let (_, result) = send_json(
        &app,
        post_json(
            &format!("/api/graphs/{}/search", id),
            json!({ "source": 0, "destination": 8, "all_paths": true }),
        ),
    )
    .await;
    assert_eq!(result["all_paths"].as_array().unwrap().len(), 6);
    assert!(result.get("all_paths_truncated").is_none());
}

#[tokio::test]
async fn test_rejects_oversized_vertex_label() {
    let config = ServerConfig {
        max_vertices: 100,
        ..Default::default()
    };
    let app = build_app(&config);

    let (status, body) = send_json(&app, post_text("/api/graphs", "0 1,1\n1\n100")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "wrong_format");

    let (status, body) =
        send_json(&app, post_text("/api/graphs", "18446744073709551615")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "wrong_format");
}
