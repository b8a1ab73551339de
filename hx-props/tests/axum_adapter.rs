//! Integration tests for the axum adapter
//!
//! Routes registered from props bags must answer on the resolved method and
//! path only.

#![cfg(feature = "axum")]

use axum::{body::Body, Router};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use hx_props::adapters::axum::{route, HxEndpoint};
use hx_props::assemble::SerializationConfig;
use hx_props::props::PropsBag;
use tower::ServiceExt;

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_route_registers_resolved_method() {
    let props = PropsBag::new().post("/todos");
    let app = route(Router::new(), &props, || async { "created" });

    let (status, body) = send(app.clone(), "POST", "/todos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "created");

    let (status, _) = send(app, "GET", "/todos").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_route_key_registers_get() {
    let app = route(Router::new(), &PropsBag::new().route(" /items "), || async {
        "items"
    });

    let (status, body) = send(app, "GET", "/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "items");
}

#[tokio::test]
async fn test_missing_route_leaves_router_unchanged() {
    let app = route(Router::new(), &PropsBag::new().delete("  "), || async {
        "unreachable"
    });

    let (status, _) = send(app, "DELETE", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_relative_route_is_not_registered() {
    let app = route(Router::new(), &PropsBag::new().get("items"), || async {
        "unreachable"
    });

    let (status, _) = send(app, "GET", "/items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_colon_capture_is_not_registered() {
    let app = route(Router::new(), &PropsBag::new().get("/todos/:id"), || async {
        "unreachable"
    });
    let app = route(app, &PropsBag::new().get("/files/*rest"), || async {
        "unreachable"
    });
    let app = route(app, &PropsBag::new().get("/todos/{id"), || async {
        "unreachable"
    });

    let (status, _) = send(app, "GET", "/todos/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_brace_capture_is_registered() {
    let app = route(Router::new(), &PropsBag::new().put("/todos/{id}"), || async {
        "updated"
    });

    let (status, body) = send(app, "PUT", "/todos/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "updated");
}

#[test]
#[should_panic(expected = "Overlapping method route")]
fn test_registering_same_route_twice_panics() {
    let props = PropsBag::new().get("/todos");
    let app = route(Router::<()>::new(), &props, || async { "first" });
    let _ = route(app, &props, || async { "second" });
}

#[tokio::test]
async fn test_endpoint_markup_follows_its_config() {
    let endpoint = HxEndpoint::new(PropsBag::new().post("/search").on("Click", "() => a && b"))
        .with_config(SerializationConfig {
            stringify: false,
            escape: false,
        });
    let app = endpoint.register(Router::new(), || async { "results" });

    assert_eq!(
        endpoint.attributes(),
        r#"hx-post="/search" onclick="(() => { return (() => a && b)(event) })()""#
    );
    assert_eq!(send(app, "POST", "/search").await.1, "results");
}

#[tokio::test]
async fn test_endpoints_share_markup_and_routes() {
    let list = HxEndpoint::new(PropsBag::new().get("/todos"));
    let add = HxEndpoint::new(
        PropsBag::new()
            .post("/todos")
            .on("Click", "(e) => e.target.disabled = true"),
    );
    let remove = HxEndpoint::new(PropsBag::new().delete("/todos/1"));

    let app = Router::new();
    let app = list.register(app, || async { "<ul></ul>" });
    let app = add.register(app, || async { "<li>new</li>" });
    let app = remove.register(app, || async { "" });

    assert_eq!(list.attributes(), r#"hx-get="/todos""#);
    assert!(add.attributes().starts_with(r#"hx-post="/todos" onclick=""#));
    assert_eq!(remove.attributes(), r#"hx-delete="/todos/1""#);

    assert_eq!(send(app.clone(), "GET", "/todos").await.1, "<ul></ul>");
    assert_eq!(send(app.clone(), "POST", "/todos").await.1, "<li>new</li>");
    assert_eq!(send(app, "DELETE", "/todos/1").await.0, StatusCode::OK);
}
