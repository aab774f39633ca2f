//! End-to-end routing tests against the public API.

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::IntoResponse,
};
use axum_resource::{
    Constraint, Error, Handler, Middleware, ResourceHandlers, RestRouter,
};
use regex::Regex;
use tower::ServiceExt;

async fn index(_req: Request<Body>) -> impl IntoResponse {
    "user list"
}

async fn show(_req: Request<Body>) -> impl IntoResponse {
    "user detail"
}

async fn missing(_req: Request<Body>) -> impl IntoResponse {
    Error::not_found("user 999 does not exist")
}

fn stamping_middleware(header: &'static str) -> Middleware {
    Middleware::new(move |next| {
        Handler::new(move |req| {
            let next = next.clone();
            async move {
                let mut response = next.call(req).await;
                response
                    .headers_mut()
                    .insert(header, axum::http::HeaderValue::from_static("1"));
                response
            }
        })
    })
}

fn build_app() -> axum::Router {
    let mut router = RestRouter::new();
    router.use_middleware(stamping_middleware("x-global"));
    router
        .resource(
            "users",
            ResourceHandlers::new().index(index).show(show),
        )
        .constraint(Constraint::new("id").pattern(Regex::new("^[0-9]+$").unwrap()));
    router.get("/missing", missing);
    router.namespace("admin", [stamping_middleware("x-admin")], |admin| {
        admin.get("/dashboard", |_req: Request<Body>| async { "dashboard" });
    });
    router.build().unwrap()
}

async fn send(app: &axum::Router, method: &str, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}

#[tokio::test]
async fn resource_routes_dispatch_through_global_middleware() {
    let app = build_app();

    let response = send(&app, "GET", "/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-global"));
    assert_eq!(body_string(response).await, "user list");
}

#[tokio::test]
async fn constrained_member_route_accepts_and_rejects() {
    let app = build_app();

    let response = send(&app, "GET", "/users/42").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "user detail");

    let response = send(&app, "GET", "/users/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid parameter");
}

#[tokio::test]
async fn namespace_routes_carry_scoped_middleware() {
    let app = build_app();

    let response = send(&app, "GET", "/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-admin"));
    assert!(response.headers().contains_key("x-global"));
}

#[tokio::test]
async fn application_errors_serialize_to_structured_json() {
    let app = build_app();

    let response = send(&app, "GET", "/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error_code"], "NOT_FOUND");
    assert_eq!(body["message"], "user 999 does not exist");
}

#[tokio::test]
async fn unknown_routes_are_a_404() {
    let app = build_app();
    let response = send(&app, "GET", "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
