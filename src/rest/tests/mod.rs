//! Test helpers and utilities for the routing tests.
//!
//! These tests use `tower::ServiceExt::oneshot` for fast, in-process
//! dispatch through a built `axum::Router` without network I/O.
//!
//! ## Available Helpers
//!
//! - Handler builders: `marker()`, `logging_handler()`, `full_handlers()`
//! - Middleware builders: `recording_middleware()`
//! - Dispatch helpers: `dispatch()`, `body_string()`

use crate::rest::{Handler, Middleware, ResourceHandlers};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use std::{
    future::{Ready, ready},
    sync::{Arc, Mutex},
};
use tower::ServiceExt;


/// Shared, ordered record of handler and middleware activity.
pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// A handler that answers with a fixed marker body.
pub(crate) fn marker(body: &'static str) -> impl Fn(Request<Body>) -> Ready<&'static str> {
    move |_req| ready(body)
}

/// A handler that records its invocation in the log and answers with the
/// marker body.
pub(crate) fn logging_handler(
    label: &'static str,
    log: CallLog,
) -> impl Fn(Request<Body>) -> Ready<&'static str> {
    move |_req| {
        log.lock().unwrap().push(label.to_string());
        ready(label)
    }
}

/// Middleware that records `label:pre` before forwarding and `label:post`
/// after.
pub(crate) fn recording_middleware(label: &'static str, log: CallLog) -> Middleware {
    Middleware::new(move |next| {
        let log = log.clone();
        Handler::new(move |req| {
            let log = log.clone();
            let next = next.clone();
            async move {
                log.lock().unwrap().push(format!("{label}:pre"));
                let response = next.call(req).await;
                log.lock().unwrap().push(format!("{label}:post"));
                response
            }
        })
    })
}

/// All seven conventional actions, each answering with its own name.
pub(crate) fn full_handlers() -> ResourceHandlers {
    ResourceHandlers::new()
        .index(marker("index"))
        .show(marker("show"))
        .create(marker("create"))
        .update(marker("update"))
        .delete(marker("delete"))
        .new_form(marker("new"))
        .edit(marker("edit"))
}

/// Dispatches a single request through the built router.
pub(crate) async fn dispatch(router: &Router, method: &str, uri: &str) -> Response {
    router
        .clone()
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

/// Extracts the body from a response as a String.
pub(crate) async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}
