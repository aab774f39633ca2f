//! Benchmarks for measuring dispatch overhead.
//!
//! These benchmarks compare a bare axum router against routers built through
//! the resource expansion, with and without middleware and constraints, to
//! track the cost of the precomposed handler chains.

use axum::{Router, body::Body, http::Request, routing::get};
use axum_resource::{Constraint, Handler, Middleware, ResourceHandlers, RestRouter};
use criterion::{Criterion, criterion_group, criterion_main};
use regex::Regex;
use std::hint::black_box;
use tower::ServiceExt;

/// Simple handler that returns immediately
async fn handler() -> &'static str {
    "OK"
}

async fn rest_handler(_req: Request<Body>) -> &'static str {
    "OK"
}

/// Creates a minimal request for benchmarking
fn test_request(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Middleware that forwards without doing any work.
fn passthrough() -> Middleware {
    Middleware::new(|next| {
        Handler::new(move |req| {
            let next = next.clone();
            async move { next.call(req).await }
        })
    })
}

/// Benchmark: bare axum router (no resource expansion)
fn bench_bare_axum(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let router = Router::new().route("/widgets", get(handler));

    c.bench_function("bare_axum", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router.clone().oneshot(test_request("/widgets")).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: resource-built router with no middleware
fn bench_resource_no_middleware(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut rest = RestRouter::new();
    rest.resource("widgets", ResourceHandlers::new().index(rest_handler));
    let router = rest.build().unwrap();

    c.bench_function("resource_no_middleware", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router.clone().oneshot(test_request("/widgets")).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: resource-built router with a five-deep middleware chain
fn bench_middleware_chain(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut rest = RestRouter::new();
    for _ in 0..5 {
        rest.use_middleware(passthrough());
    }
    rest.resource("widgets", ResourceHandlers::new().index(rest_handler));
    let router = rest.build().unwrap();

    c.bench_function("middleware_chain_5", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router.clone().oneshot(test_request("/widgets")).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: constrained member route dispatch
fn bench_constrained_member(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut rest = RestRouter::new();
    rest.resource("widgets", ResourceHandlers::new().show(rest_handler))
        .constraint(Constraint::new("id").pattern(Regex::new("^[0-9]+$").unwrap()));
    let router = rest.build().unwrap();

    c.bench_function("constrained_member", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router
                .clone()
                .oneshot(test_request("/widgets/42"))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_bare_axum,
    bench_resource_no_middleware,
    bench_middleware_chain,
    bench_constrained_member
);
criterion_main!(benches);
