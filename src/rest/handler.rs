//! The boxed request handler type used throughout the route table.

use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::Request;
use std::{fmt, future::Future, pin::Pin, sync::Arc};

/// The future returned by a [`Handler`] invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A cheap-to-clone request handler.
///
/// Handlers take the full `Request<Body>` and produce a response; parameter
/// extraction, body parsing and everything else stays with Axum. Any async
/// function or closure from a request to something implementing
/// `IntoResponse` converts into a `Handler`:
///
/// ```rust
/// use axum::{body::Body, http::Request};
/// use axum_resource::Handler;
///
/// async fn hello(_req: Request<Body>) -> &'static str {
///     "Hello, World!"
/// }
///
/// let handler = Handler::new(hello);
/// ```
///
/// Cloning is an `Arc` bump, which is what lets middleware and constraints
/// wrap handlers into precomposed chains at build time.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(Request<Body>) -> HandlerFuture + Send + Sync + 'static>);

impl Handler {
    /// Wraps an async function or closure as a `Handler`.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        Self(Arc::new(move |req| {
            let fut = f(req);
            Box::pin(async move { fut.await.into_response() })
        }))
    }

    /// Invokes the handler.
    pub fn call(&self, req: Request<Body>) -> HandlerFuture {
        (self.0)(req)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
