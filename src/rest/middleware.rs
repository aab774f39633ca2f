//! Handler-wrapping middleware and its composition order.

use super::handler::Handler;
use std::{fmt, sync::Arc};

/// A handler-wrapping function.
///
/// A middleware receives the next handler in the chain and returns a new
/// handler around it, free to run logic before and after forwarding:
///
/// ```rust
/// use axum_resource::{Handler, Middleware};
///
/// let timing = Middleware::new(|next| {
///     Handler::new(move |req| {
///         let next = next.clone();
///         async move {
///             let start = std::time::Instant::now();
///             let response = next.call(req).await;
///             tracing::debug!(elapsed = ?start.elapsed(), "request handled");
///             response
///         }
///     })
/// });
/// ```
#[derive(Clone)]
pub struct Middleware(Arc<dyn Fn(Handler) -> Handler + Send + Sync + 'static>);

impl Middleware {
    /// Wraps a handler-wrapping closure as a `Middleware`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wraps the given handler with this middleware.
    pub fn wrap(&self, handler: Handler) -> Handler {
        (self.0)(handler)
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Middleware(..)")
    }
}

/// Composes a middleware list around a handler.
///
/// Wraps right-to-left so the first middleware in the list becomes the
/// outermost wrapper: given `[A, B]`, a request sees A's pre-logic, then B's,
/// then the handler, then B's post-logic, then A's.
pub fn apply_middleware(handler: Handler, middleware: &[Middleware]) -> Handler {
    middleware
        .iter()
        .rev()
        .fold(handler, |handler, mw| mw.wrap(handler))
}
