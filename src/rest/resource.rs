//! RESTful resources and their action handler sets.

use super::{constraint::Constraint, handler::Handler, middleware::Middleware};
use crate::utils::join_paths;
use axum::{body::Body, response::IntoResponse};
use http::Request;
use std::future::Future;

macro_rules! action_setter {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name<F, Fut, R>(mut self, handler: F) -> Self
        where
            F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoResponse + 'static,
        {
            self.$name = Some(Handler::new(handler));
            self
        }
    };
}

/// The set of handlers for a RESTful [`Resource`].
///
/// Each of the seven conventional actions is an explicit optional field,
/// populated through builder methods; unset actions simply produce no route.
///
/// ```rust
/// use axum::{body::Body, http::Request, response::IntoResponse};
/// use axum_resource::ResourceHandlers;
///
/// async fn index(_req: Request<Body>) -> impl IntoResponse { "all" }
/// async fn show(_req: Request<Body>) -> impl IntoResponse { "one" }
///
/// let handlers = ResourceHandlers::new().index(index).show(show);
/// ```
#[derive(Debug, Default)]
pub struct ResourceHandlers {
    pub(crate) index: Option<Handler>,
    pub(crate) show: Option<Handler>,
    pub(crate) create: Option<Handler>,
    pub(crate) update: Option<Handler>,
    pub(crate) delete: Option<Handler>,
    pub(crate) new_form: Option<Handler>,
    pub(crate) edit: Option<Handler>,
}

impl ResourceHandlers {
    /// Creates an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    action_setter!(
        /// Sets the Index handler (`GET /name`).
        index
    );
    action_setter!(
        /// Sets the Show handler (`GET /name/{id}`).
        show
    );
    action_setter!(
        /// Sets the Create handler (`POST /name`).
        create
    );
    action_setter!(
        /// Sets the Update handler (`PUT /name/{id}`).
        update
    );
    action_setter!(
        /// Sets the Delete handler (`DELETE /name/{id}`).
        delete
    );
    action_setter!(
        /// Sets the New handler (`GET /name/new`), serving the creation form.
        new_form
    );
    action_setter!(
        /// Sets the Edit handler (`GET /name/{id}/edit`).
        edit
    );
}

/// A RESTful resource: a named path prefix, a set of action handlers, and
/// the middleware and constraints applied to the routes it expands into.
///
/// Created via [`RestRouter::resource`](super::RestRouter::resource), which
/// returns a mutable reference for chained configuration. The resource is
/// owned by exactly one router and consumed by its build step.
#[derive(Debug)]
pub struct Resource {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) handlers: ResourceHandlers,
    pub(crate) middleware: Vec<Middleware>,
    pub(crate) constraints: Vec<Constraint>,
}

impl Resource {
    pub(crate) fn new(name: &str, handlers: ResourceHandlers) -> Self {
        Self {
            path: join_paths("/", name),
            name: name.to_string(),
            handlers,
            middleware: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Appends resource-specific middleware, applied inside the router-level
    /// middleware.
    pub fn with_middleware(&mut self, middleware: Middleware) -> &mut Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a single parameter constraint, enforced on member routes.
    pub fn constraint(&mut self, constraint: Constraint) -> &mut Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends parameter constraints, enforced on member routes.
    pub fn constraints(&mut self, constraints: impl IntoIterator<Item = Constraint>) -> &mut Self {
        self.constraints.extend(constraints);
        self
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resource path prefix.
    pub fn path(&self) -> &str {
        &self.path
    }
}
