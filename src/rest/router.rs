//! Core `RestRouter` struct, verb registration and namespace composition.

use super::{
    handler::Handler,
    middleware::{Middleware, apply_middleware},
    resource::{Resource, ResourceHandlers},
};
use crate::utils::join_paths;
use axum::{body::Body, response::IntoResponse};
use http::{Method, Request};
use std::future::Future;

/// A route maps a handler to a path and HTTP method. Immutable once built.
#[derive(Debug)]
pub struct Route {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) handler: Handler,
}

impl Route {
    /// Returns the HTTP method of the route.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the path pattern of the route.
    pub fn path(&self) -> &str {
        &self.path
    }
}

macro_rules! verb_method {
    ($(#[$doc:meta])* $name:ident, $method:expr) => {
        $(#[$doc])*
        pub fn $name<F, Fut, R>(&mut self, path: impl Into<String>, handler: F)
        where
            F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoResponse + 'static,
        {
            self.route($method, path, Handler::new(handler));
        }
    };
}

/// The declaration-phase router.
///
/// Owns the route list, the resource list and the router-level middleware
/// list. All declaration happens through `&mut self` with no side effects;
/// nothing is registered with Axum until [`build`](RestRouter::build) runs.
/// `build` consumes the router, so the finalized route table cannot be
/// mutated or registered twice.
///
/// Declaration is expected to run once, single-threaded, during process
/// startup. After the build, request dispatch is handled entirely by Axum's
/// own concurrency model against the precomposed handler chains.
///
/// ```rust
/// use axum::{body::Body, http::Request, response::IntoResponse};
/// use axum_resource::{Constraint, ResourceHandlers, RestRouter};
/// use regex::Regex;
///
/// async fn index(_req: Request<Body>) -> impl IntoResponse { "all users" }
/// async fn show(_req: Request<Body>) -> impl IntoResponse { "one user" }
///
/// let mut router = RestRouter::new();
/// router
///     .resource("users", ResourceHandlers::new().index(index).show(show))
///     .constraint(Constraint::new("id").pattern(Regex::new("^[0-9]+$").unwrap()));
///
/// let app: axum::Router = router.build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct RestRouter {
    pub(crate) routes: Vec<Route>,
    pub(crate) resources: Vec<Resource>,
    pub(crate) middleware: Vec<Middleware>,
}

impl RestRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    verb_method!(
        /// Registers a GET route.
        get,
        Method::GET
    );
    verb_method!(
        /// Registers a POST route.
        post,
        Method::POST
    );
    verb_method!(
        /// Registers a PUT route.
        put,
        Method::PUT
    );
    verb_method!(
        /// Registers a DELETE route.
        delete,
        Method::DELETE
    );
    verb_method!(
        /// Registers a PATCH route.
        patch,
        Method::PATCH
    );
    verb_method!(
        /// Registers an OPTIONS route.
        options,
        Method::OPTIONS
    );
    verb_method!(
        /// Registers a HEAD route.
        head,
        Method::HEAD
    );

    /// Appends a route for an arbitrary method and a prebuilt [`Handler`].
    ///
    /// The verb methods are the usual entry point; this is the escape hatch
    /// for handlers built elsewhere.
    pub fn route(&mut self, method: Method, path: impl Into<String>, handler: Handler) {
        self.routes.push(Route {
            method,
            path: path.into(),
            handler,
        });
    }

    /// Appends router-level middleware, applied to every route and resource
    /// this router builds. First registered is outermost.
    pub fn use_middleware(&mut self, middleware: Middleware) {
        self.middleware.push(middleware);
    }

    /// Creates a new RESTful resource on this router.
    ///
    /// The resource's path prefix is `"/" + name`. The returned reference
    /// allows chained configuration:
    ///
    /// ```rust
    /// # use axum::{body::Body, http::Request, response::IntoResponse};
    /// # use axum_resource::{Constraint, Middleware, ResourceHandlers, RestRouter};
    /// # async fn index(_req: Request<Body>) -> impl IntoResponse { "ok" }
    /// # let auth = Middleware::new(|next| next);
    /// # let mut router = RestRouter::new();
    /// router
    ///     .resource("posts", ResourceHandlers::new().index(index))
    ///     .with_middleware(auth)
    ///     .constraint(Constraint::new("id").validate(|id| !id.is_empty()));
    /// ```
    ///
    /// Name collisions are not checked here; duplicate patterns surface as a
    /// fatal registration error from Axum at build time.
    pub fn resource(&mut self, name: &str, handlers: ResourceHandlers) -> &mut Resource {
        self.resources.push(Resource::new(name, handlers));
        // The push above makes the list non-empty.
        self.resources
            .last_mut()
            .expect("resource list is non-empty")
    }

    /// Declares routes and resources under a path prefix with scoped
    /// middleware.
    ///
    /// A fresh isolated router is handed to `f`; the given middleware applies
    /// to everything declared inside it. When `f` returns, the sub-router is
    /// flattened into this one:
    ///
    /// - plain routes are copied with their path prefixed by `"/" + name`
    ///   (normalized, never producing double slashes) and their handlers
    ///   wrapped with the sub-router's middleware, so namespace scoping
    ///   survives the flattening;
    /// - resources are re-declared under `name + "/" + resource.name` with
    ///   their constraints preserved and the sub-router's middleware appended
    ///   (not prepended) to the resource's own middleware list.
    ///
    /// ```rust
    /// # use axum::{body::Body, http::Request, response::IntoResponse};
    /// # use axum_resource::{Middleware, ResourceHandlers, RestRouter};
    /// # async fn index(_req: Request<Body>) -> impl IntoResponse { "ok" }
    /// # async fn dashboard(_req: Request<Body>) -> impl IntoResponse { "ok" }
    /// # let require_admin = Middleware::new(|next| next);
    /// # let mut router = RestRouter::new();
    /// router.namespace("admin", [require_admin], |admin| {
    ///     admin.get("/dashboard", dashboard);
    ///     admin.resource("posts", ResourceHandlers::new().index(index));
    /// });
    /// // Routes end up at /admin/dashboard and /admin/posts.
    /// ```
    pub fn namespace<F>(
        &mut self,
        name: &str,
        middleware: impl IntoIterator<Item = Middleware>,
        f: F,
    ) where
        F: FnOnce(&mut RestRouter),
    {
        let mut sub = RestRouter::new();
        for mw in middleware {
            sub.use_middleware(mw);
        }
        f(&mut sub);

        let RestRouter {
            routes,
            resources,
            middleware: sub_middleware,
        } = sub;

        let prefix = join_paths("/", name);
        for route in routes {
            let handler = apply_middleware(route.handler, &sub_middleware);
            self.routes.push(Route {
                method: route.method,
                path: join_paths(&prefix, &route.path),
                handler,
            });
        }

        for resource in resources {
            let merged_name = join_paths(name, &resource.name);
            let redeclared = self.resource(&merged_name, resource.handlers);
            redeclared.constraints(resource.constraints);
            redeclared.middleware = resource.middleware;
            redeclared
                .middleware
                .extend(sub_middleware.iter().cloned());
        }
    }
}
