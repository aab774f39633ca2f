//! Finalization: expanding the route table into an `axum::Router`.

use super::{
    constraint::{Constraint, apply_constraints},
    handler::Handler,
    middleware::{Middleware, apply_middleware},
    router::RestRouter,
};
use crate::{Error, Result, utils::join_paths};
use axum::{
    Router,
    body::Body,
    routing::{MethodFilter, on},
};
use http::{Method, Request};

impl RestRouter {
    /// Expands every declared route and resource into concrete registrations
    /// on an `axum::Router`.
    ///
    /// Single pass, in insertion order. Plain routes are wrapped with the
    /// router-level middleware. Each resource action present registers its
    /// conventional method+path combination, with the combined middleware
    /// (router-level outermost, then resource-specific) and, for member
    /// routes only, the resource's constraints wrapped closest to the
    /// handler.
    ///
    /// Consuming `self` makes a second build impossible, so routes cannot be
    /// double-registered. Conflicting patterns are a fatal error raised by
    /// Axum during registration, not handled here.
    pub fn build(self) -> Result<Router> {
        let mut router = Router::new();
        let global = self.middleware;

        for route in self.routes {
            router = register_route(router, route.method, &route.path, route.handler, &global, &[])?;
        }

        for resource in self.resources {
            let mut middleware = global.clone();
            middleware.extend(resource.middleware);

            let collection = resource.path;
            let member = join_paths(&collection, "{id}");
            let constraints = resource.constraints;
            let handlers = resource.handlers;

            if let Some(handler) = handlers.index {
                router = register_route(router, Method::GET, &collection, handler, &middleware, &[])?;
            }
            if let Some(handler) = handlers.show {
                router = register_route(router, Method::GET, &member, handler, &middleware, &constraints)?;
            }
            if let Some(handler) = handlers.create {
                router = register_route(router, Method::POST, &collection, handler, &middleware, &[])?;
            }
            if let Some(handler) = handlers.update {
                router = register_route(router, Method::PUT, &member, handler, &middleware, &constraints)?;
            }
            if let Some(handler) = handlers.delete {
                router = register_route(router, Method::DELETE, &member, handler, &middleware, &constraints)?;
            }
            if let Some(handler) = handlers.new_form {
                let path = join_paths(&collection, "new");
                router = register_route(router, Method::GET, &path, handler, &middleware, &[])?;
            }
            if let Some(handler) = handlers.edit {
                let path = join_paths(&member, "edit");
                router = register_route(router, Method::GET, &path, handler, &middleware, &constraints)?;
            }
        }

        Ok(router)
    }
}

/// Wraps a handler with constraints then middleware and registers the result.
/// Constraints sit closest to the handler so middleware always runs first.
fn register_route(
    router: Router,
    method: Method,
    path: &str,
    handler: Handler,
    middleware: &[Middleware],
    constraints: &[Constraint],
) -> Result<Router> {
    let handler = apply_middleware(apply_constraints(handler, constraints), middleware);
    let filter = MethodFilter::try_from(method.clone())
        .map_err(|_| Error::configuration(format!("unsupported HTTP method: {method}")))?;

    tracing::debug!(%method, path, "registering route");
    Ok(router.route(path, on(filter, move |req: Request<Body>| handler.call(req))))
}
