//! Route table construction and the one-shot builder.
//!
//! This module provides the declaration-phase router and everything it owns.
//! The functionality is split across submodules for maintainability:
//!
//! - [`router`] - Core `RestRouter` struct, verb registration and namespaces
//! - [`resource`] - `Resource` and `ResourceHandlers`
//! - [`middleware`] - `Middleware` type and composition
//! - [`constraint`] - Per-parameter validation
//! - [`handler`] - The boxed request handler type
//! - [`build`] - Finalization into an `axum::Router`

mod build;
mod constraint;
mod handler;
mod middleware;
mod resource;
mod router;

pub use constraint::Constraint;
pub use handler::{Handler, HandlerFuture};
pub use middleware::{Middleware, apply_middleware};
pub use resource::{Resource, ResourceHandlers};
pub use router::{RestRouter, Route};

#[cfg(test)]
mod tests;
