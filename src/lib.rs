//! # axum-resource
//!
//! Rails-style RESTful resource routing for [Axum], with middleware chains,
//! per-parameter constraints, namespaces and a generic controller/renderer
//! abstraction.
//!
//! Declare named resources with up to seven conventional actions and let the
//! builder expand them into concrete method+path registrations on an
//! `axum::Router`. Path matching, parameter extraction and request parsing
//! remain entirely Axum's job — this crate only builds the route table and
//! composes the handler chain.
//!
//! [Axum]: https://docs.rs/axum
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::{body::Body, http::Request, response::IntoResponse};
//! use axum_resource::{Config, ResourceHandlers, RestRouter, Result};
//!
//! async fn index(_req: Request<Body>) -> impl IntoResponse {
//!     "all users"
//! }
//!
//! async fn show(_req: Request<Body>) -> impl IntoResponse {
//!     "one user"
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::default();
//!     config.setup_tracing();
//!
//!     let mut router = RestRouter::new();
//!     router.resource("users", ResourceHandlers::new().index(index).show(show));
//!
//!     axum_resource::serve(&config, router.build()?).await
//! }
//! ```
//!
//! # Conventional Action Mapping
//!
//! | Action | Method | Path              |
//! |--------|--------|-------------------|
//! | Index  | GET    | `/name`           |
//! | Show   | GET    | `/name/{id}`      |
//! | Create | POST   | `/name`           |
//! | Update | PUT    | `/name/{id}`      |
//! | Delete | DELETE | `/name/{id}`      |
//! | New    | GET    | `/name/new`       |
//! | Edit   | GET    | `/name/{id}/edit` |
//!
//! Only the actions you set produce routes. Member routes (Show, Update,
//! Delete, Edit) are additionally wrapped with the resource's
//! [`Constraint`] set; collection routes never are.
//!
//! # Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`rest`] | Route table, resources, middleware, constraints and the builder ([`RestRouter`]) |
//! | [`view`] | Controller/renderer abstraction ([`Controller`], [`ViewRenderer`]) |
//! | [`config`] | Configuration loading and tracing setup ([`Config`]) |
//! | [`error`] | Error types ([`Error`], [`ErrorKind`]) |
//!
//! # Middleware Order
//!
//! Middleware composes with the conventional "first declared = outermost"
//! semantics: given `[A, B]`, a request sees A's pre-logic, then B's, then the
//! handler, then B's post-logic, then A's. Router-level middleware always
//! wraps outside resource-level middleware, and constraints wrap closest to
//! the handler.

mod config;
mod error;
mod server;
mod utils;

pub mod rest;
pub mod view;

pub use config::*;
pub use error::*;
pub use rest::{Constraint, Handler, Middleware, Resource, ResourceHandlers, RestRouter, Route};
pub use server::serve;
pub use utils::join_paths;
pub use view::{Controller, Layout, TemplateRenderer, ViewRenderer};

pub type Result<T> = std::result::Result<T, Error>;
