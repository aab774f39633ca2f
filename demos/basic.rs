//! Basic Example
//!
//! A users resource rendered with askama, wrapped in an application layout,
//! with a numeric-id constraint and a request-id middleware.
//!
//! Run with:
//! ```bash
//! cargo run --example basic
//! ```
//!
//! Then test:
//! ```bash
//! curl http://localhost:3333/users
//! curl -i http://localhost:3333/users/42
//! curl -i http://localhost:3333/users/abc
//! ```

use askama::Template;
use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
};
use axum_resource::{
    Config, Constraint, Controller, Error, Handler, Middleware, ResourceHandlers, RestRouter,
    Result, TemplateRenderer,
};
use regex::Regex;
use std::sync::Arc;

#[derive(Template)]
#[template(path = "users_index.html")]
struct UsersIndex {
    users: Vec<String>,
    framed: bool,
}

/// Wraps a page in the application chrome.
fn application_layout(mut view: UsersIndex) -> UsersIndex {
    view.framed = true;
    view
}

/// Middleware that stamps every response with a fresh request id.
fn request_id() -> Middleware {
    Middleware::new(|next| {
        Handler::new(move |req| {
            let next = next.clone();
            async move {
                let id = uuid::Uuid::now_v7().to_string();
                tracing::debug!(request_id = %id, "request received");
                let mut response = next.call(req).await;
                if let Ok(value) = HeaderValue::from_str(&id) {
                    response.headers_mut().insert("x-request-id", value);
                }
                response
            }
        })
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from an inline string.
    // In production, use Config::from_toml_file or Config::default().
    let config: Config = r#"
[http]
bind_addr = "127.0.0.1"
bind_port = 3333

[logging]
format = "default"
"#
    .parse()?;

    config.setup_tracing();

    let users_controller =
        Controller::new(Arc::new(TemplateRenderer::new())).with_layout(application_layout);

    let index = {
        let controller = users_controller.clone();
        move |_req: Request<Body>| {
            let controller = controller.clone();
            async move {
                let users = vec!["ada".to_string(), "grace".to_string(), "linus".to_string()];
                controller.render_with_layout(UsersIndex { users, framed: false }, None)
            }
        }
    };

    // No persistence in this demo, so every lookup misses. With no error
    // view configured the renderer falls back to a plain-text body.
    let show = {
        let controller = users_controller.clone();
        move |_req: Request<Body>| {
            let controller = controller.clone();
            async move {
                controller.render_error(&Error::not_found("no such user"), StatusCode::NOT_FOUND)
            }
        }
    };

    let mut router = RestRouter::new();
    router.use_middleware(request_id());
    router
        .resource("users", ResourceHandlers::new().index(index).show(show))
        .constraint(Constraint::new("id").pattern(Regex::new("^[0-9]+$")?));

    println!("Starting server on http://127.0.0.1:3333");

    axum_resource::serve(&config, router.build()?).await
}
