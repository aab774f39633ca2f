//! Askama-backed renderer implementation.

use super::{Layout, ViewRenderer};
use crate::Error;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

type ErrorView<T> = Arc<dyn Fn(&Error, StatusCode) -> T + Send + Sync + 'static>;

/// A [`ViewRenderer`] for [askama](https://docs.rs/askama) templates.
///
/// Renders components as `text/html`. An optional error-view factory maps an
/// error and status to a component of the same template type; without one,
/// [`render_error`](ViewRenderer::render_error) falls back to a plain-text
/// body carrying the error's message.
///
/// ```rust
/// use askama::Template;
/// use axum_resource::TemplateRenderer;
///
/// #[derive(Template)]
/// #[template(source = "<h1>{{ title }}</h1>", ext = "html")]
/// struct PageView {
///     title: String,
/// }
///
/// let renderer = TemplateRenderer::<PageView>::new()
///     .with_error_view(|err, status| PageView {
///         title: format!("{status}: {err}"),
///     });
/// ```
pub struct TemplateRenderer<T> {
    error_view: Option<ErrorView<T>>,
}

impl<T> TemplateRenderer<T> {
    /// Creates a renderer with no error-view factory.
    pub fn new() -> Self {
        Self { error_view: None }
    }

    /// Sets the factory used to build an error component from an error and a
    /// status code.
    #[must_use]
    pub fn with_error_view<F>(mut self, factory: F) -> Self
    where
        F: Fn(&Error, StatusCode) -> T + Send + Sync + 'static,
    {
        self.error_view = Some(Arc::new(factory));
        self
    }
}

impl<T> Default for TemplateRenderer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Template> ViewRenderer<T> for TemplateRenderer<T> {
    fn render(&self, component: T) -> Response {
        match component.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => Error::from(err).into_response(),
        }
    }

    fn render_with_layout(&self, component: T, layout: Option<&Layout<T>>) -> Response {
        let component = match layout {
            Some(layout) => layout(component),
            None => component,
        };
        self.render(component)
    }

    fn render_error(&self, error: &Error, status: StatusCode) -> Response {
        match &self.error_view {
            Some(factory) => {
                let view = factory(error, status);
                match view.render() {
                    Ok(html) => (status, Html(html)).into_response(),
                    Err(err) => Error::from(err).into_response(),
                }
            }
            None => (status, error.to_string()).into_response(),
        }
    }
}
