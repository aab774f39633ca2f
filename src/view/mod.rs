//! Generic controller/renderer abstraction.
//!
//! A [`ViewRenderer`] knows how to turn a renderable component of type `T`
//! into an HTTP response; a [`Controller`] binds one renderer and an optional
//! default [`Layout`] and forwards to it from handler code. The split keeps
//! "producing a response body" separate from "writing it to the wire": the
//! controller never inspects component internals, and swapping templating
//! engines means swapping the renderer.
//!
//! [`TemplateRenderer`] is the askama-backed implementation.

mod template;

pub use template::TemplateRenderer;

use crate::Error;
use axum::{http::StatusCode, response::Response};
use std::sync::Arc;

/// A wrapping transformation applied to a component before rendering,
/// typically embedding a page body in an application chrome.
pub type Layout<T> = Arc<dyn Fn(T) -> T + Send + Sync + 'static>;

/// Renders components of type `T` into HTTP responses.
///
/// Implementations own the templating-specific details; this crate never
/// looks inside `T`.
pub trait ViewRenderer<T>: Send + Sync {
    /// Renders the bare component.
    fn render(&self, component: T) -> Response;

    /// Renders the component wrapped in the given layout, or bare when no
    /// layout is supplied.
    fn render_with_layout(&self, component: T, layout: Option<&Layout<T>>) -> Response;

    /// Renders an error with the given status code.
    fn render_error(&self, error: &Error, status: StatusCode) -> Response;
}

/// Binds one renderer instance and an optional default layout.
///
/// Per-resource handler code holds a controller and calls its render methods
/// to produce responses:
///
/// ```rust,ignore
/// let controller = Controller::new(renderer).with_layout(application_layout);
///
/// // In a handler:
/// controller.render_with_layout(UsersIndex { users }, None)
/// ```
pub struct Controller<T> {
    renderer: Arc<dyn ViewRenderer<T>>,
    layout: Option<Layout<T>>,
}

// Derived Clone would demand T: Clone, but only Arcs are cloned here.
impl<T> Clone for Controller<T> {
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
            layout: self.layout.clone(),
        }
    }
}

impl<T> Controller<T> {
    /// Creates a controller bound to the given renderer, with no default
    /// layout.
    pub fn new(renderer: Arc<dyn ViewRenderer<T>>) -> Self {
        Self {
            renderer,
            layout: None,
        }
    }

    /// Sets the default layout, consuming and returning the controller.
    #[must_use]
    pub fn with_layout<F>(mut self, layout: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.layout = Some(Arc::new(layout));
        self
    }

    /// Replaces the default layout.
    pub fn set_layout<F>(&mut self, layout: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.layout = Some(Arc::new(layout));
    }

    /// Renders the bare component, ignoring any default layout.
    pub fn render(&self, component: T) -> Response {
        self.renderer.render(component)
    }

    /// Renders the component with the call-supplied layout if given, else the
    /// bound default, else bare.
    pub fn render_with_layout(&self, component: T, layout: Option<Layout<T>>) -> Response {
        let layout = layout.as_ref().or(self.layout.as_ref());
        self.renderer.render_with_layout(component, layout)
    }

    /// Renders an error through the renderer's error path.
    pub fn render_error(&self, error: &Error, status: StatusCode) -> Response {
        self.renderer.render_error(error, status)
    }
}
