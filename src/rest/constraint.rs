//! Per-parameter validation applied to member routes before dispatch.

use super::handler::Handler;
use axum::{
    body::Body,
    extract::{FromRequestParts, RawPathParams},
    response::IntoResponse,
};
use http::{Request, StatusCode};
use regex::Regex;
use std::{fmt, sync::Arc};

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync + 'static>;

/// A route parameter constraint.
///
/// A constraint names a path parameter and carries an optional regex pattern
/// and an optional predicate. A value passes only when every present
/// validator accepts it.
///
/// ```rust
/// use axum_resource::Constraint;
/// use regex::Regex;
///
/// let numeric_id = Constraint::new("id")
///     .pattern(Regex::new("^[0-9]+$").unwrap())
///     .validate(|id| id.len() <= 18);
/// ```
///
/// Constraints are attached to a [`Resource`](super::Resource) and enforced
/// on its member routes only (show/update/delete/edit); collection routes
/// never see them. A request failing a constraint is answered with a 400 and
/// the handler never runs.
///
/// Absent or empty parameter values bypass validation entirely. This is a
/// deliberate policy, not an oversight: a constraint on a parameter the
/// matched pattern does not capture silently permits the request, so optional
/// parameters stay optional.
#[derive(Clone)]
pub struct Constraint {
    param: String,
    pattern: Option<Regex>,
    validate: Option<Predicate>,
}

impl Constraint {
    /// Creates a constraint on the named path parameter with no validators.
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            pattern: None,
            validate: None,
        }
    }

    /// Requires the parameter value to match the given pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Requires the parameter value to satisfy the given predicate.
    #[must_use]
    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(predicate));
        self
    }

    /// Returns the name of the constrained parameter.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Checks a non-empty parameter value against all present validators.
    pub(crate) fn is_satisfied_by(&self, value: &str) -> bool {
        if let Some(pattern) = &self.pattern
            && !pattern.is_match(value)
        {
            return false;
        }
        if let Some(validate) = &self.validate
            && !validate(value)
        {
            return false;
        }
        true
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("param", &self.param)
            .field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
            .field("validate", &self.validate.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Wraps a handler so the named path parameters are validated before
/// dispatch. Validation failure short-circuits with a 400 and a fixed body;
/// the handler never runs.
pub(crate) fn apply_constraints(handler: Handler, constraints: &[Constraint]) -> Handler {
    if constraints.is_empty() {
        return handler;
    }
    let constraints: Arc<[Constraint]> = constraints.to_vec().into();
    Handler::new(move |req: Request<Body>| {
        let handler = handler.clone();
        let constraints = Arc::clone(&constraints);
        async move {
            let (mut parts, body) = req.into_parts();
            // Extraction fails only when the request never went through Axum
            // routing; treat that the same as a capture-free pattern.
            let params = RawPathParams::from_request_parts(&mut parts, &()).await.ok();
            if let Some(params) = &params {
                for constraint in constraints.iter() {
                    let value = params
                        .iter()
                        .find(|(name, _)| *name == constraint.param())
                        .map(|(_, value)| value);
                    if let Some(value) = value
                        && !value.is_empty()
                        && !constraint.is_satisfied_by(value)
                    {
                        tracing::debug!(
                            param = constraint.param(),
                            value,
                            "constraint rejected request"
                        );
                        return (StatusCode::BAD_REQUEST, "Invalid parameter").into_response();
                    }
                }
            }
            handler.call(Request::from_parts(parts, body)).await
        }
    })
}
