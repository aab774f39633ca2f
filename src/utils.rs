//! Utility functions shared across the crate.

/// Joins two URL path segments with exactly one `/` between them.
///
/// Namespace flattening concatenates a prefix onto already-declared paths, and
/// either side may or may not carry its own slash. A naive concatenation would
/// produce `//` (or no separator at all), so every path composition in the
/// crate goes through this function instead.
///
/// ```
/// use axum_resource::join_paths;
///
/// assert_eq!(join_paths("/admin", "/posts"), "/admin/posts");
/// assert_eq!(join_paths("/admin/", "posts"), "/admin/posts");
/// assert_eq!(join_paths("admin", "posts"), "admin/posts");
/// assert_eq!(join_paths("", "/posts"), "/posts");
/// ```
pub fn join_paths(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return prefix.to_string();
    }
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{prefix}/{path}")
}
