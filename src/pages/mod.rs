//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page per `routes::View`. Pages read the bearer token
//! from `AdminStore` and run store workflows on `spawn_local`.

pub mod project_info;
pub mod projects;


use crate::net::error::ApiError;

/// Shown when a page needs a token but no user has been set.
pub const SIGN_IN_REQUIRED: &str = "Sign in to manage projects.";

/// User-facing message for a failed write.
pub fn describe_action_error(action: &str, err: &ApiError) -> String {
    match err.status() {
        Some(401 | 403) => format!("Not allowed to {action} project."),
        Some(404) => format!("Could not {action} project: it no longer exists."),
        _ => format!("Could not {action} project: {err}"),
    }
}
