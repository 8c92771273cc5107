//! Current-user state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user is authenticated elsewhere and handed to the store; pages read the
//! bearer token from here for every API call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// The signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Bearer token of the current user. Empty tokens count as signed out.
    pub fn token(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| u.token.clone())
            .filter(|t| !t.trim().is_empty())
    }
}
