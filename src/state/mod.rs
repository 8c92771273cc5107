//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Each cell is a plain `Default` struct wrapped in an `RwSignal`. The list
//! and the current project are separate cells so refreshing one never touches
//! the other. `store::AdminStore` groups the three cells for a UI session.

pub mod auth;
pub mod projects;
pub mod store;
