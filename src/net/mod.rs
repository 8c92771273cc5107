//! Networking modules for the project REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and issues project requests, `http` defines the transport
//! seam, `error` the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
