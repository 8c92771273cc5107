//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render project rows and forms; pages own the state and pass
//! callbacks down.

pub mod project_card;
pub mod project_form;
