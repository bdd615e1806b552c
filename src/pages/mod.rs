//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages stay thin: access control happens in `components::guarded` before a
//! page renders, and session changes go through `SessionStore`.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
