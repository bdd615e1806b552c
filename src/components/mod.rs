//! Reusable view components.

pub mod credentials_form;
pub mod guarded;
