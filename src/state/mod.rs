//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only global state the client keeps; it is owned by a
//! `SessionStore` handed to views through Leptos context.

pub mod session;
