//! Network layer for the auth endpoint.

pub mod transport;
pub mod types;
