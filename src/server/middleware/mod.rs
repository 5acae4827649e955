//! Request guards.
//!
//! `api_key` runs as a router layer in front of every non-public route. `auth` is
//! invoked by handlers that need an authenticated admin.

pub mod api_key;
pub mod auth;
