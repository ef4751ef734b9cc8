// --- File: crates/bookagame_session/src/lib.rs ---
//! Session and auth state for the Book a Game client.
//!
//! [`SessionService`] is constructed once per process (or per test) and cloned
//! wherever the signed-in user is needed. It drives the auth endpoints, keeps
//! the bearer tokens in the client's [`TokenStore`](bookagame_common::services::TokenStore)
//! and exposes a [`SessionState`] snapshot for display.

pub mod service;
pub mod state;

pub use service::SessionService;
pub use state::SessionState;
