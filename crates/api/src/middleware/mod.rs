//! Request extractors that run before handler bodies.
//!
//! - [`auth::AuthUser`] -- the authorization gate: verifies the Bearer token
//!   and yields the caller's [`mesa_core::identity::Identity`].

pub mod auth;
