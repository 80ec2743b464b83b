//! Token verification primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and minting, for tools and tests).

pub mod jwt;
