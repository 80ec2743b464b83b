//! Domain vocabulary shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error type, id aliases,
//! the caller [`identity::Identity`] and the authorization [`policy`] that
//! decides who may create or manage restaurants.

pub mod error;
pub mod identity;
pub mod policy;
pub mod roles;
pub mod types;
pub mod validation;
