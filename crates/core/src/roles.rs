//! Well-known role name constants.
//!
//! These must match the `role` claim written by the token issuer.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_OWNER: &str = "owner";
pub const ROLE_GUEST: &str = "guest";
