//! The authenticated caller, passed explicitly into every protected handler.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roles::{ROLE_ADMIN, ROLE_GUEST, ROLE_OWNER};
use crate::types::IdentityId;

/// Role carried by a verified token.
///
/// Any role string other than `owner` or `admin` collapses to [`Role::Guest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Guest,
}

impl Role {
    pub fn from_claim(role: &str) -> Self {
        match role {
            ROLE_ADMIN => Role::Admin,
            ROLE_OWNER => Role::Owner,
            _ => Role::Guest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Owner => ROLE_OWNER,
            Role::Guest => ROLE_GUEST,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<IdentityId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse() {
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("owner"), Role::Owner);
    }

    #[test]
    fn unknown_roles_become_guest() {
        assert_eq!(Role::from_claim("user"), Role::Guest);
        assert_eq!(Role::from_claim(""), Role::Guest);
        // Claims are case-sensitive.
        assert_eq!(Role::from_claim("Admin"), Role::Guest);
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Owner, Role::Admin, Role::Guest] {
            assert_eq!(Role::from_claim(role.as_str()), role);
        }
    }
}
