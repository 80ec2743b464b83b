//! Authorization policy for restaurant resources.
//!
//! Every ownership decision in the service goes through these functions so
//! the rules can be tested without HTTP. Admins may act on any restaurant;
//! everyone else only on restaurants whose stored owner is their own id.

use crate::error::CoreError;
use crate::identity::{Identity, Role};

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allowed
    }

    /// Turn a denial into [`CoreError::Unauthorized`] naming the attempted action.
    pub fn ensure(self, action: &str) -> Result<(), CoreError> {
        match self {
            Access::Allowed => Ok(()),
            Access::Denied => Err(CoreError::Unauthorized(format!(
                "Not allowed to {action}"
            ))),
        }
    }
}

impl From<bool> for Access {
    fn from(allowed: bool) -> Self {
        if allowed {
            Access::Allowed
        } else {
            Access::Denied
        }
    }
}

/// Only owners and admins may register restaurants.
pub fn can_create_restaurant(identity: &Identity) -> Access {
    matches!(identity.role, Role::Owner | Role::Admin).into()
}

/// Update, delete and menu changes: admin, or the restaurant's stored owner.
///
/// The comparison is on identity ids, not on the `owner` role string: an
/// identity with role `owner` cannot touch somebody else's restaurant.
pub fn can_manage_restaurant(identity: &Identity, owner_id: &str) -> Access {
    (identity.is_admin() || identity.id == owner_id).into()
}
