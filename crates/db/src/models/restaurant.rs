//! Restaurant document and DTOs.

use mesa_core::error::CoreError;
use mesa_core::types::{IdentityId, ResourceId, Timestamp};
use mesa_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::serde_helpers::null_as_default;

/// A row from the `restaurants` table.
///
/// Serialized with the field names clients already use (`_id`, `cuisinType`,
/// `phoneNumber`, ...).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub name: String,
    pub location: String,
    #[serde(rename = "cuisinType")]
    pub cuisine_type: Option<String>,
    pub phone_number: String,
    pub photos: Vec<String>,
    /// Identity id of the user who created the restaurant.
    #[sqlx(rename = "owner_id")]
    pub owner: IdentityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /restaurant/create`.
///
/// Missing or `null` text fields deserialize as empty strings so they fail
/// validation with a 400 instead of a body-parsing rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurant {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[serde(default, rename = "cuisinType")]
    pub cuisine_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<String>,
}

impl CreateRestaurant {
    /// Validate the request and attach the creating identity as owner.
    pub fn into_new(self, owner: &str) -> Result<NewRestaurant, CoreError> {
        validate_input(&self)?;
        Ok(NewRestaurant {
            name: self.name,
            location: self.location,
            cuisine_type: self.cuisine_type,
            phone_number: self.phone_number,
            photos: self.photos,
            owner: owner.to_string(),
        })
    }
}

/// A validated restaurant ready to be stored.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    pub cuisine_type: Option<String>,
    pub phone_number: String,
    pub photos: Vec<String>,
    pub owner: IdentityId,
}

/// Request body for `PATCH /restaurant/{id}/edit`. Only supplied fields change;
/// the owner is never reassigned.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: Option<String>,
    #[serde(rename = "cuisinType")]
    pub cuisine_type: Option<String>,
    #[validate(length(min = 1, message = "phoneNumber must not be empty"))]
    pub phone_number: Option<String>,
    pub photos: Option<Vec<String>>,
}

impl UpdateRestaurant {
    pub fn validated(self) -> Result<Self, CoreError> {
        validate_input(&self)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn create_uses_client_field_names() {
        let input: CreateRestaurant = serde_json::from_value(serde_json::json!({
            "name": "Casa",
            "location": "X",
            "cuisinType": "Tapas",
            "phoneNumber": "123",
            "photos": ["a.jpg", "b.jpg"],
        }))
        .unwrap();

        let new = input.into_new("owner-1").unwrap();
        assert_eq!(new.cuisine_type.as_deref(), Some("Tapas"));
        assert_eq!(new.phone_number, "123");
        assert_eq!(new.photos, vec!["a.jpg", "b.jpg"]);
        assert_eq!(new.owner, "owner-1");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let input: CreateRestaurant =
            serde_json::from_value(serde_json::json!({ "name": "Casa" })).unwrap();
        let err = input.into_new("owner-1").unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg)
                if msg == "location is required; phoneNumber is required"
        );
    }

    #[test]
    fn null_name_is_reported_as_missing() {
        let input: CreateRestaurant = serde_json::from_value(serde_json::json!({
            "name": null,
            "location": "X",
            "phoneNumber": "123",
        }))
        .unwrap();
        assert_matches!(
            input.into_new("owner-1"),
            Err(CoreError::Validation(msg)) if msg == "name is required"
        );
    }

    #[test]
    fn update_ignores_absent_fields_but_rejects_blanks() {
        let absent: UpdateRestaurant =
            serde_json::from_value(serde_json::json!({ "cuisinType": "Sushi" })).unwrap();
        assert!(absent.validated().is_ok());

        let blank: UpdateRestaurant =
            serde_json::from_value(serde_json::json!({ "name": "" })).unwrap();
        assert_matches!(blank.validated(), Err(CoreError::Validation(_)));
    }
}
