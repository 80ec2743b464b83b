//! Reservation document and DTOs.

use mesa_core::error::CoreError;
use mesa_core::types::{IdentityId, ResourceId, Timestamp};
use mesa_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::serde_helpers::{null_as_default, number_or_blank};

/// A row from the `reservations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    /// Reservation date, stored as sent by the client.
    pub fecha: String,
    pub hour: String,
    /// Party size, always within `MIN_PAX..=MAX_PAX`.
    pub pax: i32,
    pub has_consumed: bool,
    #[sqlx(rename = "restaurant_id")]
    pub restaurant: ResourceId,
    pub who_reserved: IdentityId,
    pub created_at: Timestamp,
}

/// Request body for `POST /restaurant/{id}/reserva`.
///
/// The range bounds mirror `mesa_core::validation::{MIN_PAX, MAX_PAX}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "fecha is required"))]
    pub fecha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "hour is required"))]
    pub hour: String,
    #[serde(default, deserialize_with = "number_or_blank")]
    #[validate(
        required(message = "pax is required"),
        range(min = 1, max = 14, message = "pax must be between 1 and 14")
    )]
    pub pax: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_consumed: bool,
}

impl CreateReservation {
    /// Validate the request and attach the restaurant and reserving identity.
    pub fn into_new(
        self,
        restaurant_id: ResourceId,
        who_reserved: &str,
    ) -> Result<NewReservation, CoreError> {
        validate_input(&self)?;
        let pax = self
            .pax
            .ok_or_else(|| CoreError::Validation("pax is required".into()))?;
        Ok(NewReservation {
            fecha: self.fecha,
            hour: self.hour,
            pax,
            has_consumed: self.has_consumed,
            restaurant_id,
            who_reserved: who_reserved.to_string(),
        })
    }
}

/// A validated reservation ready to be stored.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub fecha: String,
    pub hour: String,
    pub pax: i32,
    pub has_consumed: bool,
    pub restaurant_id: ResourceId,
    pub who_reserved: IdentityId,
}
