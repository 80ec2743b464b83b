//! Handlers for restaurant reservations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mesa_core::policy::can_manage_restaurant;
use mesa_db::models::reservation::{CreateReservation, Reservation};

use super::{load_restaurant, parse_resource_id};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/restaurant/{restId}/reserva
///
/// Any authenticated identity may book. The restaurant id is taken from the
/// path as-is; it is not looked up.
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
    JsonBody(input): JsonBody<CreateReservation>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let restaurant_id = parse_resource_id(&rest_id)?;
    let new = input.into_new(restaurant_id, &identity.id)?;

    let reservation = state.store.create_reservation(new).await?;

    tracing::info!(
        reservation_id = %reservation.id,
        restaurant_id = %restaurant_id,
        pax = reservation.pax,
        user_id = %identity.id,
        "Reservation created",
    );

    Ok((StatusCode::CREATED, Json("Reservation created")))
}

/// GET /api/restaurant/{restId}/reservas
///
/// The booking list of one restaurant, for its owner or an admin.
pub async fn list(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    let restaurant_id = parse_resource_id(&rest_id)?;

    let restaurant = load_restaurant(&state, restaurant_id).await?;
    can_manage_restaurant(&identity, &restaurant.owner)
        .ensure("view reservations of this restaurant")?;

    let reservations = state.store.list_reservations(restaurant_id).await?;
    Ok(Json(reservations))
}
