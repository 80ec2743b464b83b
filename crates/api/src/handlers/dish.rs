//! Handlers for a restaurant's menu.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mesa_core::policy::can_manage_restaurant;
use mesa_db::models::dish::{CreateDish, PopulatedDish};

use super::{load_restaurant, parse_resource_id};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/restaurant/{restId}/dish
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
    JsonBody(input): JsonBody<CreateDish>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let restaurant_id = parse_resource_id(&rest_id)?;
    let new = input.into_new(restaurant_id)?;

    let restaurant = load_restaurant(&state, restaurant_id).await?;
    can_manage_restaurant(&identity, &restaurant.owner).ensure("add dishes to this restaurant")?;

    let dish = state.store.create_dish(new).await?;

    tracing::info!(
        dish_id = %dish.id,
        restaurant_id = %restaurant_id,
        user_id = %identity.id,
        "Dish created",
    );

    Ok((StatusCode::CREATED, Json("Dish created")))
}

/// GET /api/restaurant/{restId}/alldishes
///
/// Public menu; each dish carries the expanded restaurant document.
pub async fn list(
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
) -> AppResult<Json<Vec<PopulatedDish>>> {
    let restaurant_id = parse_resource_id(&rest_id)?;
    let dishes = state.store.list_dishes(restaurant_id).await?;
    Ok(Json(dishes))
}
