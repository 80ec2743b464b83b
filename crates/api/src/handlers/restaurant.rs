//! Handlers for the `/restaurant` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mesa_core::error::CoreError;
use mesa_core::policy::{can_create_restaurant, can_manage_restaurant};
use mesa_db::models::restaurant::{CreateRestaurant, Restaurant, UpdateRestaurant};

use super::{load_restaurant, parse_resource_id};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/restaurant/create
///
/// Fields are validated before the role check, so a guest sending an empty
/// form still gets the 400.
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRestaurant>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let new = input.into_new(&identity.id)?;
    can_create_restaurant(&identity).ensure("create restaurants")?;

    let restaurant = state.store.create_restaurant(new).await?;

    tracing::info!(
        restaurant_id = %restaurant.id,
        user_id = %identity.id,
        "Restaurant created",
    );

    Ok((StatusCode::CREATED, Json("Restaurant created")))
}

/// GET /api/restaurant
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = state.store.list_restaurants().await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurant/{restId}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let id = parse_resource_id(&rest_id)?;
    let restaurant = load_restaurant(&state, id).await?;
    Ok(Json(restaurant))
}

/// PATCH /api/restaurant/{restId}/edit
pub async fn update(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
    JsonBody(input): JsonBody<UpdateRestaurant>,
) -> AppResult<Json<&'static str>> {
    let id = parse_resource_id(&rest_id)?;
    let patch = input.validated()?;

    let existing = load_restaurant(&state, id).await?;
    can_manage_restaurant(&identity, &existing.owner).ensure("update this restaurant")?;

    state
        .store
        .update_restaurant(id, patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id,
        }))?;

    tracing::info!(restaurant_id = %id, user_id = %identity.id, "Restaurant updated");

    Ok(Json("Restaurant updated"))
}

/// DELETE /api/restaurant/{restId}
///
/// Admin, or the stored owner. Dishes go with the restaurant.
pub async fn delete(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Path(rest_id): Path<String>,
) -> AppResult<Json<&'static str>> {
    let id = parse_resource_id(&rest_id)?;

    let existing = load_restaurant(&state, id).await?;
    can_manage_restaurant(&identity, &existing.owner).ensure("delete this restaurant")?;

    if !state.store.delete_restaurant(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id,
        }));
    }

    tracing::info!(restaurant_id = %id, user_id = %identity.id, "Restaurant deleted");

    Ok(Json("Restaurant deleted"))
}
