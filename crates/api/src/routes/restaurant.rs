//! Route definitions for restaurants and their nested resources.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{dish, reservation, restaurant};
use crate::state::AppState;

/// Restaurant routes mounted at `/restaurant`.
///
/// ```text
/// GET    /                        -> restaurant::list
/// POST   /create                  -> restaurant::create
/// GET    /{rest_id}               -> restaurant::get_by_id
/// DELETE /{rest_id}               -> restaurant::delete
/// PATCH  /{rest_id}/edit          -> restaurant::update
/// POST   /{rest_id}/dish          -> dish::create
/// GET    /{rest_id}/alldishes     -> dish::list
/// POST   /{rest_id}/reserva       -> reservation::create
/// GET    /{rest_id}/reservas      -> reservation::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list))
        .route("/create", post(restaurant::create))
        .route(
            "/{rest_id}",
            get(restaurant::get_by_id).delete(restaurant::delete),
        )
        .route("/{rest_id}/edit", patch(restaurant::update))
        .route("/{rest_id}/dish", post(dish::create))
        .route("/{rest_id}/alldishes", get(dish::list))
        .route("/{rest_id}/reserva", post(reservation::create))
        .route("/{rest_id}/reservas", get(reservation::list))
}
