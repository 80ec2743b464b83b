pub mod health;
pub mod restaurant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /restaurant                          list (public)
/// /restaurant/create                   create (owner/admin)
/// /restaurant/{restId}                 get (public), delete (admin or owner)
/// /restaurant/{restId}/edit            partial update (admin or owner)
/// /restaurant/{restId}/dish            create dish (admin or owner)
/// /restaurant/{restId}/alldishes       list dishes (public)
/// /restaurant/{restId}/reserva         create reservation (any authenticated)
/// /restaurant/{restId}/reservas        list reservations (admin or owner)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/restaurant", restaurant::router())
}
