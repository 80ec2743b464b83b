pub mod dish;
pub mod reservation;
pub mod restaurant;

use mesa_core::error::CoreError;
use mesa_core::types::ResourceId;
use mesa_db::models::restaurant::Restaurant;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a `{restId}` path segment.
pub(crate) fn parse_resource_id(raw: &str) -> AppResult<ResourceId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid restaurant id: {raw}")))
}

/// Fetch the restaurant a request targets, or 404.
pub(crate) async fn load_restaurant(state: &AppState, id: ResourceId) -> AppResult<Restaurant> {
    state
        .store
        .find_restaurant(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id,
        }))
}
