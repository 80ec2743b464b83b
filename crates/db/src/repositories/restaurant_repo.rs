//! Repository for the `restaurants` table.

use mesa_core::types::{new_resource_id, ResourceId};
use sqlx::PgPool;

use crate::models::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, cuisine_type, phone_number, photos, owner_id, \
                       created_at, updated_at";

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewRestaurant) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants (id, name, location, cuisine_type, phone_number, photos, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(new_resource_id())
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.cuisine_type)
            .bind(&input.phone_number)
            .bind(&input.photos)
            .bind(&input.owner)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: ResourceId,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all restaurants, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY created_at, id");
        sqlx::query_as::<_, Restaurant>(&query).fetch_all(pool).await
    }

    /// Update a restaurant. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ResourceId,
        input: &UpdateRestaurant,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                cuisine_type = COALESCE($4, cuisine_type),
                phone_number = COALESCE($5, phone_number),
                photos = COALESCE($6, photos),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.cuisine_type)
            .bind(&input.phone_number)
            .bind(&input.photos)
            .fetch_optional(pool)
            .await
    }

    /// Delete a restaurant by ID (dishes cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: ResourceId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
