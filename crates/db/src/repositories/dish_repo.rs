//! Repository for the `dishes` table.

use mesa_core::types::{new_resource_id, ResourceId};
use sqlx::PgPool;

use crate::models::dish::{Dish, NewDish};

const COLUMNS: &str = "id, title, description, price, category, restaurant_id, created_at";

/// Provides create and list operations for dishes.
pub struct DishRepo;

impl DishRepo {
    pub async fn create(pool: &PgPool, input: &NewDish) -> Result<Dish, sqlx::Error> {
        let query = format!(
            "INSERT INTO dishes (id, title, description, price, category, restaurant_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(new_resource_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(input.restaurant_id)
            .fetch_one(pool)
            .await
    }

    /// List the dishes of one restaurant in creation order.
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: ResourceId,
    ) -> Result<Vec<Dish>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dishes WHERE restaurant_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }
}
