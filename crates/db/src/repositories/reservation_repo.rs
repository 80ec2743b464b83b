//! Repository for the `reservations` table.

use mesa_core::types::{new_resource_id, ResourceId};
use sqlx::PgPool;

use crate::models::reservation::{NewReservation, Reservation};

const COLUMNS: &str =
    "id, fecha, hour, pax, has_consumed, restaurant_id, who_reserved, created_at";

pub struct ReservationRepo;

impl ReservationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (id, fecha, hour, pax, has_consumed, restaurant_id, who_reserved)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(new_resource_id())
            .bind(&input.fecha)
            .bind(&input.hour)
            .bind(input.pax)
            .bind(input.has_consumed)
            .bind(input.restaurant_id)
            .bind(&input.who_reserved)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: ResourceId,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations WHERE restaurant_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }
}
