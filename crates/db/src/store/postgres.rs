//! Postgres-backed [`Store`], delegating to the repositories.

use async_trait::async_trait;
use mesa_core::types::ResourceId;

use super::{Store, StoreResult};
use crate::models::dish::{Dish, NewDish, PopulatedDish};
use crate::models::reservation::{NewReservation, Reservation};
use crate::models::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::repositories::{DishRepo, ReservationRepo, RestaurantRepo};
use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(RestaurantRepo::list(&self.pool).await?)
    }

    async fn find_restaurant(&self, id: ResourceId) -> StoreResult<Option<Restaurant>> {
        Ok(RestaurantRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_restaurant(&self, input: NewRestaurant) -> StoreResult<Restaurant> {
        Ok(RestaurantRepo::create(&self.pool, &input).await?)
    }

    async fn update_restaurant(
        &self,
        id: ResourceId,
        input: UpdateRestaurant,
    ) -> StoreResult<Option<Restaurant>> {
        Ok(RestaurantRepo::update(&self.pool, id, &input).await?)
    }

    async fn delete_restaurant(&self, id: ResourceId) -> StoreResult<bool> {
        Ok(RestaurantRepo::delete(&self.pool, id).await?)
    }

    async fn create_dish(&self, input: NewDish) -> StoreResult<Dish> {
        Ok(DishRepo::create(&self.pool, &input).await?)
    }

    async fn list_dishes(&self, restaurant_id: ResourceId) -> StoreResult<Vec<PopulatedDish>> {
        let dishes = DishRepo::list_by_restaurant(&self.pool, restaurant_id).await?;
        if dishes.is_empty() {
            return Ok(Vec::new());
        }
        // Every dish points at the same restaurant, so one lookup expands them all.
        let restaurant = RestaurantRepo::find_by_id(&self.pool, restaurant_id).await?;
        Ok(dishes
            .into_iter()
            .map(|dish| PopulatedDish::new(dish, restaurant.clone()))
            .collect())
    }

    async fn create_reservation(&self, input: NewReservation) -> StoreResult<Reservation> {
        Ok(ReservationRepo::create(&self.pool, &input).await?)
    }

    async fn list_reservations(
        &self,
        restaurant_id: ResourceId,
    ) -> StoreResult<Vec<Reservation>> {
        Ok(ReservationRepo::list_by_restaurant(&self.pool, restaurant_id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
