//! The persistence seam used by the HTTP handlers.
//!
//! Handlers hold an `Arc<dyn Store>` and never see SQL. [`postgres::PgStore`]
//! is the durable backend; [`memory::MemoryStore`] keeps everything in
//! process and backs local development and the HTTP test suite.
//!
//! Both backends share the same semantics:
//! - lists come back in creation order;
//! - deleting a restaurant removes its dishes but leaves its reservations;
//! - reservations are stored without checking that the restaurant exists.

use async_trait::async_trait;
use mesa_core::types::ResourceId;
use thiserror::Error;

use crate::models::dish::{Dish, NewDish, PopulatedDish};
use crate::models::reservation::{NewReservation, Reservation};
use crate::models::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>>;
    async fn find_restaurant(&self, id: ResourceId) -> StoreResult<Option<Restaurant>>;
    async fn create_restaurant(&self, input: NewRestaurant) -> StoreResult<Restaurant>;
    /// Returns `None` when the restaurant does not exist.
    async fn update_restaurant(
        &self,
        id: ResourceId,
        input: UpdateRestaurant,
    ) -> StoreResult<Option<Restaurant>>;
    /// Returns `false` when there was nothing to delete.
    async fn delete_restaurant(&self, id: ResourceId) -> StoreResult<bool>;

    async fn create_dish(&self, input: NewDish) -> StoreResult<Dish>;
    /// Dishes of one restaurant, each with the restaurant expanded.
    async fn list_dishes(&self, restaurant_id: ResourceId) -> StoreResult<Vec<PopulatedDish>>;

    async fn create_reservation(&self, input: NewReservation) -> StoreResult<Reservation>;
    async fn list_reservations(&self, restaurant_id: ResourceId)
        -> StoreResult<Vec<Reservation>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
