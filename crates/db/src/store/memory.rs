//! In-memory implementation of [`Store`].
//!
//! All collections live behind one `tokio::sync::RwLock`, so a restaurant
//! delete and the removal of its dishes happen as one step. Nothing survives
//! a restart.

use async_trait::async_trait;
use chrono::Utc;
use mesa_core::types::{new_resource_id, ResourceId};
use tokio::sync::RwLock;

use super::{Store, StoreResult};
use crate::models::dish::{Dish, NewDish, PopulatedDish};
use crate::models::reservation::{NewReservation, Reservation};
use crate::models::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};

#[derive(Debug, Default)]
struct Collections {
    restaurants: Vec<Restaurant>,
    dishes: Vec<Dish>,
    reservations: Vec<Reservation>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(self.inner.read().await.restaurants.clone())
    }

    async fn find_restaurant(&self, id: ResourceId) -> StoreResult<Option<Restaurant>> {
        let guard = self.inner.read().await;
        Ok(guard.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn create_restaurant(&self, input: NewRestaurant) -> StoreResult<Restaurant> {
        let now = Utc::now();
        let restaurant = Restaurant {
            id: new_resource_id(),
            name: input.name,
            location: input.location,
            cuisine_type: input.cuisine_type,
            phone_number: input.phone_number,
            photos: input.photos,
            owner: input.owner,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn update_restaurant(
        &self,
        id: ResourceId,
        input: UpdateRestaurant,
    ) -> StoreResult<Option<Restaurant>> {
        let mut guard = self.inner.write().await;
        let Some(existing) = guard.restaurants.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(name) = input.name {
            existing.name = name;
        }
        if let Some(location) = input.location {
            existing.location = location;
        }
        if let Some(cuisine_type) = input.cuisine_type {
            existing.cuisine_type = Some(cuisine_type);
        }
        if let Some(phone_number) = input.phone_number {
            existing.phone_number = phone_number;
        }
        if let Some(photos) = input.photos {
            existing.photos = photos;
        }
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete_restaurant(&self, id: ResourceId) -> StoreResult<bool> {
        let mut guard = self.inner.write().await;
        let before = guard.restaurants.len();
        guard.restaurants.retain(|r| r.id != id);
        if guard.restaurants.len() == before {
            return Ok(false);
        }
        guard.dishes.retain(|d| d.restaurant != id);
        Ok(true)
    }

    async fn create_dish(&self, input: NewDish) -> StoreResult<Dish> {
        let dish = Dish {
            id: new_resource_id(),
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            restaurant: input.restaurant_id,
            created_at: Utc::now(),
        };
        self.inner.write().await.dishes.push(dish.clone());
        Ok(dish)
    }

    async fn list_dishes(&self, restaurant_id: ResourceId) -> StoreResult<Vec<PopulatedDish>> {
        let guard = self.inner.read().await;
        let restaurant = guard
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned();
        Ok(guard
            .dishes
            .iter()
            .filter(|d| d.restaurant == restaurant_id)
            .map(|d| PopulatedDish::new(d.clone(), restaurant.clone()))
            .collect())
    }

    async fn create_reservation(&self, input: NewReservation) -> StoreResult<Reservation> {
        let reservation = Reservation {
            id: new_resource_id(),
            fecha: input.fecha,
            hour: input.hour,
            pax: input.pax,
            has_consumed: input.has_consumed,
            restaurant: input.restaurant_id,
            who_reserved: input.who_reserved,
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .reservations
            .push(reservation.clone());
        Ok(reservation)
    }

    async fn list_reservations(
        &self,
        restaurant_id: ResourceId,
    ) -> StoreResult<Vec<Reservation>> {
        let guard = self.inner.read().await;
        Ok(guard
            .reservations
            .iter()
            .filter(|r| r.restaurant == restaurant_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn new_restaurant(name: &str, owner: &str) -> NewRestaurant {
        NewRestaurant {
            name: name.to_string(),
            location: "Calle Mayor 1".to_string(),
            cuisine_type: None,
            phone_number: "600000000".to_string(),
            photos: vec![],
            owner: owner.to_string(),
        }
    }

    fn new_dish(restaurant_id: ResourceId, title: &str) -> NewDish {
        NewDish {
            title: title.to_string(),
            description: "House special".to_string(),
            price: 9.5,
            category: Some("main".to_string()),
            restaurant_id,
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = MemoryStore::new();
        let created = store
            .create_restaurant(new_restaurant("Casa", "owner-1"))
            .await
            .unwrap();

        let found = store.find_restaurant(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryStore::new();
        let created = store
            .create_restaurant(new_restaurant("Casa", "owner-1"))
            .await
            .unwrap();

        let patch = UpdateRestaurant {
            name: Some("Casa Nueva".into()),
            photos: Some(vec!["front.jpg".into()]),
            ..Default::default()
        };
        let updated = store
            .update_restaurant(created.id, patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Casa Nueva");
        assert_eq!(updated.location, created.location);
        assert_eq!(updated.photos, vec!["front.jpg"]);
        assert_eq!(updated.owner, "owner-1");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_restaurant_returns_none() {
        let store = MemoryStore::new();
        let result = store
            .update_restaurant(new_resource_id(), UpdateRestaurant::default())
            .await
            .unwrap();
        assert_matches!(result, None);
    }

    #[tokio::test]
    async fn delete_cascades_dishes_but_keeps_reservations() {
        let store = MemoryStore::new();
        let r = store
            .create_restaurant(new_restaurant("Casa", "owner-1"))
            .await
            .unwrap();
        store.create_dish(new_dish(r.id, "Paella")).await.unwrap();
        store
            .create_reservation(NewReservation {
                fecha: "2026-11-02".into(),
                hour: "21:00".into(),
                pax: 2,
                has_consumed: false,
                restaurant_id: r.id,
                who_reserved: "guest-1".into(),
            })
            .await
            .unwrap();

        assert!(store.delete_restaurant(r.id).await.unwrap());
        assert!(!store.delete_restaurant(r.id).await.unwrap());
        assert!(store.list_dishes(r.id).await.unwrap().is_empty());
        assert_eq!(store.list_reservations(r.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_dishes_filters_and_expands() {
        let store = MemoryStore::new();
        let a = store
            .create_restaurant(new_restaurant("A", "owner-1"))
            .await
            .unwrap();
        let b = store
            .create_restaurant(new_restaurant("B", "owner-2"))
            .await
            .unwrap();
        store.create_dish(new_dish(a.id, "Paella")).await.unwrap();
        store.create_dish(new_dish(b.id, "Ramen")).await.unwrap();
        store.create_dish(new_dish(a.id, "Flan")).await.unwrap();

        let dishes = store.list_dishes(a.id).await.unwrap();
        let titles: Vec<_> = dishes.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Paella", "Flan"]);
        assert!(dishes
            .iter()
            .all(|d| d.restaurant.as_ref().map(|r| r.id) == Some(a.id)));
    }

    #[tokio::test]
    async fn backend_reports_healthy() {
        let store = MemoryStore::new();
        assert!(store.health_check().await.is_ok());
        assert_eq!(store.backend_name(), "memory");
    }
}
