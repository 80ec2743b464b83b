//! Dish (menu item) document and DTOs.

use mesa_core::error::CoreError;
use mesa_core::types::{ResourceId, Timestamp};
use mesa_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::restaurant::Restaurant;
use crate::models::serde_helpers::{null_as_default, number_or_blank};

/// A row from the `dishes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    #[sqlx(rename = "restaurant_id")]
    pub restaurant: ResourceId,
    pub created_at: Timestamp,
}

/// A dish with its restaurant reference expanded into the full document.
///
/// `restaurant` is `None` when the reference no longer resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedDish {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub restaurant: Option<Restaurant>,
    pub created_at: Timestamp,
}

impl PopulatedDish {
    pub fn new(dish: Dish, restaurant: Option<Restaurant>) -> Self {
        Self {
            id: dish.id,
            title: dish.title,
            description: dish.description,
            price: dish.price,
            category: dish.category,
            restaurant,
            created_at: dish.created_at,
        }
    }
}

/// Request body for `POST /restaurant/{id}/dish`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDish {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default, deserialize_with = "number_or_blank")]
    #[validate(required(message = "price is required"))]
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl CreateDish {
    /// Validate the request and bind it to the restaurant from the path.
    pub fn into_new(self, restaurant_id: ResourceId) -> Result<NewDish, CoreError> {
        validate_input(&self)?;
        let price = self
            .price
            .ok_or_else(|| CoreError::Validation("price is required".into()))?;
        Ok(NewDish {
            title: self.title,
            description: self.description,
            price,
            category: self.category,
            restaurant_id,
        })
    }
}

/// A validated dish ready to be stored.
#[derive(Debug, Clone)]
pub struct NewDish {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub restaurant_id: ResourceId,
}
