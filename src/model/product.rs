//! Product entity, identifier, and its create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product from a create payload with both timestamps set to `at`.
    pub fn stamped(id: ProductId, params: ProductCreate, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category: params.category,
            created_at: at,
            updated_at: at,
        }
    }

    /// Applies every present field of `update` and refreshes `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply(&mut self, update: ProductUpdate, at: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        self.updated_at = self.updated_at.max(at);
    }
}

/// Payload for creating a new product.
///
/// Required fields fail deserialization when missing; value rules (non-empty names,
/// positive price) are checked by the HTTP layer before the store sees the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

/// Payload for a partial update. `None` (or JSON `null`) leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductUpdate {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn keyboard() -> Product {
        let params = ProductCreate {
            name: "Keyboard".to_string(),
            description: "87 keys".to_string(),
            price: 399.0,
            stock: 150,
            category: "Peripherals".to_string(),
        };
        Product::stamped(ProductId(1), params, Utc::now())
    }

    #[test]
    fn test_stamped_sets_both_timestamps() {
        let product = keyboard();
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_changes_only_present_fields() {
        let mut product = keyboard();
        let before = product.clone();
        let later = before.updated_at + Duration::seconds(5);

        product.apply(
            ProductUpdate {
                price: Some(199.99),
                ..Default::default()
            },
            later,
        );

        assert_eq!(product.price, 199.99);
        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.stock, before.stock);
        assert_eq!(product.category, before.category);
        assert_eq!(product.created_at, before.created_at);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn test_apply_never_moves_updated_at_backwards() {
        let mut product = keyboard();
        let before = product.updated_at;
        product.apply(ProductUpdate::default(), before - Duration::seconds(30));
        assert_eq!(product.updated_at, before);
    }

    #[test]
    fn test_empty_string_is_a_present_value() {
        let mut product = keyboard();
        product.apply(
            ProductUpdate {
                description: Some(String::new()),
                stock: Some(0),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_update_deserializes_null_as_absent() {
        let update: ProductUpdate =
            serde_json::from_str(r#"{"price": 5.5, "name": null}"#).unwrap();
        assert_eq!(update.price, Some(5.5));
        assert!(update.name.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_product_serializes_with_numeric_id() {
        let json = serde_json::to_value(keyboard()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["stock"], 150);
        assert!(json["created_at"].is_string());
    }
}
