//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Product`] to be managed by the generic [`ResourceActor`](actor_framework::ResourceActor).
//!
//! The store performs no validation of its own: payloads reaching the actor have already
//! been checked by the HTTP layer, so creation and update are infallible here.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use chrono::Utc;
use std::convert::Infallible;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = Infallible;

    /// Creates a new Product with `created_at == updated_at == now`.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Product::stamped(id, params, Utc::now()))
    }

    /// Applies the present fields of `update` and refreshes `updated_at`.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), Self::Error> {
        self.apply(update, Utc::now());
        Ok(())
    }
}
