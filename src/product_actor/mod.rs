//! # Product Actor
//!
//! This module implements the product store: a [`ResourceActor`] over [`Product`] that owns
//! every record and the ID counter.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`seed`] - the fixed catalog every new store starts with
//! - [`new()`] - Factory function that creates the seeded actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::product_actor;
//! use product_catalog::clients::ProductClient;
//! use product_catalog::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new();
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         description: String::new(),
//!         price: 29.99,
//!         stock: 100,
//!         category: "Tools".to_string(),
//!     };
//!     let product = client.create_product(params).await?;
//!     assert_eq!(product.id.0, 6); // IDs 1-5 are the seed catalog
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};
use chrono::Utc;
use tracing::{debug, warn};

/// Default request channel capacity.
pub const DEFAULT_CAPACITY: usize = 32;

/// Creates a new seeded Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    with_capacity(DEFAULT_CAPACITY)
}

/// Like [`new()`], with an explicit request channel capacity.
///
/// The seed catalog is loaded synchronously before this returns: IDs 1-5 in declared
/// order, all sharing one timestamp.
pub fn with_capacity(capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    let (mut actor, client) = ResourceActor::new(capacity);
    let now = Utc::now();
    for params in seed::mock_products() {
        match actor.insert_with(|id| Product::stamped(id, params, now)) {
            Ok(id) => debug!(%id, "Seeded"),
            Err(e) => {
                warn!(error = %e, "Seeding stopped");
                break;
            }
        }
    }
    (actor, client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_seeded() {
        let (actor, _client) = new();
        assert_eq!(actor.len(), 5);
        assert_eq!(actor.next_id(), 6);
    }
}
