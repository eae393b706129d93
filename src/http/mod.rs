//! # HTTP Layer
//!
//! Thin REST surface over the product store:
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/products` | 200 | — |
//! | GET | `/api/products/:id` | 200 | 400 bad id, 404 |
//! | POST | `/api/products` | 201 | 400 bad body |
//! | PUT | `/api/products/:id` | 200 | 400 bad id/body, 404 |
//! | DELETE | `/api/products/:id` | 200 | 400 bad id, 404 |
//! | GET | `/health` | 200 | — |
//!
//! Every response body is an [`Envelope`]. Path and body problems are rejected here with
//! 400 before the store is called; the store itself only ever reports not-found.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod router;
pub mod validation;

pub use envelope::Envelope;
pub use error::ApiError;
pub use router::{create_cors_layer, create_router};

use crate::clients::ProductClient;

/// State shared by all handlers: a handle to the single product store.
#[derive(Clone, Debug)]
pub struct AppState {
    pub products: ProductClient,
}

impl AppState {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }
}
