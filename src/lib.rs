//! # Product Catalog
//!
//! > **An in-memory product catalog behind a small JSON REST API.**
//!
//! The catalog is a single store of [`Product`](model::Product) records keyed by integer ID.
//! It is owned by one [`ResourceActor`](actor_framework::ResourceActor) task: every
//! request is handled to completion before the next one starts, so mutations are totally
//! ordered, a create's ID assignment and insertion are atomic, and no reader ever sees a
//! half-applied update.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product), its [`ProductId`](model::ProductId), and the
//! [`ProductCreate`](model::ProductCreate) / [`ProductUpdate`](model::ProductUpdate) payloads.
//! Updates are partial: every field is an `Option`.
//!
//! ### 2. The Store ([`product_actor`])
//! The [`ActorEntity`](actor_framework::ActorEntity) implementation for `Product`, the seed
//! catalog (IDs 1-5), and [`ProductError`](product_actor::ProductError).
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient): list, get, create, update, delete.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) spawns and shuts down the store;
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ### 5. The Surface ([`http`], [`settings`], [`cli`])
//! axum routes with the `{code, message, data}` envelope, CORS, layered configuration and
//! the command line.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:8080/api/products
//! ```

pub mod cli;
pub mod clients;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod settings;
