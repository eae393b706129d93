//! # Actor Framework
//!
//! This crate provides the building blocks for owning a collection of resources inside a
//! single Tokio task and talking to it through a cloneable, type-safe client. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**.
//!
//! ## Why an actor instead of a lock?
//!
//! - The actor task is the only code that ever touches the map and the ID counter, so there
//!   is no lock to forget and no guard to hold across an `.await`.
//! - Requests are processed one at a time, in arrival order. Every mutation is therefore
//!   totally ordered, and a create's ID assignment and insertion happen in the same step.
//! - Callers get clones of the stored entities, never references into the store.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model and its create/update rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and ID assignment
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     body: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { body: String }
//! #[derive(Debug)] struct NoteUpdate { body: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, body: params.body })
//!     }
//!
//!     fn on_update(&mut self, update: NoteUpdate) -> Result<(), Self::Error> {
//!         if let Some(body) = update.body { self.body = body; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let note = client.create(NoteCreate { body: "hello".into() }).await.unwrap();
//!     let fetched = client.get(note.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.body, "hello");
//!
//!     client.delete(note.id).await.unwrap();
//!     let missing = client.delete(note.id).await;
//!     assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that hands out a real
//! `ResourceClient<T>` answered from canned expectations, so code built around a client can
//! be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
