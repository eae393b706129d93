//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource must implement to be
//! managed by the generic `ResourceActor`. It specifies associated types for IDs, DTOs and
//! errors, plus the construction and update hooks the actor calls while it holds exclusive
//! access to the store.
//!
//! # Architecture Note
//! The actor owns the map and the ID counter; the entity only knows how to build itself
//! from a create payload and how to apply an update payload to itself. Everything about
//! channels, ordering and lookups stays in [`ResourceActor`](crate::ResourceActor).
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Product` entity requires a `ProductCreate` payload, and the compiler rejects any
//! other payload type.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// Hooks are synchronous: they run inside the actor's message loop while no other
/// request can observe the entity, so an update is never seen half-applied.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework uses a **Per-Actor Error Type** (one enum for the whole actor) rather
    /// than one error type per operation. Clients deal with a single error type, which keeps
    /// pattern matching at the call site simple.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// The actor only commits the ID to the store when this returns `Ok`, so a rejected
    /// payload never consumes an ID.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update payload in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
