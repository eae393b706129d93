//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// ## ResourceActor
///
/// The `ResourceActor<T>` struct is the *server* side of the framework. It owns the
/// in‑memory store for a given entity type `T: ActorEntity` and processes all incoming
/// `ResourceRequest<T>` messages sequentially. The actor runs in its own Tokio task,
/// which gives it exclusive access to its state without any locking.
///
/// * **Concurrency model** – one message at a time, so every mutation is totally ordered
///   and no request ever observes a half-applied update.
/// * **Uniform API** – works with any entity that implements `ActorEntity`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed** (optional): Call [`ResourceActor::insert_with`] before the loop starts.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate { label: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Error = TagError;
///
///     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: params.label })
///     }
///     fn on_update(&mut self, update: TagUpdate) -> Result<(), TagError> {
///         if let Some(label) = update.label { self.label = label; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (mut actor, client) = ResourceActor::<Tag>::new(10);
///     actor.insert_with(|id| Tag { id, label: "seed".into() }).unwrap();
///     tokio::spawn(actor.run());
///
///     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
///     assert_eq!(tag.id, 2);
/// }
/// ```
///
/// # Implementation Details
///
/// The actor maintains an internal `HashMap` (`store`) mapping IDs to entities and a `u32`
/// counter (`next_id`) for ID generation. IDs start at 1 and are never reused.
///
/// * **Create**: builds the entity from `next_id`; only on success is the entity inserted
///   and the counter advanced, in the same step. Returns a clone of the stored entity.
/// * **List**: clones every stored entity. Order is the map's iteration order.
/// * **Get**: returns a clone of the entity if found, or `None`.
/// * **Update**: calls `on_update` on the stored entity and returns its new state.
/// * **Delete**: removes the entity.
///
/// Update and Delete answer [`FrameworkError::NotFound`] for unknown IDs. Once the counter
/// reaches `u32::MAX`, Create answers [`FrameworkError::IdsExhausted`] instead of wrapping.
#[derive(Debug)]
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `ResourceActor` instance (the server), which must be run via `.run()`.
    /// 2. The `ResourceClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Inserts a pre-built entity under the next free ID.
    ///
    /// Intended for loading fixtures before [`run`](Self::run); the builder receives the
    /// assigned ID so the entity can carry it.
    pub fn insert_with(
        &mut self,
        build: impl FnOnce(T::Id) -> T,
    ) -> Result<T::Id, FrameworkError> {
        let following = self.following_id()?;
        let id = T::Id::from(self.next_id);
        self.store.insert(id.clone(), build(id.clone()));
        self.next_id = following;
        Ok(id)
    }

    fn following_id(&self) -> Result<u32, FrameworkError> {
        self.next_id
            .checked_add(1)
            .ok_or(FrameworkError::IdsExhausted)
    }

    /// Number of entities currently stored.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The ID the next successful create will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let following = match self.following_id() {
                        Ok(following) => following,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            self.next_id = following;
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Apply to a copy so a failing hook leaves the stored entity untouched.
                        let mut next = item.clone();
                        if let Err(e) = next.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = next.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(next));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
