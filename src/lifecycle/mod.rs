//! # System Lifecycle
//!
//! Starting, wiring and stopping the product store, plus the binary's logging setup.
//!
//! ## Startup
//!
//! [`CatalogSystem::new`] builds the seeded product actor, spawns its message loop on the
//! Tokio runtime, and exposes the [`ProductClient`](crate::clients::ProductClient). The client
//! is the only handle to the store: the HTTP router receives a clone through its state, so
//! there is no global store instance.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - [`CatalogSystem::shutdown`] waits for the actor task
//!
//! The binary stops the HTTP server first (dropping the router and its client clones), then
//! shuts the system down.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::*;
