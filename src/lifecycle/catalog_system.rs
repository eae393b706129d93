use crate::clients::ProductClient;
use tracing::{error, info};

/// The runtime orchestrator for the product store.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Dependency Wiring**: Handing out the [`ProductClient`] the HTTP layer is built on
///
/// There is exactly one store per system; every handler works on clones of the same client.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
/// let product = system.product_client.create_product(params).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the seeded store and spawns its actor with the default channel capacity.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(crate::product_actor::DEFAULT_CAPACITY)
    }

    /// Like [`CatalogSystem::new`], with an explicit request channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::with_capacity(capacity);
        let handle = tokio::spawn(product_actor.run());

        Self {
            product_client: ProductClient::new(product_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to drain its queue and exit.
    /// Clones of the client handed out earlier (e.g. to a router) must be dropped first,
    /// otherwise this waits for them.
    ///
    /// Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
