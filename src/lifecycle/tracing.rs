//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! - **Filtering**: `RUST_LOG` when set, otherwise the configured `logging.level`.
//! - **Format**: compact text for development, or one JSON object per line.
//! - **No module paths** (`with_target(false)`): the actor tags its events with
//!   `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, with the store size
//! - **Store Operations**: `Created`, `Updated`, `Deleted` at info; `Get`, `List` and full
//!   payloads at debug; `Not found` at warn
//! - **Client Calls**: one span per `ProductClient` method, carrying its arguments
//! - **HTTP Requests**: one span per request from `tower_http`'s `TraceLayer`
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug,tower_http=info cargo run
//! ```

use crate::settings::{LogFormat, LoggingConfig};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Fails if one is already set.
pub fn setup_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .finish()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .finish()
            .try_init(),
    }
}
