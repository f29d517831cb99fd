//! # crema-store
//!
//! The browsing session's cart store and the commands the website's
//! presentation layer calls.
//!
//! ## Module Structure
//! ```text
//! crema_store/
//! ├── lib.rs          ← You are here (module wiring, tracing setup)
//! ├── store.rs        ← CartStore: owned session cart, change notifications
//! ├── commands.rs     ← One handler per user action
//! ├── feedback.rs     ← "Added!" button state with a reset timer
//! ├── config.rs       ← StoreConfig (env + defaults)
//! ├── error.rs        ← ApiError returned to the frontend
//! └── bin/replay.rs   ← Replays a JSON action log through a fresh store
//! ```
//!
//! ## Ownership
//! There is no global cart. Whoever hosts the session creates a
//! [`CartStore`] and hands out references to it; every rendering surface
//! reads snapshots or subscribes for changes.

pub mod commands;
pub mod config;
pub mod error;
pub mod feedback;
pub mod store;

pub use config::StoreConfig;
pub use error::{ApiError, ErrorCode};
pub use feedback::AddedFeedback;
pub use store::CartStore;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart transition
/// - `RUST_LOG=crema_store=trace` - Trace for the store only
/// - Default: INFO, DEBUG for crema crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,crema_core=debug,crema_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
