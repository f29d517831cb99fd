//! # Cart Store
//!
//! Owns the cart for one browsing session.
//!
//! ## Lifecycle
//! Created empty and closed when the session starts, mutated only through
//! [`CartStore::dispatch`], dropped when the session ends. Nothing is
//! persisted.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore::dispatch                                  │
//! │                                                                         │
//! │  CartAction ──► lock ──► reduce(&state, action) ──► state = next        │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                    CartSummary (items + itemCount + total)              │
//! │                        │                    │                           │
//! │                        ▼                    ▼                           │
//! │                 returned to caller   published on watch channel         │
//! │                                      (badge, drawer, buttons)           │
//! │                                                                         │
//! │  The lock is held for the whole transition, so two dispatches never     │
//! │  interleave and subscribers see snapshots in dispatch order.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crema_core::{reduce, CartAction, CartState, CartSummary, Money};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::StoreConfig;

/// The session cart.
///
/// Shared by reference (or `Arc`) between every surface that reads or
/// changes the cart. Each transition yields an immutable [`CartSummary`].
#[derive(Debug)]
pub struct CartStore {
    session_id: Uuid,
    currency_symbol: String,
    cart: Mutex<CartState>,
    changes: watch::Sender<CartSummary>,
}

impl CartStore {
    /// Creates an empty, closed cart with default settings.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates an empty, closed cart formatting totals per `config`.
    pub fn with_config(config: &StoreConfig) -> Self {
        let state = CartState::new();
        let (changes, _) = watch::channel(CartSummary::with_symbol(&state, &config.currency_symbol));
        let store = CartStore {
            session_id: Uuid::new_v4(),
            currency_symbol: config.currency_symbol.clone(),
            cart: Mutex::new(state),
            changes,
        };
        info!(session_id = %store.session_id, "cart session started");
        store
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Applies an action and returns the resulting snapshot.
    ///
    /// Never fails: unknown ids are no-ops and quantities are clamped.
    pub fn dispatch(&self, action: CartAction) -> CartSummary {
        let kind = action.kind();
        let mut cart = self.lock();

        *cart = reduce(&cart, action);
        let summary = CartSummary::with_symbol(&cart, &self.currency_symbol);
        self.changes.send_replace(summary.clone());

        debug!(
            session_id = %self.session_id,
            action = kind,
            lines = cart.line_count(),
            item_count = summary.item_count,
            total = %summary.formatted_total,
            is_open = summary.is_open,
            "cart updated"
        );
        summary
    }

    /// Current state plus derived values.
    pub fn snapshot(&self) -> CartSummary {
        self.with_cart(|cart| CartSummary::with_symbol(cart, &self.currency_symbol))
    }

    /// A copy of the raw state.
    pub fn state(&self) -> CartState {
        self.with_cart(CartState::clone)
    }

    pub fn item_count(&self) -> i64 {
        self.with_cart(CartState::item_count)
    }

    pub fn cart_total(&self) -> Money {
        self.with_cart(CartState::cart_total)
    }

    pub fn is_open(&self) -> bool {
        self.with_cart(|cart| cart.is_open)
    }

    /// Receives a new snapshot after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.changes.subscribe()
    }

    /// Runs `f` with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use crema_store::CartStore;
    ///
    /// let store = CartStore::new();
    /// let empty = store.with_cart(|cart| cart.is_empty());
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    // State is only replaced after `reduce` returns, so a poisoned lock
    // still guards a whole state.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
