//! # crema-core: Pure Logic for the Crema Coffee Shop
//!
//! The cart state machine and the small lookups the shop's website needs
//! (menu, locations, opening hours), as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Crema Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │   Menu ──► Add to cart ──► Cart drawer ──► Visit us / map      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                crema-store (CartStore, commands)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ crema-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │  catalog  │  │ schedule  │  │   │
//! │  │   │ CartState │  │   Money   │  │   Menu    │  │WeeklyHours│  │   │
//! │  │   │  reduce   │  │           │  │ MenuItem  │  │ map URLs  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart state, actions and the `reduce` transition
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Line items and add-to-cart payloads
//! - [`catalog`] - The shop's menu
//! - [`schedule`] - Today's location, map embeds, opening hours
//! - [`locations`] - The shop's location list
//! - [`validation`] - Boundary checks for input coming from the UI
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use crema_core::cart::CartState;
//! use crema_core::money::Money;
//! use crema_core::types::CartItemInput;
//!
//! let espresso = CartItemInput::new("espresso", "Espresso", Money::from_cents(350), None).unwrap();
//!
//! let cart = CartState::default()
//!     .add_item(espresso.clone())
//!     .add_item(espresso);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.cart_total().to_string(), "$7.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod locations;
pub mod money;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{reduce, CartAction, CartState, CartSummary};
pub use catalog::{Menu, MenuCategory, MenuItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartItemInput, CartLineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a line item can hold.
///
/// Quantity updates below this are clamped up to it, never removing the item.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Longest accepted item id.
pub const MAX_ITEM_ID_LEN: usize = 64;
