//! # Cart State Machine
//!
//! The cart's state, the actions the presentation layer dispatches, and the
//! pure transition between them.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  UI Action                CartAction              State Change          │
//! │  ─────────                ──────────              ────────────          │
//! │                                                                         │
//! │  Add to cart ───────────► AddItem(input) ───────► qty += 1 or push     │
//! │                                                                         │
//! │  Quantity +/- ──────────► UpdateQuantity ───────► qty = max(1, n)      │
//! │                                                                         │
//! │  Trash icon ────────────► RemoveItem(id) ───────► items.retain(!= id)  │
//! │                                                                         │
//! │  Checkout done ─────────► ClearCart ────────────► items.clear()        │
//! │                                                                         │
//! │  Cart button / overlay ─► ToggleCart ───────────► is_open = !is_open   │
//! │  "Added!" confirmation ─► OpenCart ─────────────► is_open = true       │
//! │  Close button ──────────► CloseCart ────────────► is_open = false      │
//! │                                                                         │
//! │  None of these can fail. Unknown ids are no-ops.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Repeated adds keep the first-seen metadata
//! Adding an id that is already in the cart only bumps its quantity. The
//! second payload's name, price and image are ignored, so a catalog price
//! change between two adds of the same id does not reach the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItemInput, CartLineItem};
use crate::MIN_ITEM_QUANTITY;

// =============================================================================
// Cart Action
// =============================================================================

/// Everything the presentation layer can ask the cart to do.
///
/// Serialized in the shape the frontend dispatches:
/// `{"type": "ADD_ITEM", "payload": {"id": "espresso", "name": "Espresso", "price": 3.50}}`,
/// `{"type": "TOGGLE_CART"}`. Add payload prices are decimal currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one of an item, or bump its quantity if already present.
    AddItem(CartItemInput),
    /// Remove the line with this id.
    RemoveItem(String),
    /// Set a line's quantity, clamped to at least 1.
    UpdateQuantity { id: String, quantity: i64 },
    /// Flip drawer visibility.
    ToggleCart,
    /// Show the drawer.
    OpenCart,
    /// Hide the drawer.
    CloseCart,
    /// Empty the cart; visibility is unchanged.
    ClearCart,
}

impl CartAction {
    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ToggleCart => "toggle_cart",
            CartAction::OpenCart => "open_cart",
            CartAction::CloseCart => "close_cart",
            CartAction::ClearCart => "clear_cart",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart: ordered line items plus drawer visibility.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id increases quantity)
/// - Every quantity is >= 1
/// - Prices are >= 0 (enforced when the `CartItemInput` is built)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub is_open: bool,
}

impl CartState {
    /// Creates an empty, closed cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Applies an action to an owned state and returns the next state.
    pub fn apply(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem(input) => {
                match self.items.iter_mut().find(|item| item.id == input.id) {
                    Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                    None => self.items.push(CartLineItem::from_input(input)),
                }
            }
            CartAction::RemoveItem(id) => {
                self.items.retain(|item| item.id != id);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.quantity = quantity.max(MIN_ITEM_QUANTITY);
                }
            }
            CartAction::ToggleCart => self.is_open = !self.is_open,
            CartAction::OpenCart => self.is_open = true,
            CartAction::CloseCart => self.is_open = false,
            CartAction::ClearCart => self.items.clear(),
        }
        self
    }

    /// Adds one of an item. See [`CartAction::AddItem`].
    pub fn add_item(self, input: CartItemInput) -> Self {
        self.apply(CartAction::AddItem(input))
    }

    /// Removes a line by id; no-op if absent.
    pub fn remove_item(self, id: impl Into<String>) -> Self {
        self.apply(CartAction::RemoveItem(id.into()))
    }

    /// Sets a line's quantity to `max(1, quantity)`; no-op if absent.
    pub fn update_quantity(self, id: impl Into<String>, quantity: i64) -> Self {
        self.apply(CartAction::UpdateQuantity {
            id: id.into(),
            quantity,
        })
    }

    pub fn toggle(self) -> Self {
        self.apply(CartAction::ToggleCart)
    }

    pub fn open(self) -> Self {
        self.apply(CartAction::OpenCart)
    }

    pub fn close(self) -> Self {
        self.apply(CartAction::CloseCart)
    }

    pub fn clear(self) -> Self {
        self.apply(CartAction::ClearCart)
    }

    // -------------------------------------------------------------------------
    // Derived values (computed fresh, never stored)
    // -------------------------------------------------------------------------

    /// Total quantity across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Σ price × quantity, exact in cents.
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Pure transition: returns the next state and leaves `state` untouched.
///
/// ## Example
/// ```rust
/// use crema_core::cart::{reduce, CartAction, CartState};
///
/// let before = CartState::default();
/// let after = reduce(&before, CartAction::ToggleCart);
///
/// assert!(!before.is_open);
/// assert!(after.is_open);
/// ```
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    state.clone().apply(action)
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Snapshot handed to rendering surfaces: the state plus its derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub is_open: bool,
    pub item_count: i64,
    pub cart_total: Money,
    /// `cart_total` rounded for display, e.g. `"$7.00"`.
    pub formatted_total: String,
}

impl CartSummary {
    /// Builds a summary using a specific currency symbol for display.
    pub fn with_symbol(cart: &CartState, symbol: &str) -> Self {
        let cart_total = cart.cart_total();
        CartSummary {
            items: cart.items.clone(),
            is_open: cart.is_open,
            item_count: cart.item_count(),
            cart_total,
            formatted_total: cart_total.format_with(symbol),
        }
    }
}

impl From<&CartState> for CartSummary {
    fn from(cart: &CartState) -> Self {
        CartSummary::with_symbol(cart, "$")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
