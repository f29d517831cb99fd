//! # Domain Types
//!
//! Line items and the payload used to add them to the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐        add        ┌─────────────────┐             │
//! │  │  CartItemInput  │ ───────────────►  │  CartLineItem   │             │
//! │  │  ─────────────  │                   │  ─────────────  │             │
//! │  │  id             │                   │  id             │             │
//! │  │  name           │                   │  name           │             │
//! │  │  price (Money)  │                   │  price (Money)  │             │
//! │  │  image?         │                   │  quantity >= 1  │             │
//! │  └─────────────────┘                   │  image?         │             │
//! │                                        └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `id` is the catalog's stable identifier ("espresso", "latte") and is
//! also the cart's key: at most one line per id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_item_id, validate_item_name, validate_price_cents, ValidationResult};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One catalog item plus how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Catalog id, unique within the cart.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Unit price, taken from the first add of this id.
    pub price: Money,

    /// Always at least 1.
    pub quantity: i64,

    /// Display asset reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLineItem {
    /// Creates a line with quantity 1 from an add-to-cart payload.
    pub fn from_input(input: CartItemInput) -> Self {
        CartLineItem {
            id: input.id,
            name: input.name,
            price: input.price,
            quantity: crate::MIN_ITEM_QUANTITY,
            image: input.image,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Add-to-cart Payload
// =============================================================================

/// The descriptor an add-to-cart control sends: a line item without quantity.
///
/// On the wire `price` is in decimal currency units as the menu prints it
/// (`"price": 3.50`); once inside it is exact cents like every other `Money`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    pub id: String,
    pub name: String,
    #[serde(with = "crate::money::decimal")]
    #[ts(type = "number")]
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItemInput {
    /// Builds a payload, rejecting malformed ids, empty names and negative prices.
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    /// use crema_core::types::CartItemInput;
    ///
    /// let ok = CartItemInput::new("latte", "Latte", Money::from_cents(475), None);
    /// assert!(ok.is_ok());
    ///
    /// let negative = CartItemInput::new("latte", "Latte", Money::from_cents(-1), None);
    /// assert!(negative.is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: Option<String>,
    ) -> ValidationResult<Self> {
        let input = CartItemInput {
            id: id.into(),
            name: name.into(),
            price,
            image,
        };
        input.validate()?;
        Ok(input)
    }

    /// Re-checks a payload that arrived already built (e.g. deserialized JSON).
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_id(&self.id)?;
        validate_item_name(&self.name)?;
        validate_price_cents(self.price.cents())?;
        Ok(())
    }
}
