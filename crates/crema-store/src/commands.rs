//! # Cart Commands
//!
//! One handler per user action on the website.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  open_cart    ┌──────────┐   │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────►│  Drawer  │   │
//! │  │  Cart    │                │          │◄──────────────│  Open    │   │
//! │  └──────────┘                └──────────┘  close_cart   └──────────┘   │
//! │       ▲                       │      ▲                                  │
//! │       │                 update_cart_item                                │
//! │       │                 remove_from_cart                                │
//! │       │                       │                                          │
//! │       └──────── clear_cart ◄──┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only boundary input can fail (unknown menu ids, malformed payloads or
//! quantity fields). Once an action reaches the store it always applies.

use chrono::{NaiveDate, NaiveDateTime};
use crema_core::schedule::{todays_schedule, OrderingStatus, ScheduleEntry, WeeklyHours};
use crema_core::validation::validate_quantity_input;
use crema_core::{CartAction, CartItemInput, CartSummary, Menu};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::store::CartStore;

/// Cart response: the session it belongs to plus the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: Uuid,
    pub cart: CartSummary,
}

impl CartResponse {
    fn new(store: &CartStore, cart: CartSummary) -> Self {
        CartResponse {
            session_id: store.session_id(),
            cart,
        }
    }
}

/// Gets the current cart (badge count, drawer contents, total).
pub fn get_cart(store: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::new(store, store.snapshot())
}

/// Adds one of a menu item by id.
///
/// ## User Workflow
/// ```text
/// Menu page: "Add to cart" under Latte
///      │
///      ▼
/// add_to_cart(menu, "latte")
///      │
///      ├── unknown id? → NOT_FOUND
///      │
///      └── AddItem(latte.to_cart_input()) → updated cart
/// ```
pub fn add_to_cart(store: &CartStore, menu: &Menu, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = menu.require(item_id)?;
    let cart = store.dispatch(CartAction::AddItem(item.to_cart_input()));
    Ok(CartResponse::new(store, cart))
}

/// Adds an item described by the caller rather than the menu
/// (e.g. an event ticket). The payload is validated first.
pub fn add_custom_item(store: &CartStore, input: CartItemInput) -> Result<CartResponse, ApiError> {
    debug!(item_id = %input.id, "add_custom_item command");

    input.validate()?;
    let cart = store.dispatch(CartAction::AddItem(input));
    Ok(CartResponse::new(store, cart))
}

/// Sets a line's quantity from the drawer's quantity field.
///
/// ## Behavior
/// - Non-numeric text: `VALIDATION_ERROR`
/// - 0 or negative: clamped to 1, the line stays
/// - Unknown id: unchanged cart
pub fn update_cart_item(
    store: &CartStore,
    item_id: &str,
    raw_quantity: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %raw_quantity, "update_cart_item command");

    let quantity = validate_quantity_input(raw_quantity)?;
    let cart = store.dispatch(CartAction::UpdateQuantity {
        id: item_id.to_string(),
        quantity,
    });
    Ok(CartResponse::new(store, cart))
}

/// Removes a line; removing an absent id is not an error.
pub fn remove_from_cart(store: &CartStore, item_id: &str) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");
    let cart = store.dispatch(CartAction::RemoveItem(item_id.to_string()));
    CartResponse::new(store, cart)
}

/// Cart button and overlay click.
pub fn toggle_cart(store: &CartStore) -> CartResponse {
    debug!("toggle_cart command");
    CartResponse::new(store, store.dispatch(CartAction::ToggleCart))
}

/// "View cart" from the add-to-cart confirmation.
pub fn open_cart(store: &CartStore) -> CartResponse {
    debug!("open_cart command");
    CartResponse::new(store, store.dispatch(CartAction::OpenCart))
}

/// Drawer close button.
pub fn close_cart(store: &CartStore) -> CartResponse {
    debug!("close_cart command");
    CartResponse::new(store, store.dispatch(CartAction::CloseCart))
}

/// Empties the cart; the drawer stays as it was.
pub fn clear_cart(store: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::new(store, store.dispatch(CartAction::ClearCart))
}

/// Applies an action received as data (e.g. a replayed log), validating
/// add payloads the same way [`add_custom_item`] does.
pub fn apply_action(store: &CartStore, action: CartAction) -> Result<CartResponse, ApiError> {
    if let CartAction::AddItem(input) = &action {
        input.validate()?;
    }
    Ok(CartResponse::new(store, store.dispatch(action)))
}

// =============================================================================
// Visit Us / Ordering
// =============================================================================

/// The featured location card and its map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitCard {
    pub entry: ScheduleEntry,
    pub map_embed_url: String,
}

/// Today's location card for the "Visit us" section.
pub fn get_visit_card(entries: &[ScheduleEntry], today: NaiveDate) -> VisitCard {
    let entry = todays_schedule(entries, today);
    debug!(location = %entry.location, "get_visit_card command");
    VisitCard {
        map_embed_url: entry.map_embed_url(),
        entry,
    }
}

/// Whether the sticky "Order Pickup" button is enabled right now.
pub fn get_ordering_status(hours: &WeeklyHours, now: NaiveDateTime) -> OrderingStatus {
    let status = hours.ordering_status(now);
    debug!(is_open = status.is_open, "get_ordering_status command");
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crema_core::locations::house_locations;
    use crema_core::Money;

    #[test]
    fn test_add_unknown_menu_item() {
        let store = CartStore::new();
        let err = add_to_cart(&store, &Menu::house(), "flat-white").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_update_with_non_numeric_quantity() {
        let store = CartStore::new();
        add_to_cart(&store, &Menu::house(), "latte").unwrap();

        let err = update_cart_item(&store, "latte", "lots").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_add_custom_item_rejects_negative_price() {
        let store = CartStore::new();
        let input = CartItemInput {
            id: "tasting-ticket".to_string(),
            name: "Tasting Ticket".to_string(),
            price: Money::from_cents(-1500),
            image: None,
        };
        let err = add_custom_item(&store, input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(store.snapshot().items.is_empty());
    }

    #[test]
    fn test_apply_action_validates_add_payload() {
        let store = CartStore::new();
        let bad = CartAction::AddItem(CartItemInput {
            id: "Bad Id".to_string(),
            name: "Bad".to_string(),
            price: Money::from_cents(100),
            image: None,
        });
        assert!(apply_action(&store, bad).is_err());
        assert!(apply_action(&store, CartAction::ToggleCart).unwrap().cart.is_open);
    }

    #[test]
    fn test_visit_card() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let card = get_visit_card(&house_locations(today), today);
        assert_eq!(card.entry.location, "Downtown Cafe");
        assert!(card.map_embed_url.contains("&q=123+Court+St"));
    }

    #[test]
    fn test_ordering_status() {
        let hours = WeeklyHours::house().unwrap();
        let saturday_night = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();

        let status = get_ordering_status(&hours, saturday_night);
        assert!(!status.is_open);
        assert_eq!(status.disabled_reason.as_deref(), Some("Opens 7:00"));
    }
}
