//! End-to-end cart sessions through the commands a website visitor triggers.

use std::sync::Arc;
use std::thread;

use crema_core::{CartAction, CartItemInput, Menu, Money};
use crema_store::commands::{
    add_custom_item, add_to_cart, apply_action, clear_cart, close_cart, get_cart, open_cart,
    remove_from_cart, toggle_cart, update_cart_item,
};
use crema_store::CartStore;

#[test]
fn espresso_added_twice() {
    let store = CartStore::new();
    let menu = Menu::house();

    add_to_cart(&store, &menu, "espresso").unwrap();
    let response = add_to_cart(&store, &menu, "espresso").unwrap();

    assert_eq!(response.cart.items.len(), 1);
    assert_eq!(response.cart.items[0].quantity, 2);
    assert_eq!(response.cart.item_count, 2);
    assert_eq!(response.cart.cart_total.cents(), 700);
    assert_eq!(response.cart.formatted_total, "$7.00");
}

#[test]
fn latte_quantity_zero_clamps_to_one() {
    let store = CartStore::new();
    add_to_cart(&store, &Menu::house(), "latte").unwrap();

    let response = update_cart_item(&store, "latte", "0").unwrap();

    assert_eq!(response.cart.items[0].quantity, 1);
    assert_eq!(response.cart.cart_total.cents(), 475);
}

#[test]
fn removing_one_of_two_items() {
    let store = CartStore::new();
    let menu = Menu::house();
    add_to_cart(&store, &menu, "cappuccino").unwrap();
    add_to_cart(&store, &menu, "cinnamon-roll").unwrap();
    update_cart_item(&store, "cinnamon-roll", "2").unwrap();
    let roll = store.state().get("cinnamon-roll").cloned().unwrap();

    let response = remove_from_cart(&store, "cappuccino");
    assert_eq!(response.cart.items, vec![roll]);

    let again = remove_from_cart(&store, "cappuccino");
    assert_eq!(again.cart, response.cart);
}

#[test]
fn drawer_visibility_is_independent_of_items() {
    let store = CartStore::new();
    add_to_cart(&store, &Menu::house(), "mocha").unwrap();

    assert!(open_cart(&store).cart.is_open);
    assert!(!toggle_cart(&store).cart.is_open);
    assert!(toggle_cart(&store).cart.is_open);

    let cleared = clear_cart(&store);
    assert!(cleared.cart.is_open);
    assert_eq!(cleared.cart.item_count, 0);
    assert!(cleared.cart.cart_total.is_zero());

    assert!(!close_cart(&store).cart.is_open);
}

#[test]
fn custom_item_keeps_first_seen_price() {
    let store = CartStore::new();
    let ticket = |cents| {
        CartItemInput::new("tasting-ticket", "Tasting", Money::from_cents(cents), None).unwrap()
    };

    add_custom_item(&store, ticket(1500)).unwrap();
    let response = add_custom_item(&store, ticket(2000)).unwrap();

    assert_eq!(response.cart.items[0].price.cents(), 1500);
    assert_eq!(response.cart.cart_total.cents(), 3000);
}

#[test]
fn concurrent_adds_are_not_lost() {
    let store = Arc::new(CartStore::new());
    let menu = Arc::new(Menu::house());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let menu = Arc::clone(&menu);
            thread::spawn(move || {
                for _ in 0..25 {
                    add_to_cart(&store, &menu, "green-tea").unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let cart = get_cart(&store).cart;
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.item_count, 200);
    assert_eq!(cart.cart_total.cents(), 200 * 350);
}

#[test]
fn response_json_shape() {
    let store = CartStore::new();
    add_to_cart(&store, &Menu::house(), "croissant").unwrap();

    let json = serde_json::to_value(get_cart(&store)).unwrap();
    assert_eq!(json["cart"]["itemCount"], 1);
    assert_eq!(json["cart"]["cartTotal"], 375);
    assert_eq!(json["cart"]["isOpen"], false);
    assert_eq!(json["cart"]["items"][0]["id"], "croissant");
    assert!(json["sessionId"].is_string());
}

#[test]
fn replays_storefront_action_log() {
    let log = r#"[
        {"type": "ADD_ITEM", "payload": {"id": "espresso", "name": "Espresso", "price": 3.50}},
        {"type": "ADD_ITEM", "payload": {"id": "mocha", "name": "Mocha", "price": 5}},
        {"type": "ADD_ITEM", "payload": {"id": "espresso", "name": "Espresso", "price": 3.50}},
        {"type": "UPDATE_QUANTITY", "payload": {"id": "mocha", "quantity": 0}},
        {"type": "TOGGLE_CART"}
    ]"#;
    let actions: Vec<CartAction> = serde_json::from_str(log).unwrap();

    let store = CartStore::new();
    for action in actions {
        apply_action(&store, action).unwrap();
    }

    let cart = get_cart(&store).cart;
    assert_eq!(cart.items[0].price.cents(), 350);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.items[1].price.cents(), 500);
    assert_eq!(cart.items[1].quantity, 1);
    assert_eq!(cart.formatted_total, "$12.00");
    assert!(cart.is_open);
}

#[test]
fn replay_rejects_sub_cent_price() {
    let log = r#"[{"type": "ADD_ITEM", "payload": {"id": "espresso", "name": "Espresso", "price": 3.499}}]"#;
    assert!(serde_json::from_str::<Vec<CartAction>>(log).is_err());
}
