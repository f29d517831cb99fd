//! Cart invariants over arbitrary action sequences.

use std::collections::{HashMap, HashSet};

use crema_core::money::Money;
use crema_core::{reduce, CartAction, CartItemInput, CartState};
use proptest::prelude::*;
use proptest::test_runner::Config;

// A small id pool so sequences revisit the same lines.
const IDS: &[&str] = &["espresso", "latte", "mocha", "croissant", "green-tea"];

fn id_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(IDS).prop_map(str::to_string)
}

fn input_strategy() -> impl Strategy<Value = CartItemInput> {
    (
        id_strategy(),
        "[A-Z][a-z]{2,10}",
        0_i64..10_000,
        proptest::option::of("[a-z]{1,8}\\.jpg"),
    )
        .prop_map(|(id, name, cents, image)| CartItemInput {
            id,
            name,
            price: Money::from_cents(cents),
            image,
        })
}

fn action_strategy() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => input_strategy().prop_map(CartAction::AddItem),
        1 => id_strategy().prop_map(CartAction::RemoveItem),
        2 => (id_strategy(), -5_i64..50).prop_map(|(id, quantity)| CartAction::UpdateQuantity { id, quantity }),
        1 => Just(CartAction::ToggleCart),
        1 => Just(CartAction::OpenCart),
        1 => Just(CartAction::CloseCart),
        1 => Just(CartAction::ClearCart),
    ]
}

fn assert_invariants(state: &CartState) -> Result<(), TestCaseError> {
    let ids: HashSet<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
    prop_assert_eq!(ids.len(), state.items.len(), "duplicate line ids");

    for item in &state.items {
        prop_assert!(item.quantity >= 1, "{} has quantity {}", item.id, item.quantity);
    }

    let quantity_sum: i64 = state.items.iter().map(|item| item.quantity).sum();
    prop_assert_eq!(state.item_count(), quantity_sum);

    let total: i64 = state
        .items
        .iter()
        .map(|item| item.price.cents() * item.quantity)
        .sum();
    prop_assert_eq!(state.cart_total().cents(), total);
    Ok(())
}

type Metadata = (String, Money, Option<String>);

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn every_reachable_state_keeps_cart_invariants(
        actions in proptest::collection::vec(action_strategy(), 0..64)
    ) {
        let mut state = CartState::default();
        for action in actions {
            let before = state.clone();
            let next = reduce(&state, action.clone());

            prop_assert_eq!(&state, &before);
            assert_invariants(&next)?;

            if action == CartAction::ToggleCart {
                prop_assert_eq!(next.is_open, !before.is_open);
                prop_assert_eq!(next.item_count(), before.item_count());
                prop_assert_eq!(&next.items, &before.items);
            }
            state = next;
        }
    }

    #[test]
    fn repeat_adds_keep_first_seen_metadata(
        actions in proptest::collection::vec(action_strategy(), 0..64)
    ) {
        let mut state = CartState::default();
        let mut first_seen: HashMap<String, Metadata> = HashMap::new();

        for action in actions {
            match &action {
                CartAction::AddItem(input) if state.get(&input.id).is_none() => {
                    first_seen.insert(
                        input.id.clone(),
                        (input.name.clone(), input.price, input.image.clone()),
                    );
                }
                CartAction::RemoveItem(id) => {
                    first_seen.remove(id);
                }
                CartAction::ClearCart => first_seen.clear(),
                _ => {}
            }

            state = reduce(&state, action);

            prop_assert_eq!(first_seen.len(), state.items.len());
            for item in &state.items {
                let (name, price, image) = &first_seen[&item.id];
                prop_assert_eq!(&item.name, name);
                prop_assert_eq!(item.price, *price);
                prop_assert_eq!(&item.image, image);
            }
        }
    }

    #[test]
    fn adds_of_one_id_count_up(
        input in input_strategy(),
        times in 1_usize..40
    ) {
        let mut state = CartState::default();
        for _ in 0..times {
            state = reduce(&state, CartAction::AddItem(input.clone()));
        }

        prop_assert_eq!(state.items.len(), 1);
        prop_assert_eq!(state.item_count(), times as i64);
        prop_assert_eq!(state.cart_total(), input.price * times as i64);
    }

    #[test]
    fn update_quantity_clamps_to_at_least_one(
        input in input_strategy(),
        quantity in any::<i64>()
    ) {
        let id = input.id.clone();
        let state = reduce(&CartState::default(), CartAction::AddItem(input));
        let state = reduce(&state, CartAction::UpdateQuantity { id: id.clone(), quantity });

        let line = state.get(&id).cloned();
        prop_assert_eq!(line.map(|item| item.quantity), Some(quantity.max(1)));
    }
}
