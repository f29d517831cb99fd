//! # Menu Catalog
//!
//! The shop's menu: categories of items with stable ids and exact prices.
//! Add-to-cart controls turn a [`MenuItem`] into a [`CartItemInput`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::CartItemInput;
use crate::validation::{validate_item_id, validate_item_name, validate_price_cents, ValidationResult};

/// A purchasable item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// The payload an add-to-cart button sends for this item.
    pub fn to_cart_input(&self) -> CartItemInput {
        CartItemInput {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

/// A titled group of menu items ("Coffee", "Tea", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu.
///
/// ## Invariants
/// - Item ids are unique across all categories
/// - Every item passes the same checks as a `CartItemInput`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    /// Builds a menu, rejecting duplicate ids and malformed items.
    pub fn new(categories: Vec<MenuCategory>) -> ValidationResult<Self> {
        let mut seen = HashSet::new();
        for item in categories.iter().flat_map(|c| c.items.iter()) {
            validate_item_id(&item.id)?;
            validate_item_name(&item.name)?;
            validate_price_cents(item.price.cents())?;
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "menu item id".to_string(),
                    value: item.id.clone(),
                });
            }
        }
        Ok(Menu { categories })
    }

    /// The house menu served on the website.
    pub fn house() -> Self {
        Menu {
            categories: vec![
                category(
                    "Coffee",
                    &[
                        ("espresso", "Espresso", "Rich and concentrated coffee", 350, "photo-1504674900247-0877df9cc836"),
                        ("americano", "Americano", "Espresso with hot water", 375, "photo-1464983953574-0892a716854b"),
                        ("cappuccino", "Cappuccino", "Espresso with steamed milk and foam", 450, "photo-1509042239860-f550ce710b93"),
                        ("latte", "Latte", "Espresso with steamed milk", 475, "photo-1511920170033-f8396924c348"),
                        ("mocha", "Mocha", "Espresso with chocolate and steamed milk", 500, "photo-1465101046530-73398c7f28ca"),
                    ],
                ),
                category(
                    "Tea",
                    &[
                        ("earl-grey", "Earl Grey", "Black tea with bergamot", 350, "photo-1519125323398-675f0ddb6308"),
                        ("green-tea", "Green Tea", "Light and refreshing", 350, "photo-1502741338009-cac2772e18bc"),
                        ("chamomile", "Chamomile", "Herbal tea with floral notes", 350, "photo-1509228468518-180dd4864904"),
                    ],
                ),
                category(
                    "Pastries",
                    &[
                        ("croissant", "Croissant", "Buttery and flaky", 375, ""),
                        ("blueberry-muffin", "Blueberry Muffin", "Freshly baked daily", 350, ""),
                        ("cinnamon-roll", "Cinnamon Roll", "With cream cheese frosting", 425, ""),
                    ],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// All items, in menu order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Finds an item by id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    /// Like [`Menu::find`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&MenuItem> {
        self.find(id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))
    }
}

/// (id, name, description, price in cents, unsplash photo id or "")
type MenuRow<'a> = (&'a str, &'a str, &'a str, i64, &'a str);

fn category(name: &str, rows: &[MenuRow<'_>]) -> MenuCategory {
    MenuCategory {
        name: name.to_string(),
        items: rows
            .iter()
            .map(|&(id, item_name, description, cents, photo)| MenuItem {
                id: id.to_string(),
                name: item_name.to_string(),
                description: description.to_string(),
                price: Money::from_cents(cents),
                image: (!photo.is_empty()).then(|| {
                    format!(
                        "https://images.unsplash.com/{}?auto=format&fit=crop&w=400&q=80",
                        photo
                    )
                }),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_is_valid() {
        let house = Menu::house();
        let rebuilt = Menu::new(house.categories().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(house.items().count(), 11);
    }

    #[test]
    fn test_find() {
        let menu = Menu::house();
        let latte = menu.find("latte").unwrap();
        assert_eq!(latte.price.cents(), 475);
        assert!(latte.image.is_some());

        let croissant = menu.find("croissant").unwrap();
        assert!(croissant.image.is_none());

        assert!(menu.find("flat-white").is_none());
        assert!(matches!(
            menu.require("flat-white"),
            Err(CoreError::MenuItemNotFound(_))
        ));
    }

    #[test]
    fn test_to_cart_input() {
        let menu = Menu::house();
        let input = menu.find("espresso").unwrap().to_cart_input();
        assert_eq!(input.id, "espresso");
        assert_eq!(input.price.cents(), 350);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dupes = vec![
            category("Coffee", &[("latte", "Latte", "", 475, "")]),
            category("Specials", &[("latte", "Pumpkin Latte", "", 550, "")]),
        ];
        assert!(matches!(
            Menu::new(dupes),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let bad = vec![category("Coffee", &[("latte", "Latte", "", -1, "")])];
        assert!(Menu::new(bad).is_err());
    }
}
