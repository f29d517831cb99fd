//! # Cart Replay
//!
//! Replays a JSON list of cart actions through a fresh session store and
//! prints the final cart.
//!
//! ## Usage
//! ```bash
//! # From a file
//! cargo run -p crema-store --bin replay -- actions.json
//!
//! # From stdin
//! echo '[{"type":"ADD_ITEM","payload":{"id":"latte","name":"Latte","price":4.75}}]' \
//!     | cargo run -p crema-store --bin replay
//! ```
//!
//! ## Input Format
//! The same action shape the frontend dispatches, prices in dollars:
//! ```json
//! [
//!   {"type": "ADD_ITEM", "payload": {"id": "espresso", "name": "Espresso", "price": 3.50}},
//!   {"type": "UPDATE_QUANTITY", "payload": {"id": "espresso", "quantity": 3}},
//!   {"type": "TOGGLE_CART"}
//! ]
//! ```
//!
//! Actions with malformed add payloads are skipped with a warning.

use std::env;
use std::fs;
use std::io::{self, Read};

use crema_core::CartAction;
use crema_store::commands::{apply_action, get_cart};
use crema_store::{init_tracing, CartStore, StoreConfig};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let raw = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "reading actions");
            fs::read_to_string(&path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let actions: Vec<CartAction> = serde_json::from_str(&raw)?;

    let config = StoreConfig::from_env();
    let store = CartStore::with_config(&config);

    let total = actions.len();
    let mut skipped = 0usize;
    for (index, action) in actions.into_iter().enumerate() {
        if let Err(err) = apply_action(&store, action) {
            warn!(index, error = %err, "skipping action");
            skipped += 1;
        }
    }

    info!(applied = total - skipped, skipped, "replay finished");
    println!("{}", serde_json::to_string_pretty(&get_cart(&store))?);

    Ok(())
}
