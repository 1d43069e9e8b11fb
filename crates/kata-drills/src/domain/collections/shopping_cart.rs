//! Shopping cart and store fulfilment
//!
//! A cart is an insertion-ordered [`Inventory`] of item counts. Store data
//! is keyed by item name in `BTreeMap`s.

use super::inventory::Inventory;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

pub type Cart = Inventory;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Cart and aisle map disagree on the set of items
    #[error(
        "cart and aisle mapping must list the same items \
         (cart only: {cart_only:?}, aisles only: {aisles_only:?})"
    )]
    KeyMismatch {
        cart_only: Vec<String>,
        aisles_only: Vec<String>,
    },
}

/// Where an item lives in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aisle {
    pub name: String,
    pub refrigerated: bool,
}

impl Aisle {
    pub fn new(name: &str, refrigerated: bool) -> Self {
        Self {
            name: name.to_string(),
            refrigerated,
        }
    }
}

/// One fulfilment line: ordered quantity plus aisle information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub quantity: u32,
    pub aisle: Aisle,
}

/// Stock level of a store item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stock {
    Count(u32),
    OutOfStock,
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::OutOfStock => f.write_str("Out of Stock"),
        }
    }
}

/// Store inventory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    pub stock: Stock,
    pub aisle: Aisle,
}

/// Add one of each listed item to the cart
pub fn add_item(cart: &mut Cart, items: &[&str]) {
    for item in items {
        *cart.count_mut(item) += 1;
    }
}

/// New cart with one of each noted item
pub fn read_notes(notes: &[&str]) -> Cart {
    Cart::from_entries(notes.iter().map(|&item| (item, 1)))
}

/// Replace or add recipes; later updates win
pub fn update_recipes(
    ideas: &mut BTreeMap<String, Cart>,
    updates: impl IntoIterator<Item = (String, Cart)>,
) {
    ideas.extend(updates);
}

/// Cart sorted by item name
pub fn sort_entries(cart: &Cart) -> Cart {
    let mut sorted = cart.clone();
    sorted.sort();
    sorted
}

/// Combine the cart with aisle data, in reverse alphabetical order
pub fn send_to_store(
    cart: &Cart,
    aisles: &BTreeMap<String, Aisle>,
) -> Result<Vec<(String, Fulfillment)>, CartError> {
    let cart_items: BTreeSet<&str> = cart.keys().collect();
    let aisle_items: BTreeSet<&str> = aisles.keys().map(String::as_str).collect();
    if cart_items != aisle_items {
        return Err(CartError::KeyMismatch {
            cart_only: cart_items
                .difference(&aisle_items)
                .map(|s| s.to_string())
                .collect(),
            aisles_only: aisle_items
                .difference(&cart_items)
                .map(|s| s.to_string())
                .collect(),
        });
    }

    Ok(aisles
        .iter()
        .rev()
        .filter_map(|(item, aisle)| {
            cart.get(item).map(|quantity| {
                (
                    item.clone(),
                    Fulfillment {
                        quantity,
                        aisle: aisle.clone(),
                    },
                )
            })
        })
        .collect())
}

/// Subtract fulfilled quantities from store stock
///
/// A remainder of zero or less marks the item out of stock. Items missing
/// from the store are ignored.
pub fn update_store_inventory(
    fulfillment: &[(String, Fulfillment)],
    store: &mut BTreeMap<String, StoreItem>,
) {
    for (item, line) in fulfillment {
        if let Some(entry) = store.get_mut(item) {
            entry.stock = match entry.stock {
                Stock::Count(available) if available > line.quantity => {
                    Stock::Count(available - line.quantity)
                }
                _ => Stock::OutOfStock,
            };
        }
    }
}
