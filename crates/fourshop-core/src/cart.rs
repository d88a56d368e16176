//! # Cart Aggregator & Billing
//!
//! The mutable collection of line items, plus the derived bill total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Event               Operation                Cart Change         │
//! │  ───────────               ─────────                ───────────         │
//! │                                                                         │
//! │  Scan decoded ───────────► add_scanned() ─────────► +1 by barcode key   │
//! │                                                                         │
//! │  Accept suggestion ──────► add_recommended() ─────► +1 by name key      │
//! │                                                                         │
//! │  Remove pressed ─────────► remove_one_unit() ─────► -1, delete at 0     │
//! │                                                                         │
//! │  Bill rendered ──────────► total() ───────────────► (read only, always  │
//! │                                                      recomputed)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItemKey, Product, RecommendedProduct};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart: a distinct product identity and its quantity.
///
/// ## Design Notes
/// - `key`: identity for aggregation ([`LineItemKey::Barcode`] for
///   scanned products, [`LineItemKey::Name`] for accepted
///   recommendations)
/// - Price is frozen at insertion time; a later scan with the same
///   name but a different payload is a different line item anyway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Aggregation identity.
    pub key: LineItemKey,

    /// Display name.
    pub name: String,

    /// Unit price in paise at time of insertion.
    pub unit_price_paise: i64,

    /// Units of this item in the cart. Always >= 1: items are deleted,
    /// never left at zero.
    pub quantity: i64,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line item per [`LineItemKey`]
/// - Quantity is always >= 1 for any item present
/// - Insertion order of new line items is preserved for display
/// - Maximum unique items: 100, maximum quantity per item: 999
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a scanned product, keyed by its raw barcode payload.
    ///
    /// ## Behavior
    /// - Same barcode already in cart: quantity + 1
    /// - New barcode: appended with quantity 1
    ///
    /// The scanned price is trusted as-is; there is no catalog lookup.
    pub fn add_scanned(&mut self, product: &Product) -> CoreResult<()> {
        self.add_one(product.line_key(), &product.name, product.unit_price_paise)
    }

    /// Adds an accepted recommendation, keyed by name.
    ///
    /// Recommended items carry no barcode, so identity is the name:
    /// accepting the same suggestion twice aggregates to quantity 2.
    pub fn add_recommended(&mut self, item: &RecommendedProduct) -> CoreResult<()> {
        self.add_one(item.line_key(), &item.name, item.unit_price_paise)
    }

    /// Increment-or-insert, generic over the identity key.
    ///
    /// Both add operations funnel through here so the aggregation
    /// rules live in exactly one place.
    fn add_one(&mut self, key: LineItemKey, name: &str, unit_price_paise: i64) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.key == key) {
            if item.quantity + 1 > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: item.quantity + 1,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity += 1;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem {
            key,
            name: name.to_string(),
            unit_price_paise,
            quantity: 1,
        });
        Ok(())
    }

    /// Removes one unit of the item with the given identity.
    ///
    /// ## Behavior
    /// - Quantity drops to 0: the line item is deleted entirely
    /// - Key not present: no-op, returns `false`
    ///
    /// The no-op (rather than an error) is deliberate: only known
    /// identities can be decremented, and the shell's remove button
    /// may race a deletion it has not redrawn yet.
    pub fn remove_one_unit(&mut self, key: &LineItemKey) -> bool {
        let Some(pos) = self.items.iter().position(|i| &i.key == key) else {
            return false;
        };

        if self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
        true
    }

    /// Looks up a line item by identity.
    pub fn get(&self, key: &LineItemKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of unique line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all units.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the bill total as Σ(unit price × quantity).
    ///
    /// Recomputed from the current line items on every call; the total
    /// is never materialized, so it can never drift from the cart.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, i| sum + i.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
