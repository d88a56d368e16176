//! # Checkout Snapshots
//!
//! Read-only DTOs handed to the presentation layer. The shell never
//! touches engine state directly; it renders whatever the latest
//! snapshot says.

use serde::{Deserialize, Serialize};

use fourshop_core::{Cart, LineItem, RecommendedProduct, SessionState, View};

/// Cart totals summary for snapshot responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct line items.
    pub item_count: usize,

    /// Sum of quantities across all line items.
    pub total_quantity: i64,

    /// Bill total in paise, recomputed from the cart at snapshot time.
    pub total_paise: i64,

    /// Bill total formatted for display ("₹649.00") - the single
    /// point where paise become two decimal places.
    pub total_display: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_paise: total.paise(),
            total_display: total.to_string(),
        }
    }
}

/// Full checkout snapshot: everything the shell needs to render one
/// frame of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSnapshot {
    /// Which screen to render.
    pub view: View,

    /// Raw checkout phase (mostly for diagnostics; `view` already
    /// folds in the scanner flag and cart emptiness).
    pub session_state: SessionState,

    /// Line items in display order.
    pub items: Vec<LineItem>,

    /// Derived totals.
    pub totals: CartTotals,

    /// Currently offered recommendations (sticky until overwritten).
    pub recommendations: Vec<RecommendedProduct>,
}

// =============================================================================
// Unit Tests
// =============================================================================
