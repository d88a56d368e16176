//! # Domain Types
//!
//! Core domain types for the 4Shop cart engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌─────────────────────┐   ┌─────────────────┐  │
//! │  │     Product      │   │ RecommendedProduct  │   │   LineItemKey   │  │
//! │  │  ──────────────  │   │  ─────────────────  │   │  ─────────────  │  │
//! │  │  barcode (raw)   │   │  name               │   │  Barcode(String)│  │
//! │  │  name (trimmed)  │   │  unit_price_paise   │   │  Name(String)   │  │
//! │  │  unit_price_paise│   │  (no barcode!)      │   │                 │  │
//! │  └──────────────────┘   └─────────────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Scanned products are identified by their full raw scan payload
//! (the `barcode`); recommended products never saw a scanner and are
//! identified by `name`. [`LineItemKey`] is the sum type that lets the
//! cart aggregate both through one code path.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Line Item Key
// =============================================================================

/// The identity of a cart line item.
///
/// ## Why a Sum Type?
/// A scanned `"Almonds,599"` and an accepted "Almonds" recommendation
/// are different line items: the first is keyed by its raw payload,
/// the second by its name. Folding both identities into one enum keeps
/// cart aggregation a single generic operation instead of two parallel
/// code paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKey {
    /// Full raw scan payload. Two payloads with identical name/price
    /// but different surrounding text are distinct identities.
    Barcode(String),

    /// Recommendation name (recommended items carry no barcode).
    Name(String),
}

// =============================================================================
// Product
// =============================================================================

/// A product decoded from a scan payload.
///
/// Produced only by [`crate::scan::decode`]. Quantity is not stored
/// here; the cart owns quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// The entire raw scan payload, used as the line item identity.
    pub barcode: String,

    /// Display name (first payload field, trimmed).
    pub name: String,

    /// Price in paise at time of scan. The scanned price is trusted;
    /// there is no catalog to re-validate against.
    pub unit_price_paise: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Returns the cart identity for this product.
    #[inline]
    pub fn line_key(&self) -> LineItemKey {
        LineItemKey::Barcode(self.barcode.clone())
    }
}

// =============================================================================
// Recommended Product
// =============================================================================

/// A suggested add-on surfaced by the recommendation rules.
///
/// Becomes a cart line item once the user accepts it. Identity for
/// aggregation purposes is its name, not a scan code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendedProduct {
    /// Display name, also the line item identity.
    pub name: String,

    /// Price in paise from the rule table.
    pub unit_price_paise: i64,
}

impl RecommendedProduct {
    /// Returns the price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Returns the cart identity for this recommendation.
    #[inline]
    pub fn line_key(&self) -> LineItemKey {
        LineItemKey::Name(self.name.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanned_and_recommended_keys_differ() {
        let scanned = Product {
            barcode: "Almonds,599".to_string(),
            name: "Almonds".to_string(),
            unit_price_paise: 59900,
        };
        let recommended = RecommendedProduct {
            name: "Almonds".to_string(),
            unit_price_paise: 59900,
        };

        // Same name, same price, different identities
        assert_ne!(scanned.line_key(), recommended.line_key());
    }

    #[test]
    fn test_unit_price_accessors() {
        let product = Product {
            barcode: "Milk,50".to_string(),
            name: "Milk".to_string(),
            unit_price_paise: 5000,
        };
        assert_eq!(product.unit_price(), Money::from_paise(5000));

        let rec = RecommendedProduct {
            name: "Walnuts".to_string(),
            unit_price_paise: 89900,
        };
        assert_eq!(rec.unit_price(), Money::from_paise(89900));
    }
}
