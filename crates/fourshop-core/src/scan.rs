//! # Barcode Decoder
//!
//! Turns a raw scan payload into a validated [`Product`] or a format
//! error.
//!
//! ## Payload Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scan payload: "<name>,<price>"                                         │
//! │                                                                         │
//! │  "Milk,50"            ──► Product { barcode: "Milk,50",                 │
//! │                                     name: "Milk",                       │
//! │                                     unit_price: ₹50.00 }                │
//! │                                                                         │
//! │  "OnlyOneField"       ──► DecodeError::FieldCount { found: 1 }          │
//! │  "Sugar,free"         ──► DecodeError::Price { text: "free" }           │
//! │  "A,B,C"              ──► DecodeError::FieldCount { found: 3 }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that `barcode` is the ENTIRE raw payload, not just the name
//! field: `"Milk,50"` and `" Milk ,50"` decode to the same display
//! name but are distinct cart identities.

use crate::error::DecodeError;
use crate::money::Money;
use crate::types::Product;

/// Decodes a raw scan payload into a product.
///
/// Pure function: no side effects, no cart access.
///
/// ## Rules
/// - Exactly one `,` delimiter (two fields)
/// - Field 0 becomes the trimmed display name
/// - Field 1 must parse as a non-negative decimal amount
///
/// ## Example
/// ```rust
/// use fourshop_core::scan::decode;
///
/// let product = decode("Cashew-200 gm,300").unwrap();
/// assert_eq!(product.name, "Cashew-200 gm");
/// assert_eq!(product.unit_price_paise, 30000);
/// assert_eq!(product.barcode, "Cashew-200 gm,300");
///
/// assert!(decode("OnlyOneField").is_err());
/// ```
pub fn decode(raw: &str) -> Result<Product, DecodeError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 2 {
        return Err(DecodeError::FieldCount {
            found: fields.len(),
        });
    }

    let price: Money = fields[1].parse().map_err(|_| DecodeError::Price {
        text: fields[1].trim().to_string(),
    })?;

    Ok(Product {
        barcode: raw.to_string(),
        name: fields[0].trim().to_string(),
        unit_price_paise: price.paise(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_payload() {
        let product = decode("Milk,50").unwrap();
        assert_eq!(product.barcode, "Milk,50");
        assert_eq!(product.name, "Milk");
        assert_eq!(product.unit_price_paise, 5000);
    }

    #[test]
    fn test_decode_trims_name_but_keeps_raw_barcode() {
        let product = decode("  Milk ,50").unwrap();
        assert_eq!(product.name, "Milk");
        // Raw payload preserved: distinct identity from "Milk,50"
        assert_eq!(product.barcode, "  Milk ,50");
    }

    #[test]
    fn test_decode_fractional_price() {
        let product = decode("Bread,40.50").unwrap();
        assert_eq!(product.unit_price_paise, 4050);
    }

    #[test]
    fn test_decode_rejects_single_field() {
        assert_eq!(
            decode("OnlyOneField"),
            Err(DecodeError::FieldCount { found: 1 })
        );
    }

    #[test]
    fn test_decode_rejects_extra_fields() {
        assert_eq!(decode("A,10,extra"), Err(DecodeError::FieldCount { found: 3 }));
    }

    #[test]
    fn test_decode_rejects_non_numeric_price() {
        assert_eq!(
            decode("Sugar,free"),
            Err(DecodeError::Price {
                text: "free".to_string()
            })
        );
    }

    #[test]
    fn test_decode_rejects_negative_price() {
        assert!(matches!(decode("Milk,-50"), Err(DecodeError::Price { .. })));
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        assert_eq!(decode(""), Err(DecodeError::FieldCount { found: 1 }));
    }

    #[test]
    fn test_decode_allows_empty_name() {
        // The original reader only validated shape and price; an empty
        // name field still forms a valid (if odd) product.
        let product = decode(",25").unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.unit_price_paise, 2500);
    }
}
