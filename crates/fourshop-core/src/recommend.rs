//! # Recommendation Rule Engine
//!
//! Maps a scanned product's name to a (possibly absent) ordered set of
//! suggested add-on products.
//!
//! ## Matching Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scanned name ──► lowercase ──► substring check per rule, in order      │
//! │                                                                         │
//! │  "Cashew-200 gm"      contains "cashew-200 gm"  ──► nuts suggestions    │
//! │  "DAIRY MILK SILK 60g" contains "dairy milk silk" ──► chocolate set     │
//! │  "Bread"              matches nothing           ──► None (NO CHANGE)    │
//! │                                                                         │
//! │  First matching rule wins; rules are checked in fixed priority order.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `None` means "leave the currently offered set alone" — callers must
//! NOT clear an existing recommendation set on a non-match.
//!
//! The rule table is static configuration, not derived from inventory
//! data; editing it never affects existing cart contents.

use crate::types::RecommendedProduct;

// =============================================================================
// Rule Table
// =============================================================================

/// A single trigger → suggestions rule.
struct Rule {
    /// Lowercase substring that arms this rule.
    trigger: &'static str,

    /// Ordered suggestions as (name, price in paise).
    suggestions: &'static [(&'static str, i64)],
}

/// Fixed priority order: a name satisfying several triggers gets the
/// first rule listed here.
const RULES: &[Rule] = &[
    Rule {
        trigger: "cashew-200 gm",
        suggestions: &[
            ("Almonds", 59900),
            ("Pistachios", 79900),
            ("Walnuts", 89900),
        ],
    },
    Rule {
        trigger: "dairy milk silk",
        suggestions: &[
            ("Chocolate Cookies", 15000),
            ("Chocolate Syrup", 20000),
            ("Chocolate Chips", 12000),
        ],
    },
];

// =============================================================================
// Matching
// =============================================================================

/// Matches a product name against the rule table.
///
/// Returns `Some(suggestions)` for the first rule whose trigger is a
/// case-insensitive substring of the name, `None` when no rule
/// matches. `None` is "no change", not "empty set".
///
/// ## Example
/// ```rust
/// use fourshop_core::recommend::match_product;
///
/// let set = match_product("Cashew-200 gm").unwrap();
/// assert_eq!(set[0].name, "Almonds");
///
/// assert!(match_product("Bread").is_none());
/// ```
pub fn match_product(name: &str) -> Option<Vec<RecommendedProduct>> {
    let lowered = name.to_lowercase();

    RULES
        .iter()
        .find(|rule| lowered.contains(rule.trigger))
        .map(|rule| {
            rule.suggestions
                .iter()
                .map(|&(name, unit_price_paise)| RecommendedProduct {
                    name: name.to_string(),
                    unit_price_paise,
                })
                .collect()
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        let set = match_product("CASHEW-200 GM").expect("rule should match");
        assert_eq!(set.len(), 3);
        assert_eq!(set[0].name, "Almonds");
        assert_eq!(set[0].unit_price_paise, 59900);
    }

    #[test]
    fn test_match_on_substring() {
        // Trigger embedded in a longer name still matches
        let set = match_product("Premium Dairy Milk Silk 60g").expect("rule should match");
        assert_eq!(set[0].name, "Chocolate Cookies");
    }

    #[test]
    fn test_suggestion_order_is_stable() {
        let set = match_product("dairy milk silk").unwrap();
        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chocolate Cookies", "Chocolate Syrup", "Chocolate Chips"]
        );
    }

    #[test]
    fn test_non_match_returns_none() {
        assert!(match_product("Bread").is_none());
        assert!(match_product("").is_none());
    }

    #[test]
    fn test_first_rule_wins() {
        // A contrived name satisfying both triggers takes the first rule
        let set = match_product("cashew-200 gm dairy milk silk").unwrap();
        assert_eq!(set[0].name, "Almonds");
    }
}
