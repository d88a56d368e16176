//! # fourshop-core: Pure Business Logic for the 4Shop Cart Engine
//!
//! This crate is the **heart** of the 4Shop point-of-sale cart. It
//! contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      4Shop Architecture                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Mobile Shell (JavaScript)                        │   │
//! │  │   Camera/Scanner ──► Bill UI ──► Final Bill UI                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ decoded strings & button events        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  fourshop-engine                                │   │
//! │  │   CheckoutController: events in, snapshots out                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fourshop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────────────────┐ │   │
//! │  │   │   scan   │ │   cart   │ │  money   │ │ recommend/session │ │   │
//! │  │   │  decode  │ │ LineItem │ │  Money   │ │  rules & phases   │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └───────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HARDWARE • NO RENDERING • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`scan`] - Barcode decoder: raw payload → validated [`Product`]
//! - [`recommend`] - Substring rule table for suggested add-ons
//! - [`cart`] - Quantity-aware line item aggregation and bill total
//! - [`session`] - Checkout lifecycle state machine and view selection
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types ([`Product`], [`RecommendedProduct`], keys)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Camera, network and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fourshop_core::cart::Cart;
//! use fourshop_core::money::Money;
//! use fourshop_core::scan::decode;
//!
//! let mut cart = Cart::new();
//!
//! // Scan the same item twice: one line, quantity 2
//! let milk = decode("Milk,50").unwrap();
//! cart.add_scanned(&milk).unwrap();
//! cart.add_scanned(&milk).unwrap();
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total(), Money::from_paise(10000)); // ₹100.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod recommend;
pub mod scan;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fourshop_core::Money` instead of
// `use fourshop_core::money::Money`

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, DecodeError};
pub use money::Money;
pub use session::{Session, SessionState, View};
pub use types::{LineItemKey, Product, RecommendedProduct};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-scanning (e.g., a barcode swiped in a
/// loop) from producing an absurd bill.
pub const MAX_ITEM_QUANTITY: i64 = 999;
