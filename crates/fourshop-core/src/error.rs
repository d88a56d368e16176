//! # Error Types
//!
//! Domain-specific error types for fourshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fourshop-core errors (this file)                                      │
//! │  ├── DecodeError      - Scan payload format failures                   │
//! │  └── CoreError        - Cart and session rule violations               │
//! │                                                                         │
//! │  fourshop-engine errors (separate crate)                               │
//! │  └── EngineError      - What the mobile shell sees (serialized)        │
//! │                                                                         │
//! │  Flow: DecodeError → CoreError → EngineError → Shell notification      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (payload text, field count, etc.)
//! 3. Errors are enum variants, never String
//! 4. No error is fatal: every failing operation leaves state unchanged

use thiserror::Error;

use crate::session::SessionState;

// =============================================================================
// Decode Error
// =============================================================================

/// Scan payload format failures.
///
/// Raised only by the barcode decoder. The session catches these at
/// its boundary, surfaces a notification, and changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload did not split into exactly `<name>,<price>`.
    #[error("expected \"<name>,<price>\", got {found} field(s)")]
    FieldCount { found: usize },

    /// Price field is not a valid non-negative decimal literal.
    #[error("price '{text}' is not a non-negative amount")]
    Price { text: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Scan payload failed validation (wraps DecodeError).
    #[error("invalid scan payload: {0}")]
    InvalidFormat(#[from] DecodeError),

    /// Cart has exceeded maximum allowed items.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The session is not in a state that allows the requested event.
    ///
    /// ## When This Occurs
    /// - Pressing Pay anywhere except the open bill
    /// - Pressing Go Back anywhere except the final bill
    /// - Opening the scanner from the final bill
    #[error("cannot {event} while session is {state:?}")]
    InvalidTransition {
        state: SessionState,
        event: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::FieldCount { found: 1 };
        assert_eq!(err.to_string(), "expected \"<name>,<price>\", got 1 field(s)");

        let err = DecodeError::Price {
            text: "free".to_string(),
        };
        assert_eq!(err.to_string(), "price 'free' is not a non-negative amount");
    }

    #[test]
    fn test_decode_converts_to_core_error() {
        let decode_err = DecodeError::FieldCount { found: 3 };
        let core_err: CoreError = decode_err.into();
        assert!(matches!(core_err, CoreError::InvalidFormat(_)));
    }

    #[test]
    fn test_transition_error_message() {
        let err = CoreError::InvalidTransition {
            state: SessionState::Idle,
            event: "pay",
        };
        assert_eq!(err.to_string(), "cannot pay while session is Idle");
    }
}
