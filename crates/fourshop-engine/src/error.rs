//! # Engine Error Type
//!
//! Unified error type for engine events.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the 4Shop Engine                       │
//! │                                                                         │
//! │  Mobile Shell                 Rust Engine                               │
//! │  ────────────                 ───────────                               │
//! │                                                                         │
//! │  onScanDecoded("Sugar,free")                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Event Handler                                                   │  │
//! │  │  Result<T, EngineError>                                          │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Decode failure? ── DecodeError::Price ── INVALID_SCAN ─────────►│  │
//! │  │  Cart rule?      ── CoreError::CartTooLarge ── CART_ERROR ──────►│  │
//! │  │  Wrong phase?    ── CoreError::InvalidTransition ── SESSION ────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  { code: "INVALID_SCAN",                                                │
//! │    message: "invalid scan payload: price 'free' is ..." }               │
//! │  shown to the user as a notification; state is unchanged                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use fourshop_core::CoreError;

/// Error returned from engine event handlers.
///
/// ## Serialization
/// This is what the shell receives when an event fails:
/// ```json
/// {
///   "code": "INVALID_SCAN",
///   "message": "invalid scan payload: expected \"<name>,<price>\", got 1 field(s)"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct EngineError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for engine responses.
///
/// ## Usage in the Shell
/// ```typescript
/// try {
///   await engine.onScanDecoded(payload);
/// } catch (e) {
///   switch (e.code) {
///     case 'INVALID_SCAN':
///       alert('Invalid Barcode', e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Scan payload failed format validation
    InvalidScan,

    /// Cart rule violation (size or quantity limits)
    CartError,

    /// Event not allowed in the current session phase
    SessionError,
}

impl EngineError {
    /// Creates a new engine error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        EngineError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to engine errors.
impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidFormat(_) => ErrorCode::InvalidScan,
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                ErrorCode::CartError
            }
            CoreError::InvalidTransition { .. } => ErrorCode::SessionError,
        };
        EngineError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fourshop_core::DecodeError;

    #[test]
    fn test_decode_error_maps_to_invalid_scan() {
        let core: CoreError = DecodeError::FieldCount { found: 1 }.into();
        let engine = EngineError::from(core);
        assert_eq!(engine.code, ErrorCode::InvalidScan);
        assert!(engine.message.contains("1 field(s)"));
    }

    #[test]
    fn test_display_carries_code_and_message() {
        let err = EngineError::new(ErrorCode::CartError, "cart cannot have more than 100 items");
        assert_eq!(
            err.to_string(),
            "[CartError] cart cannot have more than 100 items"
        );
        // Usable as a boxed error through std::error::Error
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().starts_with("[CartError]"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = EngineError::new(ErrorCode::SessionError, "cannot pay while session is Idle");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SESSION_ERROR");
        assert_eq!(json["message"], "cannot pay while session is Idle");
    }
}
