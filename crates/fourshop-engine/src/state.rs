//! # Engine State
//!
//! Shared handle to the checkout controller for the embedding shell.
//!
//! ## Thread Safety
//! The controller is wrapped in `Arc<Mutex<T>>` because:
//! 1. There is exactly one logical actor (the user), but
//! 2. Mobile bridge callbacks are not guaranteed to arrive on one
//!    thread, and
//! 3. Only one event may mutate checkout state at a time.
//!
//! ## Why Not RwLock?
//! Events are quick and most of them mutate state. A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::controller::CheckoutController;

/// Shell-managed engine state.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    controller: Arc<Mutex<CheckoutController>>,
}

impl EngineState {
    /// Creates state for a fresh session.
    pub fn new() -> Self {
        EngineState {
            controller: Arc::new(Mutex::new(CheckoutController::new())),
        }
    }

    /// Executes a function with read access to the controller.
    ///
    /// ## Usage
    /// ```rust
    /// use fourshop_engine::EngineState;
    ///
    /// let state = EngineState::new();
    /// let snapshot = state.with_controller(|c| c.snapshot());
    /// assert!(snapshot.items.is_empty());
    /// ```
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckoutController) -> R,
    {
        let controller = self.controller.lock().expect("Controller mutex poisoned");
        f(&controller)
    }

    /// Executes a function with write access to the controller.
    ///
    /// ## Usage
    /// ```rust
    /// use fourshop_engine::EngineState;
    ///
    /// let state = EngineState::new();
    /// state.with_controller_mut(|c| c.on_open_scanner()).unwrap();
    /// ```
    pub fn with_controller_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutController) -> R,
    {
        let mut controller = self.controller.lock().expect("Controller mutex poisoned");
        f(&mut controller)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fourshop_core::View;

    #[test]
    fn test_clones_share_one_controller() {
        let state = EngineState::new();
        let alias = state.clone();

        state
            .with_controller_mut(|c| {
                c.on_open_scanner()?;
                c.on_scan_decoded("Milk,50").map(|_| ())
            })
            .unwrap();

        alias.with_controller(|c| {
            assert_eq!(c.current_cart().len(), 1);
            assert_eq!(c.current_view(), View::Bill);
        });
    }
}
