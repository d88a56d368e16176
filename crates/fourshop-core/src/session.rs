//! # Session Lifecycle
//!
//! The state machine gating which view is active and whether new
//! scans are accepted.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Lifecycle                                   │
//! │                                                                         │
//! │            open scanner          decode success                         │
//! │  ┌──────┐ ────────────► ┌──────────┐ ──────────► ┌──────────┐          │
//! │  │ Idle │               │ Scanning │             │ BillOpen │          │
//! │  └──────┘               └──────────┘ ◄────────── └──────────┘          │
//! │                           │      ▲    open scanner    │  ▲             │
//! │            decode failure │      │    (re-entrant)    │  │             │
//! │            (stays, scanner└──────┘               pay  │  │ go back     │
//! │             disarmed)                                 ▼  │             │
//! │                                                  ┌───────────┐         │
//! │                                                  │ FinalBill │         │
//! │                                                  └───────────┘         │
//! │                                                  (never terminal)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Orthogonal Facts
//! The session tracks `state` and `scanner_active` separately:
//! `scanner_active` is the one-shot debounce flag that gates scan
//! callbacks, while `state` is the checkout phase. Which view to show
//! additionally depends on whether the cart has items — an empty cart
//! outside the scanner still shows the welcome display even though the
//! internal state may already be `Scanning`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Session State
// =============================================================================

/// Checkout phase of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Fresh session, scanner never opened.
    Idle,
    /// Scanner has been requested at least once; no checkout yet.
    Scanning,
    /// At least one item added; running bill is the main view.
    BillOpen,
    /// User pressed Pay; final bill is shown.
    FinalBill,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

// =============================================================================
// View
// =============================================================================

/// Which screen the presentation layer should render.
///
/// Derived from (state, scanner flag, cart emptiness) — never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Welcome display (nothing scanned yet, scanner closed).
    Welcome,
    /// Scanner overlay.
    Scanner,
    /// Running bill with remove/recommend controls.
    Bill,
    /// Final bill with the Go Back control.
    FinalBill,
}

// =============================================================================
// Session
// =============================================================================

/// The session state machine.
///
/// Owns the checkout phase and the scanner debounce flag. Mutated only
/// through the transition methods below; invalid transitions are typed
/// errors and change nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    scanner_active: bool,
}

impl Session {
    /// Creates a fresh idle session.
    pub fn new() -> Self {
        Session {
            state: SessionState::Idle,
            scanner_active: false,
        }
    }

    /// Current checkout phase.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the scanner is armed for the next scan callback.
    #[inline]
    pub fn scanner_active(&self) -> bool {
        self.scanner_active
    }

    /// User opened (or re-opened) the scanner.
    ///
    /// Allowed from `Idle`, `Scanning` and `BillOpen`; re-entrant
    /// opening re-arms the debounce flag so the next scan callback is
    /// accepted. Cart and recommendations persist across re-scans.
    /// The final bill has no scanner control, so `FinalBill` rejects.
    pub fn open_scanner(&mut self) -> CoreResult<()> {
        match self.state {
            SessionState::Idle | SessionState::Scanning | SessionState::BillOpen => {
                self.state = SessionState::Scanning;
                self.scanner_active = true;
                Ok(())
            }
            SessionState::FinalBill => Err(CoreError::InvalidTransition {
                state: self.state,
                event: "open scanner",
            }),
        }
    }

    /// One-shot debounce gate for scan callbacks.
    ///
    /// Returns `true` exactly once per [`Session::open_scanner`]: the
    /// first callback disarms the flag, so rapid-fire duplicate
    /// decodes of the same physical barcode are ignored until the
    /// scanner is explicitly re-armed.
    pub fn consume_scan(&mut self) -> bool {
        if !self.scanner_active {
            return false;
        }
        self.scanner_active = false;
        true
    }

    /// A consumed scan decoded successfully and the cart was updated.
    ///
    /// Decode failures call nothing: the session stays in `Scanning`
    /// with the scanner disarmed, which is exactly the
    /// `Scanning → Scanning` failure transition.
    pub fn scan_succeeded(&mut self) {
        self.state = SessionState::BillOpen;
    }

    /// User pressed Pay. Only reachable from the open bill.
    pub fn pay(&mut self) -> CoreResult<()> {
        match self.state {
            SessionState::BillOpen => {
                self.state = SessionState::FinalBill;
                Ok(())
            }
            _ => Err(CoreError::InvalidTransition {
                state: self.state,
                event: "pay",
            }),
        }
    }

    /// User pressed Go Back on the final bill.
    pub fn go_back(&mut self) -> CoreResult<()> {
        match self.state {
            SessionState::FinalBill => {
                self.state = SessionState::BillOpen;
                Ok(())
            }
            _ => Err(CoreError::InvalidTransition {
                state: self.state,
                event: "go back",
            }),
        }
    }

    /// Selects the view to render.
    ///
    /// `has_items` is the real discriminator between the welcome
    /// display and the bill: the enum alone cannot tell them apart
    /// after a failed first scan.
    pub fn view(&self, has_items: bool) -> View {
        if self.state == SessionState::FinalBill {
            View::FinalBill
        } else if self.scanner_active {
            View::Scanner
        } else if has_items {
            View::Bill
        } else {
            View::Welcome
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.scanner_active());
        assert_eq!(session.view(false), View::Welcome);
    }

    #[test]
    fn test_happy_path_lifecycle() {
        let mut session = Session::new();

        session.open_scanner().unwrap();
        assert_eq!(session.state(), SessionState::Scanning);
        assert_eq!(session.view(false), View::Scanner);

        assert!(session.consume_scan());
        session.scan_succeeded();
        assert_eq!(session.state(), SessionState::BillOpen);
        assert_eq!(session.view(true), View::Bill);

        session.pay().unwrap();
        assert_eq!(session.state(), SessionState::FinalBill);
        assert_eq!(session.view(true), View::FinalBill);

        session.go_back().unwrap();
        assert_eq!(session.state(), SessionState::BillOpen);
        assert_eq!(session.view(true), View::Bill);
    }

    #[test]
    fn test_scan_debounce_is_one_shot() {
        let mut session = Session::new();
        session.open_scanner().unwrap();

        assert!(session.consume_scan());
        // Duplicate rapid-fire callback is ignored
        assert!(!session.consume_scan());

        // Re-opening the scanner re-arms it
        session.scan_succeeded();
        session.open_scanner().unwrap();
        assert!(session.consume_scan());
    }

    #[test]
    fn test_decode_failure_keeps_scanning() {
        let mut session = Session::new();
        session.open_scanner().unwrap();
        assert!(session.consume_scan());
        // No scan_succeeded() call: failure path

        assert_eq!(session.state(), SessionState::Scanning);
        assert!(!session.scanner_active());
        // Empty cart falls back to the welcome display
        assert_eq!(session.view(false), View::Welcome);
    }

    #[test]
    fn test_pay_only_from_bill_open() {
        let mut session = Session::new();
        assert!(session.pay().is_err());

        session.open_scanner().unwrap();
        assert!(session.pay().is_err());
        assert_eq!(session.state(), SessionState::Scanning);
    }

    #[test]
    fn test_go_back_only_from_final_bill() {
        let mut session = Session::new();
        assert!(session.go_back().is_err());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_scanner_rejected_on_final_bill() {
        let mut session = Session::new();
        session.open_scanner().unwrap();
        session.consume_scan();
        session.scan_succeeded();
        session.pay().unwrap();

        let err = session.open_scanner().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert_eq!(session.state(), SessionState::FinalBill);
    }

    #[test]
    fn test_reopen_scanner_from_bill() {
        let mut session = Session::new();
        session.open_scanner().unwrap();
        session.consume_scan();
        session.scan_succeeded();

        // Re-entrant: back to scanning for the next item
        session.open_scanner().unwrap();
        assert_eq!(session.state(), SessionState::Scanning);
        assert_eq!(session.view(true), View::Scanner);
    }
}
