//! # Checkout Controller
//!
//! The single owner of all mutable checkout state. The cart, the
//! offered recommendation set and the session lifecycle are reachable
//! ONLY through this controller's event and query methods.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Controller                                  │
//! │                                                                         │
//! │  Shell Event                 Handler                  State Change      │
//! │  ───────────                 ───────                  ────────────      │
//! │                                                                         │
//! │  Scan button ──────────────► on_open_scanner() ─────► session: arm      │
//! │                                                                         │
//! │  Camera decoded a string ──► on_scan_decoded() ─────► debounce, decode, │
//! │                                                       cart +1, session  │
//! │                                                       → BillOpen, recs  │
//! │                                                       replaced on match │
//! │                                                                         │
//! │  Remove button ────────────► on_remove_unit() ──────► cart -1 / delete  │
//! │                                                                         │
//! │  Suggestion accepted ──────► on_accept_recommendation() ► cart +1 (name)│
//! │                                                                         │
//! │  Pay Now ──────────────────► on_pay() ──────────────► session→FinalBill │
//! │                                                                         │
//! │  Go Back ──────────────────► on_go_back() ──────────► session→BillOpen  │
//! │                                                                         │
//! │  Render ───────────────────► snapshot() ────────────► (read only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Behavior Notes
//! - **Sticky recommendations**: a scan that matches no rule leaves
//!   the offered set untouched, and removing the item that triggered
//!   a set does not clear it. This mirrors the shipped product
//!   behavior; whether stale sets should be cleared is an open product
//!   question, so it is preserved here rather than silently changed.
//! - **Failed events change nothing**: a malformed scan or an
//!   out-of-phase button press surfaces an error and leaves cart,
//!   recommendations and session exactly as they were.

use tracing::{debug, warn};

use fourshop_core::{
    recommend, scan, Cart, LineItem, LineItemKey, Money, RecommendedProduct, Session,
    SessionState, View,
};

use crate::error::EngineError;
use crate::snapshot::{CartTotals, CheckoutSnapshot};

/// Result of delivering a scan callback to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Payload decoded and added to the cart.
    Added,

    /// Scanner was not armed (duplicate rapid-fire callback); the
    /// event was dropped without touching any state. Not an error -
    /// scanner hardware is expected to over-deliver.
    Ignored,
}

/// The checkout controller.
///
/// One instance per running session; state never outlives it (no
/// persistence by design).
#[derive(Debug, Default)]
pub struct CheckoutController {
    cart: Cart,
    recommendations: Vec<RecommendedProduct>,
    session: Session,
}

impl CheckoutController {
    /// Creates a controller for a fresh session: empty cart, no
    /// recommendations, idle lifecycle.
    pub fn new() -> Self {
        CheckoutController {
            cart: Cart::new(),
            recommendations: Vec::new(),
            session: Session::new(),
        }
    }

    // =========================================================================
    // Inbound Events
    // =========================================================================

    /// User opened (or re-opened) the scanner.
    pub fn on_open_scanner(&mut self) -> Result<(), EngineError> {
        debug!("open scanner");
        self.session.open_scanner().map_err(EngineError::from)
    }

    /// The camera delivered a decoded payload string.
    ///
    /// ## Order of Operations
    /// Cart add runs before the session transition so that a rejected
    /// add (cart full) leaves the session in `Scanning` too - failed
    /// events must change nothing.
    pub fn on_scan_decoded(&mut self, raw: &str) -> Result<ScanOutcome, EngineError> {
        if !self.session.consume_scan() {
            debug!(payload = %raw, "scan ignored: scanner not armed");
            return Ok(ScanOutcome::Ignored);
        }

        let product = scan::decode(raw).map_err(|err| {
            warn!(payload = %raw, %err, "scan rejected");
            EngineError::from(fourshop_core::CoreError::from(err))
        })?;

        self.cart.add_scanned(&product).map_err(|err| {
            warn!(barcode = %product.barcode, %err, "scan not added");
            EngineError::from(err)
        })?;
        self.session.scan_succeeded();

        // Replace the offered set only when a rule matches; a
        // non-matching scan leaves the previous offer standing.
        if let Some(set) = recommend::match_product(&product.name) {
            debug!(name = %product.name, count = set.len(), "recommendations refreshed");
            self.recommendations = set;
        }

        debug!(barcode = %product.barcode, total = %self.cart.total(), "scan added");
        Ok(ScanOutcome::Added)
    }

    /// User pressed the remove button on a bill row.
    ///
    /// Removal is keyed by barcode because the bill's remove control
    /// exists only on scanned rows. Unknown barcodes are a no-op.
    pub fn on_remove_unit(&mut self, barcode: &str) {
        let key = LineItemKey::Barcode(barcode.to_string());
        let removed = self.cart.remove_one_unit(&key);
        debug!(barcode = %barcode, removed, "remove one unit");
    }

    /// User accepted a suggested add-on.
    pub fn on_accept_recommendation(
        &mut self,
        item: &RecommendedProduct,
    ) -> Result<(), EngineError> {
        debug!(name = %item.name, "recommendation accepted");
        self.cart.add_recommended(item).map_err(EngineError::from)
    }

    /// User pressed Pay Now.
    pub fn on_pay(&mut self) -> Result<(), EngineError> {
        debug!(total = %self.cart.total(), "pay");
        self.session.pay().map_err(EngineError::from)
    }

    /// User pressed Go Back on the final bill.
    pub fn on_go_back(&mut self) -> Result<(), EngineError> {
        debug!("go back");
        self.session.go_back().map_err(EngineError::from)
    }

    // =========================================================================
    // Outbound Queries
    // =========================================================================

    /// Current line items in display order.
    pub fn current_cart(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Current bill total, recomputed from the cart.
    pub fn current_total(&self) -> Money {
        self.cart.total()
    }

    /// Currently offered recommendations.
    pub fn current_recommendations(&self) -> &[RecommendedProduct] {
        &self.recommendations
    }

    /// Current checkout phase.
    pub fn current_session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Which screen the shell should render right now.
    pub fn current_view(&self) -> View {
        self.session.view(!self.cart.is_empty())
    }

    /// Full render snapshot for the shell.
    pub fn snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot {
            view: self.current_view(),
            session_state: self.current_session_state(),
            items: self.cart.items().to_vec(),
            totals: CartTotals::from(&self.cart),
            recommendations: self.recommendations.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    /// Arms the scanner and delivers one payload.
    fn scan(ctl: &mut CheckoutController, raw: &str) -> Result<ScanOutcome, EngineError> {
        ctl.on_open_scanner().unwrap();
        ctl.on_scan_decoded(raw)
    }

    #[test]
    fn test_scan_twice_aggregates_quantity_and_total() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "Milk,50").unwrap();
        scan(&mut ctl, "Milk,50").unwrap();

        assert_eq!(ctl.current_cart().len(), 1);
        assert_eq!(ctl.current_cart()[0].quantity, 2);
        assert_eq!(ctl.current_total(), Money::from_paise(10000)); // ₹100.00
        assert_eq!(ctl.current_view(), View::Bill);
    }

    #[test]
    fn test_remove_unit_leaves_other_items() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "A,10").unwrap();
        scan(&mut ctl, "B,20").unwrap();

        ctl.on_remove_unit("A,10");

        assert_eq!(ctl.current_cart().len(), 1);
        assert_eq!(ctl.current_cart()[0].name, "B");
        assert_eq!(ctl.current_total(), Money::from_paise(2000)); // ₹20.00
    }

    #[test]
    fn test_remove_unknown_barcode_is_noop() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "A,10").unwrap();

        ctl.on_remove_unit("never scanned");
        assert_eq!(ctl.current_cart().len(), 1);
        assert_eq!(ctl.current_total(), Money::from_paise(1000));
    }

    #[test]
    fn test_malformed_scan_changes_nothing() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "Cashew-200 gm,300").unwrap();
        let before = ctl.snapshot();

        let err = scan(&mut ctl, "OnlyOneField").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidScan);

        // Cart, total and recommendations untouched; bill still shown
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn test_non_numeric_price_rejected_identically() {
        let mut ctl = CheckoutController::new();
        let err = scan(&mut ctl, "Sugar,free").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidScan);

        assert!(ctl.current_cart().is_empty());
        assert_eq!(ctl.current_session_state(), SessionState::Scanning);
        // No items yet, so the failed first scan falls back to welcome
        assert_eq!(ctl.current_view(), View::Welcome);
    }

    #[test]
    fn test_recommendations_populate_and_stay_sticky() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "CASHEW-200 GM,300").unwrap();

        let names: Vec<&str> = ctl
            .current_recommendations()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Almonds", "Pistachios", "Walnuts"]);

        // Non-matching scan: set persists unchanged
        scan(&mut ctl, "Bread,40").unwrap();
        assert_eq!(ctl.current_recommendations().len(), 3);
        assert_eq!(ctl.current_recommendations()[0].name, "Almonds");

        // Matching scan for a different rule: set replaced, not merged
        scan(&mut ctl, "Dairy Milk Silk,85").unwrap();
        assert_eq!(ctl.current_recommendations()[0].name, "Chocolate Cookies");
    }

    #[test]
    fn test_accepting_recommendation_twice_aggregates_by_name() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "Cashew-200 gm,300").unwrap();

        let almonds = ctl.current_recommendations()[0].clone();
        ctl.on_accept_recommendation(&almonds).unwrap();
        ctl.on_accept_recommendation(&almonds).unwrap();

        let line = ctl
            .current_cart()
            .iter()
            .find(|i| i.key == LineItemKey::Name("Almonds".to_string()))
            .expect("almonds line");
        assert_eq!(line.quantity, 2);
        assert_eq!(
            ctl.current_total(),
            Money::from_paise(30000 + 2 * 59900)
        );
    }

    #[test]
    fn test_debounce_ignores_rapid_fire_duplicates() {
        let mut ctl = CheckoutController::new();
        ctl.on_open_scanner().unwrap();

        assert_eq!(ctl.on_scan_decoded("Milk,50").unwrap(), ScanOutcome::Added);
        // Same physical barcode fires again before re-arming
        assert_eq!(
            ctl.on_scan_decoded("Milk,50").unwrap(),
            ScanOutcome::Ignored
        );
        assert_eq!(ctl.current_cart()[0].quantity, 1);
    }

    #[test]
    fn test_pay_only_from_bill_open() {
        let mut ctl = CheckoutController::new();
        let err = ctl.on_pay().unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionError);

        scan(&mut ctl, "Milk,50").unwrap();
        ctl.on_pay().unwrap();
        assert_eq!(ctl.current_view(), View::FinalBill);
    }

    #[test]
    fn test_go_back_round_trip_preserves_state() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "Cashew-200 gm,300").unwrap();
        let bill = ctl.snapshot();

        ctl.on_pay().unwrap();
        assert_eq!(ctl.current_session_state(), SessionState::FinalBill);
        // Scanner cannot be opened from the final bill
        assert!(ctl.on_open_scanner().is_err());

        ctl.on_go_back().unwrap();
        // Idempotent round trip: cart and recommendations intact
        assert_eq!(ctl.snapshot(), bill);
    }

    #[test]
    fn test_total_never_drifts_across_event_sequence() {
        let mut ctl = CheckoutController::new();
        scan(&mut ctl, "A,10").unwrap();
        scan(&mut ctl, "Cashew-200 gm,300").unwrap();
        let rec = ctl.current_recommendations()[1].clone(); // Pistachios
        ctl.on_accept_recommendation(&rec).unwrap();
        scan(&mut ctl, "A,10").unwrap();
        ctl.on_remove_unit("Cashew-200 gm,300");
        ctl.on_accept_recommendation(&rec).unwrap();

        let from_scratch: i64 = ctl
            .current_cart()
            .iter()
            .map(|i| i.unit_price_paise * i.quantity)
            .sum();
        assert_eq!(ctl.current_total().paise(), from_scratch);
    }

    #[test]
    fn test_fresh_controller_shows_welcome() {
        let ctl = CheckoutController::new();
        assert_eq!(ctl.current_view(), View::Welcome);
        assert_eq!(ctl.current_session_state(), SessionState::Idle);
        assert!(ctl.current_cart().is_empty());
        assert!(ctl.current_recommendations().is_empty());
        assert!(ctl.current_total().is_zero());
    }
}
