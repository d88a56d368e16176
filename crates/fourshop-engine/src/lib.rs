//! # 4Shop Engine Library
//!
//! The embedding-facing layer of the 4Shop cart engine. The mobile
//! shell delivers decoded scan strings and button presses; the engine
//! answers with serialized checkout snapshots.
//!
//! ## Module Organization
//! ```text
//! fourshop_engine/
//! ├── lib.rs          ◄─── You are here (wiring & logging bootstrap)
//! ├── controller.rs   ◄─── CheckoutController: events in, queries out
//! ├── state.rs        ◄─── Shared Arc<Mutex> handle for the bridge
//! ├── snapshot.rs     ◄─── Render DTOs (camelCase for the JS shell)
//! └── error.rs        ◄─── Serializable engine error type
//! ```
//!
//! ## Event Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Engine ↔ Shell Contract                            │
//! │                                                                         │
//! │  Inbound events              Outbound queries                           │
//! │  ──────────────              ─────────────────                          │
//! │  on_open_scanner()           current_cart()                             │
//! │  on_scan_decoded(raw)        current_total()                            │
//! │  on_remove_unit(barcode)     current_recommendations()                  │
//! │  on_accept_recommendation()  current_session_state()                    │
//! │  on_pay() / on_go_back()     current_view() / snapshot()                │
//! │                                                                         │
//! │  Excluded collaborators: camera & permissions, rendering, share         │
//! │  and icon-press notifications. They live in the shell and only          │
//! │  ever hand the engine plain strings and button events.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod controller;
pub mod error;
pub mod snapshot;
pub mod state;

pub use controller::{CheckoutController, ScanOutcome};
pub use error::{EngineError, ErrorCode};
pub use snapshot::{CartTotals, CheckoutSnapshot};
pub use state::EngineState;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Called once by the embedding shell at startup.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fourshop=trace` - Show trace for fourshop crates only
/// - Default: INFO, with debug for the fourshop crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fourshop=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
