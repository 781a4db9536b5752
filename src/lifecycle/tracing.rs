//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`. The output is compact and hides the module
//! path (`with_target(false)`); actors identify themselves with an `entity_type` field.
//!
//! ```bash
//! RUST_LOG=info cargo run    # one line per created entity, action and payment
//! RUST_LOG=debug cargo run   # adds request payloads, lookups and searches
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with final arena size
//! - **Entity Operations**: `Created`, `Get`, `List`, `Action ok` / `Action failed`
//! - **Cart Conditions**: `Out of stock` and `Not in cart` at `warn`
//! - **Audit**: `Admin <name> is managing books...`
//! - **Payments**: `Processing payment of $<amount>...` then the outcome inside a
//!   `payment` span
//!
//! ## Example (`RUST_LOG=info`)
//!
//! ```text
//! INFO Actor started entity_type="Book"
//! INFO Created entity_type="Book" id=book_0 size=1
//! INFO Discount applied book_id=book_0 pct=10.0 price=9.891000000000002
//! WARN Out of stock cart_id=cart_0 book_id=book_1
//! INFO payment: Payment succeeded draw=0.31
//! ```

/// Installs a compact `tracing-subscriber` driven by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "payment:")
        .init();
}
