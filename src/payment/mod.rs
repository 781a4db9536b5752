//! # Payment Processing
//!
//! A simulated payment gateway. A payment is requested with
//! [`PaymentProcessor::process_payment`], which returns a [`PaymentHandle`] right away;
//! the outcome arrives later over a channel once the configured delay has passed.
//!
//! ```rust,ignore
//! let processor = PaymentProcessor::new(PaymentConfig::default());
//! match processor.process_payment(order.total_price).outcome().await {
//!     Ok(message) => info!(%message, "Paid"),
//!     Err(e) => error!(error = %e, "Payment failed"),
//! }
//! ```
//!
//! The gateway succeeds with probability `success_threshold` (0.8 by default)
//! regardless of the amount.

pub mod error;
pub mod processor;

pub use error::*;
pub use processor::*;
