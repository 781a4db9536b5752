//! Runtime configuration for [`BookstoreSystem`](super::BookstoreSystem).
//!
//! Everything has a working default; tests shorten the payment delay and pin the
//! RNG seed. Log verbosity is not configured here but through `RUST_LOG`
//! (see [`setup_tracing`](super::setup_tracing)).

use crate::payment::PaymentConfig;
use std::time::Duration;

/// Request queue capacity of each actor's channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Channel capacity for every actor. Senders wait once it is full.
    pub buffer_size: usize,
    pub payment: PaymentConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            payment: PaymentConfig::default(),
        }
    }
}

impl SystemConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_payment(mut self, payment: PaymentConfig) -> Self {
        self.payment = payment;
        self
    }

    /// Zero payment delay and a fixed seed, for tests.
    pub fn instant(seed: u64) -> Self {
        Self::default().with_payment(
            PaymentConfig::default()
                .with_delay(Duration::ZERO)
                .with_seed(seed),
        )
    }
}
