use super::error::PaymentError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch, Mutex};
use tracing::{info, info_span, warn, Instrument};

pub const SUCCESS_MESSAGE: &str = "Payment successful";
pub const FAILURE_REASON: &str = "Payment failed";

/// The single outcome of one payment.
pub type PaymentResult = Result<String, PaymentError>;

/// Tuning for the simulated gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfig {
    /// How long a transaction stays in `Processing`.
    pub delay: Duration,
    /// A uniform draw in `[0, 1)` below this value succeeds.
    pub success_threshold: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            success_threshold: 0.8,
            seed: None,
        }
    }
}

impl PaymentConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_success_threshold(mut self, threshold: f64) -> Self {
        self.success_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Lifecycle of one transaction: `Idle → Processing → {Succeeded, Failed}`.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentState {
    Idle,
    Processing,
    Succeeded(String),
    Failed(String),
}

impl PaymentState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentState::Succeeded(_) | PaymentState::Failed(_))
    }
}

/// Simulated payment gateway.
///
/// Every call to [`process_payment`](Self::process_payment) is an independent trial:
/// there is no retry, no cancellation and no timeout, and the amount has no bearing
/// on the outcome. Clones share one random number generator.
#[derive(Clone)]
pub struct PaymentProcessor {
    config: PaymentConfig,
    rng: Arc<Mutex<StdRng>>,
}

impl PaymentProcessor {
    pub fn new(config: PaymentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn config(&self) -> &PaymentConfig {
        &self.config
    }

    /// Starts a payment and returns immediately.
    ///
    /// The transaction runs on its own Tokio task, so this must be called from
    /// within a runtime. Await [`PaymentHandle::outcome`] for the result.
    pub fn process_payment(&self, amount: f64) -> PaymentHandle {
        info!(amount, "Processing payment of ${}...", amount);

        let (state_tx, state_rx) = watch::channel(PaymentState::Idle);
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let delay = self.config.delay;
        let threshold = self.config.success_threshold;
        let rng = self.rng.clone();

        let transaction = async move {
            state_tx.send_replace(PaymentState::Processing);
            tokio::time::sleep(delay).await;

            let draw: f64 = rng.lock().await.random();
            let (state, result) = if draw < threshold {
                info!(draw, "Payment succeeded");
                (
                    PaymentState::Succeeded(SUCCESS_MESSAGE.to_string()),
                    Ok(SUCCESS_MESSAGE.to_string()),
                )
            } else {
                warn!(draw, "Payment declined");
                (
                    PaymentState::Failed(FAILURE_REASON.to_string()),
                    Err(PaymentError::Declined(FAILURE_REASON.to_string())),
                )
            };

            state_tx.send_replace(state);
            let _ = outcome_tx.send(result);
        };
        tokio::spawn(transaction.instrument(info_span!("payment", amount)));

        PaymentHandle {
            state: state_rx,
            outcome: outcome_rx,
        }
    }
}

/// The caller's side of one pending payment.
pub struct PaymentHandle {
    state: watch::Receiver<PaymentState>,
    outcome: oneshot::Receiver<PaymentResult>,
}

impl PaymentHandle {
    /// Current state of the transaction.
    pub fn state(&self) -> PaymentState {
        self.state.borrow().clone()
    }

    /// Waits for the next state transition and returns the new state.
    ///
    /// Returns the current state unchanged once the transaction has finished.
    pub async fn changed(&mut self) -> PaymentState {
        let _ = self.state.changed().await;
        self.state.borrow_and_update().clone()
    }

    /// Waits for the transaction to finish.
    pub async fn outcome(self) -> PaymentResult {
        self.outcome
            .await
            .unwrap_or(Err(PaymentError::ProcessorDropped))
    }
}
