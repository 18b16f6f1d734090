//! Analysis engines that turn submitted text into an [`AnalysisRecord`].
//!
//! Engines run on a background worker thread and must poll the cancel flag
//! they are given so a torn-down session does not wait on them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use super::catalog;
use super::record::{AnalysisRecord, RecordError};

/// Delay the mock engine waits before answering, matching the web client.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2_000);
/// How often a sleeping engine re-checks its cancel flag.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Reasons an analysis could not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisFailure {
    #[error("Analysis timed out after {}ms", .after.as_millis())]
    TimedOut { after: Duration },
    #[error("Analysis was cancelled")]
    Cancelled,
    #[error("Analysis backend failed: {message}")]
    Backend { message: String },
    #[error("Analysis returned a malformed record: {0}")]
    MalformedRecord(#[from] RecordError),
}

/// Produces credibility records for submitted text.
pub trait AnalysisEngine: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Analyze `text`, returning early with [`AnalysisFailure::Cancelled`] once
    /// `cancel` is set.
    fn analyze(&self, text: &str, cancel: &AtomicBool)
    -> Result<Arc<AnalysisRecord>, AnalysisFailure>;
}

/// Stand-in engine that ignores the text and returns a random canonical record.
pub struct MockAnalysisEngine {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockAnalysisEngine {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Deterministic variant for tests and reproducible CLI runs.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self) -> Arc<AnalysisRecord> {
        let mut rng = self.rng.lock().unwrap_or_else(|err| err.into_inner());
        catalog::select_with(&mut *rng)
    }
}

impl Default for MockAnalysisEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl AnalysisEngine for MockAnalysisEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn analyze(
        &self,
        _text: &str,
        cancel: &AtomicBool,
    ) -> Result<Arc<AnalysisRecord>, AnalysisFailure> {
        sleep_unless_cancelled(self.delay, cancel)?;
        Ok(self.pick())
    }
}

/// Sleep for `total`, waking every [`CANCEL_POLL_INTERVAL`] to honour `cancel`.
pub fn sleep_unless_cancelled(total: Duration, cancel: &AtomicBool) -> Result<(), AnalysisFailure> {
    let deadline = Instant::now() + total;
    loop {
        if cancel.load(Ordering::Relaxed) {
            return Err(AnalysisFailure::Cancelled);
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        thread::sleep((deadline - now).min(CANCEL_POLL_INTERVAL));
    }
}
