use super::*;
use crate::analysis::{AnalysisFailure, canonical_records};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Instant;

/// Engine that blocks until the test releases it, then returns a fixed outcome.
pub(super) struct GatedEngine {
    outcome: Result<Arc<AnalysisRecord>, AnalysisFailure>,
    release_rx: Mutex<Receiver<()>>,
    pub(super) calls: AtomicUsize,
    pub(super) saw_cancel: AtomicBool,
}

impl AnalysisEngine for GatedEngine {
    fn name(&self) -> &str {
        "gated"
    }

    fn analyze(
        &self,
        _text: &str,
        cancel: &AtomicBool,
    ) -> Result<Arc<AnalysisRecord>, AnalysisFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let release_rx = self.release_rx.lock().unwrap();
        loop {
            if cancel.load(Ordering::Relaxed) {
                self.saw_cancel.store(true, Ordering::SeqCst);
                return Err(AnalysisFailure::Cancelled);
            }
            match release_rx.recv_timeout(Duration::from_millis(5)) {
                Ok(()) => return self.outcome.clone(),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Err(AnalysisFailure::Cancelled),
            }
        }
    }
}

pub(super) fn gated_engine(
    outcome: Result<Arc<AnalysisRecord>, AnalysisFailure>,
) -> (Arc<GatedEngine>, Sender<()>) {
    let (release_tx, release_rx) = std::sync::mpsc::channel();
    let engine = Arc::new(GatedEngine {
        outcome,
        release_rx: Mutex::new(release_rx),
        calls: AtomicUsize::new(0),
        saw_cancel: AtomicBool::new(false),
    });
    (engine, release_tx)
}

/// Settings without a timeout or simulated delay.
pub(super) fn fast_settings() -> AppSettings {
    let mut settings = AppSettings::default();
    settings.analysis.simulated_delay_ms = 0;
    settings.analysis.timeout_ms = 0;
    settings
}

pub(super) fn canonical(score: u8) -> Arc<AnalysisRecord> {
    canonical_records()
        .iter()
        .find(|record| record.credibility_score == score)
        .cloned()
        .unwrap()
}

pub(super) fn controller_with(
    engine: Arc<dyn AnalysisEngine>,
    settings: &AppSettings,
) -> AnalyzerController {
    AnalyzerController::new(engine, settings)
}

pub(super) fn seeded_mock_controller(seed: u64) -> AnalyzerController {
    let engine = MockAnalysisEngine::with_seed(Duration::ZERO, seed);
    controller_with(Arc::new(engine), &fast_settings())
}

/// Poll until `done` holds or two seconds pass.
pub(super) fn poll_until(
    controller: &mut AnalyzerController,
    done: impl Fn(&AnalyzerController) -> bool,
) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        controller.poll_background_jobs();
        if done(controller) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

pub(super) fn poll_until_settled(controller: &mut AnalyzerController) {
    assert!(
        poll_until(controller, |c| !c.in_progress()),
        "analysis did not settle"
    );
}

/// Wait until a background flag flips, without polling the controller.
pub(super) fn wait_for_flag(flag: &AtomicBool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if flag.load(Ordering::SeqCst) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}
