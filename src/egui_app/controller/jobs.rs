use crate::analysis::{AnalysisEngine, AnalysisFailure, AnalysisRecord};
use crate::session::RequestId;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, Sender},
    },
    thread,
    time::{Duration, Instant},
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    AnalysisFinished(AnalysisJobResult),
}

#[derive(Debug, Clone)]
pub(crate) struct AnalysisJob {
    pub(crate) request_id: RequestId,
    pub(crate) text: String,
}

#[derive(Debug)]
pub(crate) struct AnalysisJobResult {
    pub(crate) request_id: RequestId,
    pub(crate) result: Result<Arc<AnalysisRecord>, AnalysisFailure>,
    pub(crate) elapsed: Duration,
}

/// Background work owned by one controller. At most one analysis runs at a time.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    analysis_request: Option<RequestId>,
    analysis_cancel: Option<Arc<AtomicBool>>,
    analysis_started_at: Option<Instant>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            analysis_request: None,
            analysis_cancel: None,
            analysis_started_at: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn analysis_in_progress(&self) -> bool {
        self.analysis_request.is_some()
    }

    pub(super) fn analysis_request(&self) -> Option<RequestId> {
        self.analysis_request
    }

    pub(super) fn analysis_elapsed(&self) -> Option<Duration> {
        self.analysis_started_at.map(|started| started.elapsed())
    }

    pub(super) fn begin_analysis(&mut self, engine: Arc<dyn AnalysisEngine>, job: AnalysisJob) {
        if self.analysis_in_progress() {
            return;
        }
        let cancel = Arc::new(AtomicBool::new(false));
        self.analysis_request = Some(job.request_id);
        self.analysis_cancel = Some(Arc::clone(&cancel));
        self.analysis_started_at = Some(Instant::now());
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let started = Instant::now();
            let result = engine.analyze(&job.text, &cancel);
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(JobMessage::AnalysisFinished(AnalysisJobResult {
                request_id: job.request_id,
                result,
                elapsed: started.elapsed(),
            }));
        });
    }

    /// Forget the running analysis and tell its worker to stop.
    pub(super) fn clear_analysis(&mut self) {
        self.analysis_request = None;
        self.analysis_started_at = None;
        if let Some(cancel) = self.analysis_cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
    }
}
