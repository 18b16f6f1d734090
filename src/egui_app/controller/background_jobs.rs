use super::jobs::{AnalysisJobResult, JobMessage};
use super::*;
use crate::analysis::AnalysisFailure;
use crate::session::Completion;

impl AnalyzerController {
    /// Apply finished background work and enforce the analysis timeout.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::AnalysisFinished(message) => self.apply_analysis_result(message),
            }
        }
        self.enforce_timeout();
    }

    fn apply_analysis_result(&mut self, message: AnalysisJobResult) {
        if self.jobs.analysis_request() != Some(message.request_id) {
            tracing::debug!(request_id = message.request_id, "Dropping stale analysis result");
            return;
        }
        self.jobs.clear_analysis();
        let elapsed = message.elapsed;
        if self.session.complete(message.request_id, message.result) == Completion::Stale {
            return;
        }
        let request_id = message.request_id;
        let (text, tone) = if let Some(error) = self.session.last_error() {
            let text = error.to_string();
            tracing::warn!(request_id, "Analysis failed: {text}");
            (text, StatusTone::Error)
        } else if let Some(record) = self.session.current_result() {
            tracing::info!(
                request_id,
                score = record.credibility_score,
                status = %record.status,
                "Analysis finished"
            );
            let text = format!(
                "Analysis complete: {}/100, {} ({:.1}s)",
                record.credibility_score,
                record.status,
                elapsed.as_secs_f32()
            );
            (text, StatusTone::Info)
        } else {
            return;
        };
        self.set_status(text, tone);
    }

    fn enforce_timeout(&mut self) {
        let (Some(timeout), Some(elapsed)) = (self.timeout, self.jobs.analysis_elapsed()) else {
            return;
        };
        if elapsed < timeout {
            return;
        }
        let Some(request_id) = self.jobs.analysis_request() else {
            return;
        };
        self.jobs.clear_analysis();
        let failure = AnalysisFailure::TimedOut { after: timeout };
        let text = failure.to_string();
        if self.session.complete(request_id, Err(failure)) == Completion::Applied {
            tracing::warn!(request_id, "{text}");
            self.set_status(text, StatusTone::Error);
        }
    }
}
