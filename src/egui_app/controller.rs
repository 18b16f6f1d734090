//! Session controller bridging the analysis engine and the egui renderer.
//!
//! The controller owns one [`SessionState`] and runs accepted triggers on a
//! background worker. Call [`AnalyzerController::poll_background_jobs`] once
//! per frame to apply finished work.

mod background_jobs;
mod jobs;
#[cfg(test)]
mod test_support;

use crate::analysis::{AnalysisEngine, AnalysisRecord, MockAnalysisEngine};
use crate::config::AppSettings;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model::{self, AnalysisView};
use crate::session::{
    self, RequestId, SessionError, SessionPhase, SessionState, ValidationError,
};
use jobs::{AnalysisJob, ControllerJobs};
use std::sync::Arc;
use std::time::Duration;

/// Maintains session state and bridges the analysis engine to the egui UI.
pub struct AnalyzerController {
    pub ui: UiState,
    session: SessionState,
    engine: Arc<dyn AnalysisEngine>,
    strict_validation: bool,
    timeout: Option<Duration>,
    jobs: ControllerJobs,
}

impl AnalyzerController {
    pub fn new(engine: Arc<dyn AnalysisEngine>, settings: &AppSettings) -> Self {
        let mut ui = UiState::default();
        ui.show_character_count = settings.ui.show_character_count;
        Self {
            ui,
            session: SessionState::new(),
            engine,
            strict_validation: settings.strict_validation,
            timeout: settings.analysis.timeout(),
            jobs: ControllerJobs::new(),
        }
    }

    /// Controller backed by the random mock engine using the configured delay.
    pub fn with_mock_engine(settings: &AppSettings) -> Self {
        let engine = MockAnalysisEngine::new(settings.analysis.simulated_delay());
        Self::new(Arc::new(engine), settings)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn input_text(&self) -> &str {
        self.session.input_text()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn in_progress(&self) -> bool {
        self.session.in_progress()
    }

    pub fn current_result(&self) -> Option<&Arc<AnalysisRecord>> {
        self.session.current_result()
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.session.last_error()
    }

    /// View of the current result, if any.
    pub fn result_view(&self) -> Option<AnalysisView> {
        self.session
            .current_result()
            .map(|record| view_model::analysis_view(record))
    }

    /// How long the running analysis has been going.
    pub fn analysis_elapsed(&self) -> Option<Duration> {
        self.jobs.analysis_elapsed()
    }

    /// Replace the input text. Always succeeds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.session.set_text(text);
    }

    /// Whether the analyze button should be enabled.
    pub fn is_triggerable(&self) -> bool {
        session::is_triggerable(&self.session)
    }

    /// Start an analysis if the input is valid and none is running.
    ///
    /// Rejected triggers are ignored, or recorded as a visible error when
    /// strict validation is enabled.
    pub fn trigger(&mut self) {
        if let Err(error) = self.try_trigger() {
            tracing::debug!("Ignoring analysis trigger: {error}");
            if self.strict_validation {
                self.set_status(error.to_string(), StatusTone::Warning);
                self.session.record_validation_error(error);
            }
        }
    }

    /// Start an analysis, reporting why it was refused.
    pub fn try_trigger(&mut self) -> Result<RequestId, ValidationError> {
        let request_id = self.session.begin()?;
        let text = self.session.input_text().to_string();
        tracing::info!(
            request_id,
            chars = text.chars().count(),
            engine = self.engine.name(),
            "Analysis started"
        );
        self.jobs
            .begin_analysis(Arc::clone(&self.engine), AnalysisJob { request_id, text });
        self.set_status("Analyzing content...", StatusTone::Busy);
        Ok(request_id)
    }

    /// Abandon the running analysis. Its result, if it still arrives, is dropped.
    pub fn cancel_analysis(&mut self) {
        let Some(request_id) = self.session.cancel() else {
            return;
        };
        self.jobs.clear_analysis();
        tracing::info!(request_id, "Analysis cancelled");
        self.set_status("Analysis cancelled", StatusTone::Info);
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}

impl Drop for AnalyzerController {
    fn drop(&mut self) {
        if self.jobs.analysis_in_progress() {
            tracing::debug!("Dropping controller with an analysis in flight");
        }
        self.jobs.clear_analysis();
    }
}
