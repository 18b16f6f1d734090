//! Per-session analysis state machine.
//!
//! ```text
//! Idle --trigger(valid)--> Analyzing --completed--> Done
//!  ^                          |  |                   |
//!  +------failure/timeout-----+  +--cancel--> Idle|Done
//!                                                    |
//! Done --trigger(valid)--> Analyzing <---------------+
//! ```
//!
//! Triggers with blank input, or while a selection is outstanding, leave the
//! state untouched. The state never spawns work itself; the controller drives
//! it and reports outcomes back with the request id it was handed.

use std::sync::Arc;

use thiserror::Error;

use crate::analysis::{AnalysisFailure, AnalysisRecord};

/// Identifies one accepted trigger.
pub type RequestId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing in flight and no result yet (or the last run failed).
    #[default]
    Idle,
    /// A selection is outstanding.
    Analyzing,
    /// The last accepted trigger produced a result.
    Done,
}

/// Why a trigger was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter some text to analyze")]
    EmptyInput,
    #[error("An analysis is already running")]
    AlreadyAnalyzing,
}

/// Error surfaced to the renderer next to the current result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Failure(#[from] AnalysisFailure),
}

/// What happened to a reported outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome belonged to the outstanding request and was applied.
    Applied,
    /// The outcome was for a request that is no longer outstanding.
    Stale,
}

/// Owned state for one analysis session.
#[derive(Clone, Debug)]
pub struct SessionState {
    input_text: String,
    phase: SessionPhase,
    current_result: Option<Arc<AnalysisRecord>>,
    last_error: Option<SessionError>,
    pending_request: Option<RequestId>,
    next_request_id: RequestId,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// True when a trigger would be accepted right now.
pub fn is_triggerable(state: &SessionState) -> bool {
    state.validate_trigger().is_ok()
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            phase: SessionPhase::Idle,
            current_result: None,
            last_error: None,
            pending_request: None,
            next_request_id: 1,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn in_progress(&self) -> bool {
        self.phase == SessionPhase::Analyzing
    }

    pub fn current_result(&self) -> Option<&Arc<AnalysisRecord>> {
        self.current_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    /// Replace the input text. Clears a stale validation error.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        if matches!(self.last_error, Some(SessionError::Validation(_))) {
            self.last_error = None;
        }
    }

    pub fn validate_trigger(&self) -> Result<(), ValidationError> {
        if self.in_progress() {
            return Err(ValidationError::AlreadyAnalyzing);
        }
        if self.input_text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(())
    }

    /// Accept a trigger, moving to `Analyzing` and allocating a request id.
    ///
    /// On rejection nothing changes.
    pub fn begin(&mut self) -> Result<RequestId, ValidationError> {
        self.validate_trigger()?;
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.pending_request = Some(request_id);
        self.phase = SessionPhase::Analyzing;
        self.last_error = None;
        Ok(request_id)
    }

    /// Remember a rejected trigger so it can be shown to the user.
    pub fn record_validation_error(&mut self, error: ValidationError) {
        self.last_error = Some(SessionError::Validation(error));
    }

    /// Apply the outcome of request `request_id`.
    ///
    /// Records are checked for well-formedness before they replace the
    /// current result; a failure keeps the previous result and returns to
    /// `Idle`.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        outcome: Result<Arc<AnalysisRecord>, AnalysisFailure>,
    ) -> Completion {
        if self.pending_request != Some(request_id) {
            return Completion::Stale;
        }
        self.pending_request = None;
        match outcome.and_then(|record| {
            record.validate()?;
            Ok(record)
        }) {
            Ok(record) => {
                self.current_result = Some(record);
                self.last_error = None;
                self.phase = SessionPhase::Done;
            }
            Err(failure) => {
                self.last_error = Some(SessionError::Failure(failure));
                self.phase = SessionPhase::Idle;
            }
        }
        Completion::Applied
    }

    /// Abandon the outstanding request, if any, returning its id.
    ///
    /// Any later outcome for it is reported as [`Completion::Stale`].
    pub fn cancel(&mut self) -> Option<RequestId> {
        let request_id = self.pending_request.take()?;
        self.phase = if self.current_result.is_some() {
            SessionPhase::Done
        } else {
            SessionPhase::Idle
        };
        Some(request_id)
    }
}
