//! UI-only state consumed by the egui renderer.
//!
//! Session data (input text, phase, result) lives in
//! [`crate::session::SessionState`]; this module only holds what the
//! renderer needs on top of it.

use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Number of status messages kept in the rolling log.
pub const STATUS_LOG_LIMIT: usize = 50;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Show the live character counter under the input box.
    pub show_character_count: bool,
    /// Ask the renderer to focus the input box on the next frame.
    pub focus_input_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            show_character_count: true,
            focus_input_requested: true,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Default status shown before anything was analyzed.
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Paste some content to analyze".into(),
            badge_label: label.into(),
            badge_color: color,
            log: Vec::new(),
        }
    }

    /// Replace the current message and append it to the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.text = text.into();
        self.badge_label = label.into();
        self.badge_color = color;
        self.log.push(self.text.clone());
        if self.log.len() > STATUS_LOG_LIMIT {
            let overflow = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..overflow);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_log_is_bounded() {
        let mut status = StatusBarState::idle();
        for idx in 0..(STATUS_LOG_LIMIT + 5) {
            status.set(format!("message {idx}"), StatusTone::Info);
        }
        assert_eq!(status.log.len(), STATUS_LOG_LIMIT);
        assert_eq!(status.log.first().map(String::as_str), Some("message 5"));
        assert_eq!(status.text, format!("message {}", STATUS_LOG_LIMIT + 4));
        assert_eq!(status.badge_label, "Info");
    }

    #[test]
    fn idle_status_has_empty_log() {
        let status = StatusBarState::idle();
        assert_eq!(status.badge_label, "Idle");
        assert!(status.log_text().is_empty());
    }
}
