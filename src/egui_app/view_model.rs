//! Helpers to convert session data into egui-facing view structs.

use crate::analysis::{AnalysisRecord, CredibilityStatus, ImmunityTip, ScoreBand};
use crate::session::{SessionError, ValidationError};

pub const APP_SUBTITLE: &str = "Advanced AI-powered fact-checking that doesn't just detect \
                                misinformation—it teaches you how to spot it yourself.";
pub const INPUT_TITLE: &str = "Analyze News Content";
pub const INPUT_DESCRIPTION: &str =
    "Paste any news article, tweet, headline, or social media post to analyze its credibility";
pub const INPUT_HINT: &str =
    "Paste your news content here... (articles, tweets, headlines, social media posts)";

/// Shown instead of the source badges when a record cites nothing.
pub const NO_SOURCES_TEXT: &str = "No credible sources identified in this content.";

/// Everything the result card renders for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisView {
    pub status: CredibilityStatus,
    pub status_label: &'static str,
    pub score: u8,
    /// `"85/100"`.
    pub score_label: String,
    /// Score scaled to `0.0..=1.0` for the progress bar.
    pub score_fraction: f32,
    pub band: ScoreBand,
    pub explanation: String,
    /// Empty when the record raised no warnings; the section is then hidden.
    pub red_flags: Vec<String>,
    pub sources: SourcesView,
    pub tip: ImmunityTip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourcesView {
    Listed(Vec<String>),
    NoneFound,
}

pub fn analysis_view(record: &AnalysisRecord) -> AnalysisView {
    let score = record.credibility_score.min(100);
    AnalysisView {
        status: record.status,
        status_label: record.status.badge_label(),
        score,
        score_label: format!("{score}/100"),
        score_fraction: f32::from(score) / 100.0,
        band: ScoreBand::from_score(score),
        explanation: record.explanation.clone(),
        red_flags: record.red_flags.clone(),
        sources: if record.sources.is_empty() {
            SourcesView::NoneFound
        } else {
            SourcesView::Listed(record.sources.clone())
        },
        tip: record.immunity_tip.clone(),
    }
}

/// `"12 characters"`; counts characters, not bytes.
pub fn character_count_label(text: &str) -> String {
    let count = text.chars().count();
    if count == 1 {
        "1 character".into()
    } else {
        format!("{count} characters")
    }
}

/// The static tips stand in for the result card whenever no result exists,
/// including while the first analysis is running.
pub fn show_quick_tips(result: Option<&AnalysisRecord>) -> bool {
    result.is_none()
}

pub fn trigger_label(in_progress: bool) -> &'static str {
    if in_progress {
        "Analyzing..."
    } else {
        "Analyze Content"
    }
}

/// Headline shown above an error message in the result area.
pub fn error_heading(error: &SessionError) -> &'static str {
    match error {
        SessionError::Validation(ValidationError::EmptyInput) => "Nothing to analyze",
        SessionError::Validation(ValidationError::AlreadyAnalyzing) => "Analysis in progress",
        SessionError::Failure(_) => "Analysis failed",
    }
}
