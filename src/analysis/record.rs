//! Credibility analysis payload and its well-formedness rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest credibility score a record may carry.
pub const MAX_SCORE: u8 = 100;
/// Scores at or above this value fall in the high band.
pub const HIGH_BAND_MIN: u8 = 70;
/// Scores at or above this value (and below the high band) fall in the medium band.
pub const MEDIUM_BAND_MIN: u8 = 40;

/// Verdict attached to an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityStatus {
    Verified,
    Suspicious,
    Misleading,
}

impl CredibilityStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Suspicious => "suspicious",
            Self::Misleading => "misleading",
        }
    }

    /// Badge text shown next to the result header.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Verified => "Verified Content",
            Self::Suspicious => "Suspicious Content",
            Self::Misleading => "Misleading Content",
        }
    }

    /// Whether this status may be reported for a score in `band`.
    ///
    /// `Suspicious` is the hedging verdict and is accepted anywhere below the
    /// high band.
    pub fn is_consistent_with(self, band: ScoreBand) -> bool {
        match self {
            Self::Verified => band == ScoreBand::High,
            Self::Suspicious => matches!(band, ScoreBand::Medium | ScoreBand::Low),
            Self::Misleading => band == ScoreBand::Low,
        }
    }
}

impl std::fmt::Display for CredibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of credibility scores used for colouring and consistency checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// 70 and above.
    High,
    /// 40 to 69.
    Medium,
    /// Below 40.
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_BAND_MIN {
            Self::High
        } else if score >= MEDIUM_BAND_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(label)
    }
}

/// Educational payload bundled with every analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmunityTip {
    pub title: String,
    pub description: String,
    /// Short rule of thumb rendered in monospace.
    pub pattern: String,
}

/// Immutable result of analysing a piece of content.
///
/// Field names serialize in camelCase to stay compatible with the web client
/// payload (`credibilityScore`, `redFlags`, `immunityTip`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub credibility_score: u8,
    pub status: CredibilityStatus,
    pub explanation: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    pub immunity_tip: ImmunityTip,
}

/// Reasons a record is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Credibility score {0} is outside 0-100")]
    ScoreOutOfRange(u8),
    #[error("Explanation is empty")]
    EmptyExplanation,
    #[error("Red flag #{index} is empty")]
    EmptyRedFlag { index: usize },
    #[error("Source #{index} is empty")]
    EmptySource { index: usize },
    #[error("Immunity tip {field} is empty")]
    EmptyTipField { field: &'static str },
    #[error("Status '{status}' does not match a {band} credibility score")]
    StatusBandMismatch {
        status: CredibilityStatus,
        band: ScoreBand,
    },
}

impl AnalysisRecord {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.credibility_score)
    }

    /// Check every field against the record invariants.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.credibility_score > MAX_SCORE {
            return Err(RecordError::ScoreOutOfRange(self.credibility_score));
        }
        if self.explanation.trim().is_empty() {
            return Err(RecordError::EmptyExplanation);
        }
        if let Some(index) = first_blank(&self.red_flags) {
            return Err(RecordError::EmptyRedFlag { index });
        }
        if let Some(index) = first_blank(&self.sources) {
            return Err(RecordError::EmptySource { index });
        }
        let tip = &self.immunity_tip;
        for (field, value) in [
            ("title", &tip.title),
            ("description", &tip.description),
            ("pattern", &tip.pattern),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyTipField { field });
            }
        }
        let band = self.band();
        if !self.status.is_consistent_with(band) {
            return Err(RecordError::StatusBandMismatch {
                status: self.status,
                band,
            });
        }
        Ok(())
    }
}

fn first_blank(items: &[String]) -> Option<usize> {
    items.iter().position(|item| item.trim().is_empty())
}
