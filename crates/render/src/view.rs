//! View model — the one place presentation decisions are made.

use tutor_protocol::{CorrectionResponse, CorrectionStatus};

/// Everything a renderer needs, precomputed. HTML and terminal output
/// are both straight serializations of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub glyph: &'static str,
    /// The literal wire status, upper-cased. Matching is
    /// case-insensitive but the displayed text comes from the wire —
    /// both behaviors are contract.
    pub status_label: String,
    pub original_text: String,
    /// Present only when the status parsed to `Corrected`.
    pub corrected_text: Option<String>,
    pub explanation: String,
    pub suggestions: Vec<String>,
    /// Clamped to [0, 100].
    pub confidence_pct: u8,
    pub difficulty_used: String,
    /// Backend's convenience flag; styling hooks key off it.
    pub is_correct: bool,
}

/// Clamp to [0, 1], then round (not truncate) to a whole percent.
/// 0.876 → 88. Out-of-range backend values have been observed, so
/// clamping happens first; NaN saturates to 0.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn status_glyph(status: CorrectionStatus) -> &'static str {
    match status {
        CorrectionStatus::Correct => "✅",
        CorrectionStatus::Corrected => "✏️",
        CorrectionStatus::Unsure => "🤔",
        CorrectionStatus::Other => "📝",
    }
}

impl ResultView {
    pub fn from_response(resp: &CorrectionResponse) -> Self {
        let status = resp.parsed_status();
        let corrected_text = if status == CorrectionStatus::Corrected {
            Some(resp.corrected_text.clone())
        } else {
            None
        };

        Self {
            glyph: status_glyph(status),
            status_label: resp.status.to_uppercase(),
            original_text: resp.original_text.clone(),
            corrected_text,
            explanation: resp.explanation.clone(),
            suggestions: resp.suggestions.clone(),
            confidence_pct: confidence_percent(resp.confidence),
            difficulty_used: resp.difficulty_used.clone(),
            is_correct: resp.is_correct,
        }
    }
}
