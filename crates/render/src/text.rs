//! Terminal rendering — the same view model as HTML, printed plain.

use std::fmt::Write;

use tutor_protocol::CorrectionResponse;

use crate::view::ResultView;

/// Render a correction result for terminal output.
pub fn render_result_text(resp: &CorrectionResponse) -> String {
    let view = ResultView::from_response(resp);
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", view.glyph, view.status_label);
    let _ = writeln!(out);
    let _ = writeln!(out, "Original:    {}", view.original_text);
    if let Some(ref corrected) = view.corrected_text {
        let _ = writeln!(out, "Corrected:   {}", corrected);
    }
    let _ = writeln!(out, "Explanation: {}", view.explanation);
    if !view.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggestions:");
        for suggestion in &view.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}% confidence (difficulty: {})",
        view.confidence_pct, view.difficulty_used,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_sentence_rendering() {
        let resp = CorrectionResponse {
            status: "corrected".into(),
            original_text: "I is happy".into(),
            corrected_text: "I am happy".into(),
            explanation: "subject-verb agreement".into(),
            suggestions: vec![],
            confidence: 0.95,
            difficulty_used: "beginner".into(),
            is_correct: false,
        };
        let text = render_result_text(&resp);
        assert!(text.contains("✏️ CORRECTED"));
        assert!(text.contains("Corrected:   I am happy"));
        assert!(text.contains("Explanation: subject-verb agreement"));
        assert!(text.contains("95% confidence (difficulty: beginner)"));
        assert!(!text.contains("Suggestions:"));
    }

    #[test]
    fn test_unsure_with_suggestions() {
        let resp = CorrectionResponse {
            status: "unsure".into(),
            original_text: "Colorless green ideas".into(),
            corrected_text: String::new(),
            explanation: "Hard to tell without more context.".into(),
            suggestions: vec!["add a verb".into(), "finish the sentence".into()],
            confidence: 0.4,
            difficulty_used: "advanced".into(),
            is_correct: false,
        };
        let text = render_result_text(&resp);
        assert!(text.contains("🤔 UNSURE"));
        assert!(!text.contains("Corrected:"));
        assert!(text.contains("  - add a verb\n  - finish the sentence\n"));
        assert!(text.contains("40% confidence"));
    }
}
