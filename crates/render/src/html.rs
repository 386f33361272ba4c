//! HTML fragment renderers.
//!
//! Output is a self-contained fragment meant to fill a single display
//! slot; result and error fragments are mutually exclusive by
//! construction (callers replace, never append). All interpolated text
//! is escaped — backend text is data, not markup.

use std::fmt::Write;

use tutor_protocol::CorrectionResponse;

use crate::view::ResultView;

/// Render a successful correction as a `<div class="result">` fragment.
pub fn render_result_html(resp: &CorrectionResponse) -> String {
    let view = ResultView::from_response(resp);
    let mut out = String::new();

    // The is-correct modifier is the styling hook for "nothing to fix".
    if view.is_correct {
        out.push_str("<div class=\"result is-correct\">\n");
    } else {
        out.push_str("<div class=\"result\">\n");
    }
    let _ = writeln!(out, "  <h3>{} {}</h3>", view.glyph, escape(&view.status_label));
    let _ = writeln!(
        out,
        "  <p class=\"original\"><strong>Original:</strong> {}</p>",
        escape(&view.original_text),
    );
    if let Some(ref corrected) = view.corrected_text {
        let _ = writeln!(
            out,
            "  <p class=\"corrected\"><strong>Corrected:</strong> {}</p>",
            escape(corrected),
        );
    }
    let _ = writeln!(out, "  <p class=\"explanation\">{}</p>", escape(&view.explanation));
    if !view.suggestions.is_empty() {
        out.push_str("  <ul class=\"suggestions\">\n");
        for suggestion in &view.suggestions {
            let _ = writeln!(out, "    <li>{}</li>", escape(suggestion));
        }
        out.push_str("  </ul>\n");
    }
    let _ = writeln!(
        out,
        "  <p class=\"meta\">{}% confidence (difficulty: {})</p>",
        view.confidence_pct,
        escape(&view.difficulty_used),
    );
    out.push_str("</div>\n");
    out
}

/// Render a failure as a `<div class="error">` fragment, one `<p>` per
/// line of the (possibly multi-line) message.
pub fn render_error_html(message: &str) -> String {
    let mut out = String::from("<div class=\"error\">\n");
    for line in message.lines() {
        let _ = writeln!(out, "  <p>{}</p>", escape(line));
    }
    out.push_str("</div>\n");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> CorrectionResponse {
        CorrectionResponse {
            status: "corrected".into(),
            original_text: "I is happy".into(),
            corrected_text: "I am happy".into(),
            explanation: "subject-verb agreement".into(),
            suggestions: vec![],
            confidence: 0.95,
            difficulty_used: "beginner".into(),
            is_correct: false,
        }
    }

    #[test]
    fn test_corrected_response_fragment() {
        let html = render_result_html(&response());
        assert!(html.starts_with("<div class=\"result\">"));
        assert!(html.contains("CORRECTED"));
        assert!(html.contains("<p class=\"corrected\"><strong>Corrected:</strong> I am happy</p>"));
        assert!(html.contains("subject-verb agreement"));
        assert!(html.contains("95% confidence (difficulty: beginner)"));
        assert!(!html.contains("suggestions"), "empty list renders no block");
    }

    #[test]
    fn test_is_correct_adds_class_modifier() {
        let mut resp = response();
        resp.status = "correct".into();
        resp.is_correct = true;
        let html = render_result_html(&resp);
        assert!(html.starts_with("<div class=\"result is-correct\">"));
    }

    #[test]
    fn test_backend_wire_body_renders() {
        // Body exactly as the backend emits it, end to end through
        // deserialization and rendering.
        let resp: CorrectionResponse = serde_json::from_str(
            r#"{
                "original_text": "She don't like it",
                "corrected_text": "She doesn't like it",
                "explanation": "Applied basic grammar rules.",
                "confidence": 0.7,
                "status": "corrected",
                "is_correct": false,
                "suggestions": [],
                "difficulty_used": "intermediate"
            }"#,
        )
        .unwrap();

        let html = render_result_html(&resp);
        assert!(html.starts_with("<div class=\"result\">"));
        assert!(html.contains("She doesn't like it"));
        assert!(html.contains("Applied basic grammar rules."));
        assert!(html.contains("70% confidence (difficulty: intermediate)"));
    }

    #[test]
    fn test_correct_status_has_no_corrected_block() {
        let mut resp = response();
        resp.status = "correct".into();
        let html = render_result_html(&resp);
        assert!(!html.contains("class=\"corrected\""));
    }

    #[test]
    fn test_suggestions_render_one_item_each_in_order() {
        let mut resp = response();
        resp.suggestions = vec!["first".into(), "second".into(), "third".into()];
        let html = render_result_html(&resp);
        assert_eq!(html.matches("<li>").count(), 3);
        let first = html.find("<li>first</li>").unwrap();
        let second = html.find("<li>second</li>").unwrap();
        let third = html.find("<li>third</li>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_backend_text_is_escaped() {
        let mut resp = response();
        resp.explanation = r#"<script>alert("x")</script> & more"#.into();
        let html = render_result_html(&resp);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_error_fragment_one_paragraph_per_line() {
        let html = render_error_html("first line\nsecond line\nthird line");
        assert!(html.starts_with("<div class=\"error\">"));
        assert_eq!(html.matches("<p>").count(), 3);
        assert!(html.contains("<p>second line</p>"));
    }

    #[test]
    fn test_error_fragment_escapes() {
        let html = render_error_html("HTTP 500: <body>");
        assert!(html.contains("<p>HTTP 500: &lt;body&gt;</p>"));
    }
}
