//! Rendering for correction results.
//!
//! Everything here is a pure function of a `CorrectionResponse` (or an
//! error message string) — no I/O, no state. The view is always built
//! from scratch; nothing is merged with a previous result.

mod error;
mod html;
mod text;
mod view;

pub use error::troubleshooting_message;
pub use html::{render_error_html, render_result_html};
pub use text::render_result_text;
pub use view::{confidence_percent, ResultView};
