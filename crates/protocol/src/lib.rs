//! Tutor Backend Wire Contract — Frozen JSON Shapes
//!
//! This crate defines the canonical types exchanged with the tutor
//! backend over `POST /correct`. The response shape is dictated by the
//! backend and treated as the authoritative contract: fields the
//! backend may omit carry `#[serde(default)]` so older or trimmed
//! payloads still deserialize.
//!
//! # Usage
//!
//! ```ignore
//! use tutor_protocol::{CorrectionRequest, CorrectionResponse, CorrectionStatus};
//!
//! let req = CorrectionRequest {
//!     text: "I is happy".into(),
//!     difficulty: "intermediate".into(),
//! };
//! let json = serde_json::to_string(&req)?;
//!
//! let resp: CorrectionResponse = serde_json::from_str(&body)?;
//! match resp.parsed_status() {
//!     CorrectionStatus::Corrected => { /* show the corrected text */ }
//!     _ => {}
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Difficulty levels the backend understands. The wire field is an
/// opaque string passed through verbatim — this list is advisory for
/// UIs, not validated client-side.
pub const DIFFICULTY_LEVELS: &[&str] = &["easy", "intermediate", "advanced"];

/// Backend default when no difficulty is given.
pub const DEFAULT_DIFFICULTY: &str = "intermediate";

// =============================================================================
// Client → Backend
// =============================================================================

/// Body of `POST /correct`.
///
/// `text` must be trimmed and at least two characters long before it
/// reaches the wire — the client validates, the type does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub text: String,
    pub difficulty: String,
}

// =============================================================================
// Backend → Client
// =============================================================================

/// Body of a 2xx response from `POST /correct`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionResponse {
    /// `"correct" | "corrected" | "unsure"` — but compared
    /// case-insensitively, and unknown values must still render.
    pub status: String,

    /// Echo of the submitted text.
    pub original_text: String,

    /// Meaningful only when `status == "corrected"`; the backend
    /// echoes the original otherwise.
    #[serde(default)]
    pub corrected_text: String,

    /// Human-readable rationale.
    #[serde(default)]
    pub explanation: String,

    /// Optional follow-up suggestions, order preserved. The backend
    /// always sends the array (often empty), but absence must not be
    /// a parse failure.
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Backend confidence in [0, 1]. Out-of-range values have been
    /// observed; rendering clamps.
    #[serde(default)]
    pub confidence: f64,

    /// Echo of the difficulty the backend applied.
    #[serde(default)]
    pub difficulty_used: String,

    /// Convenience flag mirroring `status == "correct"`.
    #[serde(default)]
    pub is_correct: bool,
}

impl CorrectionResponse {
    /// Parse the wire status into the known set. Never fails —
    /// anything unrecognized is [`CorrectionStatus::Other`].
    pub fn parsed_status(&self) -> CorrectionStatus {
        CorrectionStatus::parse(&self.status)
    }
}

/// Parsed form of [`CorrectionResponse::status`].
///
/// Matching is case-insensitive; display code upper-cases the
/// *literal* wire value instead of this enum, so an odd-cased but
/// recognized status still matches here while showing its own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionStatus {
    /// Input was already grammatical.
    Correct,
    /// Backend produced a correction.
    Corrected,
    /// Backend could not decide.
    Unsure,
    /// Anything else on the wire.
    Other,
}

impl CorrectionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "correct" => CorrectionStatus::Correct,
            "corrected" => CorrectionStatus::Corrected,
            "unsure" => CorrectionStatus::Unsure,
            _ => CorrectionStatus::Other,
        }
    }
}
