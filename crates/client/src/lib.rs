//! Tutor backend HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! Covers the full interaction surface: liveness probe → validate →
//! submit → parse. One request per call, no retries, no queueing.

mod client;

pub use client::{validate_text, HealthStatus, TutorClient, TutorError};
