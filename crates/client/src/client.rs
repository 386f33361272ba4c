//! Blocking HTTP client for the tutor backend.

use std::time::Duration;

use tutor_protocol::{CorrectionRequest, CorrectionResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tutor API client (blocking).
#[derive(Clone)]
pub struct TutorClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

/// Error type for correction attempts.
#[derive(Debug)]
pub enum TutorError {
    /// Input rejected locally; no request was sent
    Validation(String),
    /// Request could not complete (DNS, connect, timeout)
    Network(String),
    /// Backend responded with a non-success status
    Http(u16, String),
    /// 2xx response whose body was not valid CorrectionResponse JSON
    Parse(String),
}

impl std::fmt::Display for TutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorError::Validation(msg) => write!(f, "{}", msg),
            TutorError::Network(msg) => write!(f, "Network error: {}", msg),
            TutorError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            TutorError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TutorError {}

/// Result of the startup liveness probe. Advisory only — it never
/// gates a correction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Connected,
    /// Carries the diagnostic detail for the developer-facing channel.
    Unreachable(String),
}

impl HealthStatus {
    /// Fixed indicator label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Connected => "Connected to tutor service",
            HealthStatus::Unreachable(_) => "Cannot reach tutor service",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, HealthStatus::Connected)
    }
}

/// Pre-flight validation: trim, then require at least two characters.
///
/// Returns the trimmed text that should go on the wire.
pub fn validate_text(raw: &str) -> Result<&str, TutorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TutorError::Validation(
            "empty input: type a sentence first".into(),
        ));
    }
    if trimmed.chars().count() < 2 {
        return Err(TutorError::Validation(
            "input too short: enter at least two characters".into(),
        ));
    }
    Ok(trimmed)
}

impl TutorClient {
    /// Create a new client for the given base URL (no trailing slash
    /// required; one is stripped if present).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("tutor/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One idempotent GET against `/health`. The response body is
    /// ignored; only reachability and a 2xx status matter.
    pub fn health(&self) -> HealthStatus {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send() {
            Ok(resp) if resp.status().is_success() => HealthStatus::Connected,
            Ok(resp) => HealthStatus::Unreachable(format!("HTTP {}", resp.status().as_u16())),
            Err(e) => HealthStatus::Unreachable(e.to_string()),
        }
    }

    /// Validate locally, then submit one `POST /correct`.
    ///
    /// Validation failures return before any network I/O. A non-2xx
    /// status becomes `Http(code, body)` — the body is carried verbatim
    /// as the error detail, not parsed.
    pub fn correct(&self, text: &str, difficulty: &str) -> Result<CorrectionResponse, TutorError> {
        let trimmed = validate_text(text)?;

        let body = CorrectionRequest {
            text: trimmed.to_string(),
            difficulty: difficulty.to_string(),
        };

        let url = format!("{}/correct", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| TutorError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(TutorError::Http(status, detail));
        }

        response
            .json::<CorrectionResponse>()
            .map_err(|e| TutorError::Parse(e.to_string()))
    }
}
