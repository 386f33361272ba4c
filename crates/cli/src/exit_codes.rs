//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain     | Description                               |
//! |-------|------------|-------------------------------------------|
//! | 0     | Universal  | Success                                   |
//! | 1     | Universal  | General error (unspecified)               |
//! | 2     | Universal  | CLI usage error (bad args)                |
//! | 10-19 | correction | Correction attempt outcomes               |

use tutor_client::TutorError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// Emitted by clap itself; listed so the registry stays the single
/// source of truth for the shell contract.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Correction (10-19)
// =============================================================================

/// Input rejected locally (empty or too short); no request was sent.
pub const EXIT_VALIDATION: u8 = 10;

/// Backend responded with a non-success HTTP status.
pub const EXIT_SERVICE: u8 = 11;

/// Request could not complete (connect failure, timeout, malformed
/// response body).
pub const EXIT_TRANSPORT: u8 = 12;

/// Map a TutorError to its exit code.
pub fn tutor_exit_code(err: &TutorError) -> u8 {
    match err {
        TutorError::Validation(_) => EXIT_VALIDATION,
        TutorError::Http(_, _) => EXIT_SERVICE,
        // Malformed bodies share the transport path — the backend
        // answered, but not with anything usable.
        TutorError::Network(_) | TutorError::Parse(_) => EXIT_TRANSPORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_to_exit_code_mapping() {
        assert_eq!(
            tutor_exit_code(&TutorError::Validation("empty".into())),
            EXIT_VALIDATION,
        );
        assert_eq!(tutor_exit_code(&TutorError::Http(500, "".into())), EXIT_SERVICE);
        assert_eq!(
            tutor_exit_code(&TutorError::Network("refused".into())),
            EXIT_TRANSPORT,
        );
        assert_eq!(
            tutor_exit_code(&TutorError::Parse("bad json".into())),
            EXIT_TRANSPORT,
        );
    }
}
