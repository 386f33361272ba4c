//! Submission session — the state machine around a single in-flight
//! correction request.
//!
//! States: `Idle → Loading → {rendered, errored} → Idle`. The next
//! submission starts over; nothing from a prior attempt survives.
//! Result and error share one display slot, so the bindings are
//! mutually exclusive per attempt.
//!
//! The session owns an explicit `in_flight` flag as the concurrency
//! guard: a second submit while one is outstanding is rejected before
//! any network I/O. The flag and the loading binding are reset on
//! every outcome path before `submit` returns.

use tutor_client::{validate_text, HealthStatus, TutorClient};
use tutor_protocol::CorrectionResponse;
use tutor_render::troubleshooting_message;

/// UI-binding callbacks. The session never prints or builds markup
/// itself; callers decide what loading, results, errors, and the
/// health indicator look like.
pub struct UiBindings<'a> {
    pub set_loading: Box<dyn FnMut(bool) + 'a>,
    pub show_result: Box<dyn FnMut(&CorrectionResponse) + 'a>,
    pub show_error: Box<dyn FnMut(&str) + 'a>,
    pub set_health: Box<dyn FnMut(&HealthStatus) + 'a>,
}

/// What a `submit` call ended as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Response received and handed to `show_result`.
    Rendered,
    /// Validation or request failure handed to `show_error`.
    Errored,
    /// A request was already in flight; nothing happened.
    Rejected,
}

pub struct CorrectionSession<'a> {
    client: TutorClient,
    difficulty: String,
    ui: UiBindings<'a>,
    in_flight: bool,
}

impl<'a> CorrectionSession<'a> {
    pub fn new(client: TutorClient, difficulty: impl Into<String>, ui: UiBindings<'a>) -> Self {
        Self {
            client,
            difficulty: difficulty.into(),
            ui,
            in_flight: false,
        }
    }

    /// Run the startup liveness probe and push the result to the
    /// health indicator binding. Advisory only: submissions are
    /// allowed whatever this reports.
    pub fn probe_health(&mut self) -> HealthStatus {
        let status = self.client.health();
        (self.ui.set_health)(&status);
        status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate and submit one correction request.
    ///
    /// Validation failures surface through `show_error` without ever
    /// entering the loading state. For requests that do go out, the
    /// loading state is exited unconditionally, whichever way the
    /// attempt ends.
    pub fn submit(&mut self, raw_text: &str) -> SubmitOutcome {
        // Pre-flight validation: inline message, no loading state.
        if let Err(err) = validate_text(raw_text) {
            (self.ui.show_error)(&err.to_string());
            return SubmitOutcome::Errored;
        }

        if self.in_flight {
            return SubmitOutcome::Rejected;
        }

        self.in_flight = true;
        (self.ui.set_loading)(true);

        let outcome = self.client.correct(raw_text, &self.difficulty);

        // Guaranteed cleanup: loading ends and the guard clears on
        // every path before anything is rendered.
        (self.ui.set_loading)(false);
        self.in_flight = false;

        match outcome {
            Ok(resp) => {
                (self.ui.show_result)(&resp);
                SubmitOutcome::Rendered
            }
            Err(err) => {
                (self.ui.show_error)(&troubleshooting_message(&err.to_string()));
                SubmitOutcome::Errored
            }
        }
    }
}
