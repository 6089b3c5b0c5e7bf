//! Submission lifecycle: idle → busy → (results | alert) → idle.
//!
//! [`UiState`] is the whole visible state of the intake page: the submit
//! control, the results panel and any pending alert. Only [`Session::begin`],
//! [`Session::finish`] and the in-flight guard of [`Session::submit`]
//! mutate it.

use smartriage_core::{DecisionResponse, IntakeForm, Presentation, render};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::http::ClientError;
use crate::service::DecisionService;

/// The single user-facing failure message. Transport errors, error statuses
/// and malformed bodies all collapse into it.
pub const ALERT_MESSAGE: &str = "An error occurred during triage analysis. Please try again.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("a triage submission is already in flight")]
    InFlight,
}

/// Submit button: enabled flag plus which of its two children is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControls {
    pub enabled: bool,
    pub label_visible: bool,
    pub loader_visible: bool,
}

impl SubmitControls {
    pub const IDLE: Self = Self {
        enabled: true,
        label_visible: true,
        loader_visible: false,
    };

    pub const BUSY: Self = Self {
        enabled: false,
        label_visible: false,
        loader_visible: true,
    };
}

/// Results panel visibility and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Hidden,
    Shown(Presentation),
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        match self {
            Self::Shown(p) => Some(p),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub controls: SubmitControls,
    pub panel: Panel,
    pub alert: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            controls: SubmitControls::IDLE,
            panel: Panel::Hidden,
            alert: None,
        }
    }
}

/// One intake page. Each submission is independent; nothing carries over
/// between them except what is currently on screen.
#[derive(Debug, Default)]
pub struct Session {
    state: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        !self.state.controls.enabled
    }

    /// Enter the busy state: disable the control, swap label for loader,
    /// and hide stale results and alerts.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.is_busy() {
            return Err(SessionError::InFlight);
        }
        self.state.controls = SubmitControls::BUSY;
        self.state.panel = Panel::Hidden;
        self.state.alert = None;
        Ok(())
    }

    /// Apply the outcome of the service call. The controls are reset
    /// whether or not the call succeeded.
    pub fn finish(&mut self, outcome: Result<DecisionResponse, ClientError>) {
        apply_outcome(&mut self.state, outcome);
    }

    /// Run one full submission against `service`.
    ///
    /// Service failures end in the alert state rather than an `Err`; the
    /// only error is a re-entrant submit. If the returned future is dropped
    /// before completion, the controls still return to idle.
    pub async fn submit<S>(
        &mut self,
        service: &S,
        form: &IntakeForm,
    ) -> Result<&UiState, SessionError>
    where
        S: DecisionService + ?Sized,
    {
        let request = form.to_request();
        self.begin()?;
        let pending = Pending {
            state: &mut self.state,
        };
        let outcome = service.submit_triage(&request).await;
        pending.complete(outcome);
        Ok(&self.state)
    }
}

/// Busy state held across the service call. Dropping it, completed or
/// not, puts the controls back to idle.
struct Pending<'a> {
    state: &'a mut UiState,
}

impl Pending<'_> {
    fn complete(self, outcome: Result<DecisionResponse, ClientError>) {
        apply_outcome(self.state, outcome);
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.state.controls.enabled {
            warn!("triage submission abandoned before completion");
            self.state.controls = SubmitControls::IDLE;
        }
    }
}

fn apply_outcome(state: &mut UiState, outcome: Result<DecisionResponse, ClientError>) {
    match outcome {
        Ok(response) => {
            let presentation = render(&response);
            info!(
                badge = %presentation.final_decision.badge_label,
                style = presentation.final_decision.badge_style.as_str(),
                "rendered triage decision"
            );
            state.panel = Panel::Shown(presentation);
        }
        Err(e) => {
            error!(error = %e, "triage submission failed");
            state.alert = Some(ALERT_MESSAGE.to_string());
        }
    }
    state.controls = SubmitControls::IDLE;
}
