//! Decision text classification.
//!
//! The service's decision strings are free text, not a closed enum. Two
//! policies turn them into a [`Verdict`]:
//!
//! - [`Verdict::of_final_decision`] is strict: only `admit` (any casing)
//!   counts as an admission.
//! - [`Verdict::of_vote`] is tolerant: any text *containing* `admit` or
//!   `discharge` is classified, admit taking precedence.
//!
//! The two policies must stay separate: "Admitted" is an admit vote but a
//! non-admit final decision.

use serde::Serialize;

/// Label shown for a vote with no decision text.
pub const UNCERTAIN: &str = "Uncertain";

/// Classified decision text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    Discharge,
    /// Unrecognised text, kept verbatim for display.
    Unclassified(String),
}

impl Verdict {
    /// Strict policy for the aggregated final decision.
    ///
    /// `"ADMIT"` → Admit, `"Discharge"` → Discharge, but `"Admitted"`,
    /// `"re-admit"` and `""` are all Unclassified.
    pub fn of_final_decision(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "admit" => Self::Admit,
            "discharge" => Self::Discharge,
            _ => Self::Unclassified(text.to_string()),
        }
    }

    /// Tolerant substring policy for an individual agent vote.
    ///
    /// Absent or empty text becomes [`UNCERTAIN`] before classification.
    pub fn of_vote(decision: Option<&str>) -> Self {
        let text = match decision {
            Some(t) if !t.is_empty() => t,
            _ => UNCERTAIN,
        };
        let lower = text.to_lowercase();
        if lower.contains("admit") {
            Self::Admit
        } else if lower.contains("discharge") {
            Self::Discharge
        } else {
            Self::Unclassified(text.to_string())
        }
    }

    pub fn is_admit(&self) -> bool {
        matches!(self, Self::Admit)
    }

    /// Label text for a vote slot. Unclassified text is shown as-is.
    pub fn vote_label(&self) -> &str {
        match self {
            Self::Admit => "ADMIT",
            Self::Discharge => "DISCHARGE",
            Self::Unclassified(text) => text,
        }
    }
}

/// Binary visual treatment. Everything that is not an admission shares the
/// discharge styling, including unclassified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Admit,
    Discharge,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admit => "admit",
            Self::Discharge => "discharge",
        }
    }
}

impl From<&Verdict> for Style {
    fn from(verdict: &Verdict) -> Self {
        if verdict.is_admit() {
            Self::Admit
        } else {
            Self::Discharge
        }
    }
}
