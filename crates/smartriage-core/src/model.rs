//! Wire types exchanged with the triage decision service.

use serde::{Deserialize, Serialize};

/// Patient intake payload sent to `POST /triage`.
///
/// Built per submission by [`IntakeForm::to_request`](crate::IntakeForm::to_request)
/// and dropped once the response has been rendered.
#[derive(Debug, Clone, Serialize)]
pub struct TriageRequest {
    /// Numeric text, forwarded unvalidated.
    pub age: String,
    pub gender: String,
    pub complaint: String,
    /// Emergency Severity Index. `NaN` when the input was not numeric;
    /// serde_json writes non-finite floats as `null`.
    pub esi: f64,
    pub vitals: String,
    pub background: String,
    pub remarks: String,
}

impl TriageRequest {
    /// Whether the ESI parsed to a finite number.
    pub fn esi_is_valid(&self) -> bool {
        self.esi.is_finite()
    }
}

/// Aggregated decision returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Semantically `admit` or `discharge`, in any casing, but not guaranteed.
    pub final_decision: String,
    pub reason: String,
    /// Provenance label, e.g. `SafetyAgent` or `ESI_Protocol`.
    pub source: String,
    pub votes: Votes,
}

/// The four specialist votes. Every slot is required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    pub safety: Vote,
    pub pathology: Vote,
    pub discharge: Vote,
    pub geriatric: Vote,
}

impl Votes {
    pub fn get(&self, agent: AgentKey) -> &Vote {
        match agent {
            AgentKey::Safety => &self.safety,
            AgentKey::Pathology => &self.pathology,
            AgentKey::Discharge => &self.discharge,
            AgentKey::Geriatric => &self.geriatric,
        }
    }
}

/// A single agent's recommendation.
///
/// `decision` is free text; see [`Verdict::of_vote`](crate::Verdict::of_vote).
/// The safety agent may send a `null` reason, so both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Vote {
    pub fn reason_text(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }
}

/// Identifier of a specialist agent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKey {
    Safety,
    Pathology,
    Discharge,
    Geriatric,
}

impl AgentKey {
    /// Display order of the agent slots.
    pub const ALL: [AgentKey; 4] = [
        AgentKey::Safety,
        AgentKey::Pathology,
        AgentKey::Discharge,
        AgentKey::Geriatric,
    ];

    /// Position in [`AgentKey::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Safety => 0,
            Self::Pathology => 1,
            Self::Discharge => 2,
            Self::Geriatric => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Pathology => "pathology",
            Self::Discharge => "discharge",
            Self::Geriatric => "geriatric",
        }
    }

    /// Human-readable agent title for terminal output.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Safety => "Safety",
            Self::Pathology => "Pathology",
            Self::Discharge => "Discharge Officer",
            Self::Geriatric => "Geriatric",
        }
    }
}

impl std::fmt::Display for AgentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_nan_esi_serializes_as_null() {
        let req = TriageRequest {
            age: "45".into(),
            gender: "F".into(),
            complaint: "chest pain".into(),
            esi: f64::NAN,
            vitals: String::new(),
            background: String::new(),
            remarks: String::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value["esi"].is_null());
        assert!(!req.esi_is_valid());
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn response_tolerates_null_reason_and_extra_fields() {
        let json = r#"{
            "final_decision": "Admit",
            "reason": "Safety Protocol: CRITICAL: stemi",
            "source": "SafetyAgent",
            "votes": {
                "safety": {"decision": "Admit", "is_critical": true, "reason": null},
                "pathology": {"decision": "Admit", "reason": "ischemia"},
                "discharge": {"reason": "needs cath lab"},
                "geriatric": {"decision": "Discharge", "reason": "not elderly"}
            }
        }"#;
        let parsed: DecisionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.votes.safety.reason_text(), "");
        assert!(parsed.votes.discharge.decision.is_none());
        assert_eq!(
            parsed.votes.get(AgentKey::Geriatric).decision.as_deref(),
            Some("Discharge")
        );
    }

    #[test]
    fn response_missing_agent_is_rejected() {
        let json = r#"{
            "final_decision": "discharge",
            "reason": "stable",
            "source": "Supervisor",
            "votes": {
                "safety": {"decision": "Discharge", "reason": "ok"},
                "pathology": {"decision": "Discharge", "reason": "ok"},
                "discharge": {"decision": "Discharge", "reason": "ok"}
            }
        }"#;
        assert!(serde_json::from_str::<DecisionResponse>(json).is_err());
    }

    #[test]
    fn agent_keys_match_wire_names() {
        let names: Vec<&str> = AgentKey::ALL.iter().map(AgentKey::as_str).collect();
        assert_eq!(names, ["safety", "pathology", "discharge", "geriatric"]);
        assert_eq!(
            serde_json::to_string(&AgentKey::Geriatric).unwrap(),
            "\"geriatric\""
        );
    }
}
