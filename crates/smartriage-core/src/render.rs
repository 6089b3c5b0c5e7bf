//! Pure mapping of a [`DecisionResponse`] onto results-panel state.
//!
//! [`render`] holds no state between calls, so rendering the same response
//! twice yields an identical [`Presentation`].

use serde::Serialize;

use crate::model::{AgentKey, DecisionResponse, Vote};
use crate::verdict::{Style, Verdict};

/// Card accent for an admitted patient (red).
pub const ACCENT_ADMIT: &str = "#EF4444";
/// Card accent for every non-admit outcome (green).
pub const ACCENT_DISCHARGE: &str = "#10B981";

/// Everything the results panel shows for one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub results_visible: bool,
    pub final_decision: FinalDecisionView,
    /// One entry per agent, in [`AgentKey::ALL`] order.
    pub votes: [VoteView; 4],
}

impl Presentation {
    pub fn vote(&self, agent: AgentKey) -> &VoteView {
        &self.votes[agent.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalDecisionView {
    /// `final_decision` uppercased.
    pub badge_label: String,
    pub badge_style: Style,
    pub reason: String,
    pub source: String,
    pub card_accent: &'static str,
}

impl FinalDecisionView {
    pub fn badge_class(&self) -> &'static str {
        match self.badge_style {
            Style::Admit => "decision-badge badge-admit",
            Style::Discharge => "decision-badge badge-discharge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteView {
    pub agent: AgentKey,
    pub label: String,
    pub style: Style,
    /// Verbatim; inserted as plain text, never interpreted as markup.
    pub reason: String,
}

impl VoteView {
    pub fn vote_class(&self) -> &'static str {
        match self.style {
            Style::Admit => "agent-vote vote-admit",
            Style::Discharge => "agent-vote vote-discharge",
        }
    }

    /// Id of the element holding the vote label, e.g. `safetyVote`.
    pub fn vote_element_id(&self) -> String {
        format!("{}Vote", self.agent)
    }

    /// Id of the element holding the reason text, e.g. `safetyReason`.
    pub fn reason_element_id(&self) -> String {
        format!("{}Reason", self.agent)
    }
}

/// Map a decision response onto presentation state.
pub fn render(response: &DecisionResponse) -> Presentation {
    Presentation {
        results_visible: true,
        final_decision: render_final_decision(response),
        votes: AgentKey::ALL.map(|agent| render_vote(agent, response.votes.get(agent))),
    }
}

fn render_final_decision(response: &DecisionResponse) -> FinalDecisionView {
    let verdict = Verdict::of_final_decision(&response.final_decision);
    let badge_style = Style::from(&verdict);
    let card_accent = match badge_style {
        Style::Admit => ACCENT_ADMIT,
        Style::Discharge => ACCENT_DISCHARGE,
    };
    FinalDecisionView {
        badge_label: response.final_decision.to_uppercase(),
        badge_style,
        reason: response.reason.clone(),
        source: response.source.clone(),
        card_accent,
    }
}

/// Render one agent slot. Label text and style are decoupled: an
/// unclassified vote keeps its own text but takes the discharge styling.
pub fn render_vote(agent: AgentKey, vote: &Vote) -> VoteView {
    let verdict = Verdict::of_vote(vote.decision.as_deref());
    VoteView {
        agent,
        label: verdict.vote_label().to_string(),
        style: Style::from(&verdict),
        reason: vote.reason_text().to_string(),
    }
}
