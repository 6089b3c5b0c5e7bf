//! Core of the SMARTriage client: wire types, intake parsing, verdict
//! classification and the pure results renderer.

pub mod intake;
pub mod model;
pub mod render;
pub mod verdict;

pub use intake::{IntakeForm, parse_esi};
pub use model::{AgentKey, DecisionResponse, TriageRequest, Vote, Votes};
pub use render::{FinalDecisionView, Presentation, VoteView, render};
pub use verdict::{Style, Verdict};
