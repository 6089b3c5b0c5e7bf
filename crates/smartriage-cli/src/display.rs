//! Vertical card display for a triage decision.
//!
//! Renders a [`Presentation`] as a terminal results panel: the final
//! decision section, then one row per agent. Style buckets are shown as
//! `[admit]` / `[discharge]` tags in place of CSS classes.

use std::fmt;

use smartriage_core::{Presentation, Style};

const LABEL_WIDTH: usize = 20;

/// The results panel as a vertical card, printable with `{}`.
pub struct Card<'a>(pub &'a Presentation);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fd = &self.0.final_decision;

        writeln!(f, "=== {} {} ===", fd.badge_label, style_tag(fd.badge_style))?;
        writeln!(f, "  {:<w$} {}", "reason", fd.reason, w = LABEL_WIDTH)?;
        writeln!(f, "  {:<w$} {}", "source", fd.source, w = LABEL_WIDTH)?;
        writeln!(f)?;

        writeln!(f, "Agent Votes")?;
        for vote in &self.0.votes {
            writeln!(
                f,
                "  {:<w$} {} {}",
                vote.agent.title(),
                vote.label,
                style_tag(vote.style),
                w = LABEL_WIDTH
            )?;
            for line in vote.reason.lines() {
                writeln!(f, "      {line}")?;
            }
        }
        Ok(())
    }
}

fn style_tag(style: Style) -> &'static str {
    match style {
        Style::Admit => "[admit]",
        Style::Discharge => "[discharge]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartriage_core::{DecisionResponse, Vote, Votes, render};

    fn vote(decision: &str, reason: &str) -> Vote {
        Vote {
            decision: Some(decision.into()),
            reason: Some(reason.into()),
        }
    }

    fn sample() -> Presentation {
        render(&DecisionResponse {
            final_decision: "Discharge".into(),
            reason: "stable vitals".into(),
            source: "DischargeOfficer".into(),
            votes: Votes {
                safety: vote("Discharge", "No critical keywords"),
                pathology: vote("Admit", "possible sepsis\nlactate pending"),
                discharge: vote("", ""),
                geriatric: vote("pending review", "awaiting family"),
            },
        })
    }

    #[test]
    fn header_shows_uppercased_badge() {
        let text = Card(&sample()).to_string();
        assert!(text.starts_with("=== DISCHARGE [discharge] ==="));
        assert!(text.contains("stable vitals"));
        assert!(text.contains("DischargeOfficer"));
    }

    #[test]
    fn agent_rows_in_order_with_tags() {
        let text = Card(&sample()).to_string();
        let safety = text.find("Safety").unwrap();
        let pathology = text.find("Pathology").unwrap();
        let officer = text.find("Discharge Officer").unwrap();
        let geriatric = text.find("Geriatric").unwrap();
        assert!(safety < pathology && pathology < officer && officer < geriatric);

        assert!(text.contains("ADMIT [admit]"));
        assert!(text.contains("Uncertain [discharge]"));
        assert!(text.contains("pending review [discharge]"));
    }

    #[test]
    fn multiline_reason_is_untruncated() {
        let text = Card(&sample()).to_string();
        assert!(text.contains("      possible sepsis\n      lactate pending\n"));
    }
}
