//! Sovereign Prison detection: strong legal shield over dependent technology

use serde::Serialize;

use crate::types::{LayerScores, SovereigntyMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrisonCheck {
    pub is: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

struct PrisonRule {
    applies: fn(&LayerScores) -> bool,
    reason: &'static str,
}

// Evaluated in order, first match wins
const PRISON_RULES: &[PrisonRule] = &[
    PrisonRule {
        applies: |s: &LayerScores| s.jurisdictional > 60.0 && s.compute < 40.0,
        reason: "Data legally stored locally but processed by foreign-owned closed-source technology. \
                 Vulnerable to kill switches and sanctions.",
    },
    PrisonRule {
        applies: |s: &LayerScores| s.jurisdictional > 60.0 && s.cognitive < 30.0,
        reason: "Strong data protection laws but reliant on foreign AI models. \
                 Cognitive sovereignty gap creates dependency despite legal frameworks.",
    },
];

pub fn check_sovereign_prison(metrics: &SovereigntyMetrics) -> PrisonCheck {
    let scores = LayerScores::from_metrics(metrics);
    PRISON_RULES
        .iter()
        .find(|rule| (rule.applies)(&scores))
        .map_or(PrisonCheck { is: false, reason: None }, |rule| PrisonCheck {
            is: true,
            reason: Some(rule.reason),
        })
}
