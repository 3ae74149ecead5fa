//! Diagnosis cascade mapping layer-score patterns to one label

use crate::types::{LayerScores, SovereigntyMetrics};

pub const EMERGING_TSI_CEILING: u32 = 35;

pub const DEFAULT_DIAGNOSIS: &str = "Balanced Development, Optimization Opportunities";

struct DiagnosisRule {
    matches: fn(&LayerScores) -> bool,
    label: &'static str,
}

// Order matters: the first matching pattern names the country
const DIAGNOSIS_RULES: &[DiagnosisRule] = &[
    // High regulation, low infrastructure
    DiagnosisRule {
        matches: |s: &LayerScores| s.jurisdictional > 65.0 && s.compute < 45.0,
        label: "Regulatory Superpower, Technological Vassal",
    },
    // High innovation, supply chain risk
    DiagnosisRule {
        matches: |s: &LayerScores| s.compute > 60.0 && s.material < 50.0,
        label: "Innovation Leader, Manufacturing Fragility",
    },
    DiagnosisRule {
        matches: |s: &LayerScores| s.compute > 55.0 && s.jurisdictional > 70.0 && s.material > 60.0,
        label: "Sovereign Fortress, Global Isolation Risk",
    },
    DiagnosisRule {
        matches: |s: &LayerScores| s.cognitive > 45.0 && s.compute > 35.0 && s.compute < 60.0,
        label: "Rising Capability, Strategic Non-Alignment",
    },
    // Manufacturing hub, geopolitical risk
    DiagnosisRule {
        matches: |s: &LayerScores| s.compute > 75.0 && s.jurisdictional < 50.0,
        label: "Manufacturing Powerhouse, Geopolitical Exposure",
    },
    DiagnosisRule {
        matches: |s: &LayerScores| s.tsi() < EMERGING_TSI_CEILING,
        label: "Emerging Digital Economy, Infrastructure Development Phase",
    },
];

pub fn generate_diagnosis(metrics: &SovereigntyMetrics) -> &'static str {
    let scores = LayerScores::from_metrics(metrics);
    DIAGNOSIS_RULES
        .iter()
        .find(|rule| (rule.matches)(&scores))
        .map_or(DEFAULT_DIAGNOSIS, |rule| rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layers::tests::uniform_metrics;

    #[test]
    fn regulatory_superpower() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(50, 30, 50, 70)),
            "Regulatory Superpower, Technological Vassal"
        );
    }

    #[test]
    fn innovation_leader() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(45, 65, 80, 60)),
            "Innovation Leader, Manufacturing Fragility"
        );
    }

    #[test]
    fn sovereign_fortress() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(70, 58, 70, 90)),
            "Sovereign Fortress, Global Isolation Risk"
        );
    }

    #[test]
    fn rising_capability() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(50, 45, 55, 50)),
            "Rising Capability, Strategic Non-Alignment"
        );
    }

    #[test]
    fn manufacturing_powerhouse() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(55, 80, 40, 45)),
            "Manufacturing Powerhouse, Geopolitical Exposure"
        );
    }

    #[test]
    fn emerging_digital_economy() {
        assert_eq!(
            generate_diagnosis(&uniform_metrics(30, 20, 30, 30)),
            "Emerging Digital Economy, Infrastructure Development Phase"
        );
    }

    #[test]
    fn falls_back_to_balanced_development() {
        assert_eq!(generate_diagnosis(&uniform_metrics(60, 70, 40, 60)), DEFAULT_DIAGNOSIS);
    }

    #[test]
    fn earlier_rule_shadows_later_match() {
        // Matches both the regulatory and the emerging-economy patterns
        let metrics = uniform_metrics(10, 10, 10, 80);
        assert_eq!(
            generate_diagnosis(&metrics),
            "Regulatory Superpower, Technological Vassal"
        );
    }
}
