use serde::{Deserialize, Serialize};

use crate::constants::MAX_METRIC_VALUE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialFoundationMetrics {
    pub energy_sovereignty: u8,       // Clean energy capacity for data centers
    pub critical_minerals_access: u8, // Control over lithium, cobalt, rare earths
    pub urban_mining_capacity: u8,    // E-waste recovery capability
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeInfrastructureMetrics {
    pub chip_independence: u8,    // Domestic fab vs design ratio
    pub cloud_autonomy: u8,       // Share of workloads on domestic clouds
    pub connectivity_control: u8, // Subsea cable and 5G ownership
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveLayerMetrics {
    pub model_sovereignty: u8,    // Indigenous foundation models
    pub workforce_capability: u8, // Elite STEM talent availability
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionalShieldMetrics {
    pub legal_immunization: u8,     // Protection from extraterritorial laws
    pub enforcement_capability: u8, // Ability to regulate foreign tech
}

/// Author-supplied sub-metrics for one country, grouped by layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SovereigntyMetrics {
    pub material_foundation: MaterialFoundationMetrics,
    pub compute_infrastructure: ComputeInfrastructureMetrics,
    pub cognitive_layer: CognitiveLayerMetrics,
    pub jurisdictional_shield: JurisdictionalShieldMetrics,
}

impl SovereigntyMetrics {
    /// Names of sub-metrics above 100. Values are never clamped; callers
    /// only use this to report suspicious input.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let m = &self.material_foundation;
        let c = &self.compute_infrastructure;
        let g = &self.cognitive_layer;
        let j = &self.jurisdictional_shield;
        [
            ("energySovereignty", m.energy_sovereignty),
            ("criticalMineralsAccess", m.critical_minerals_access),
            ("urbanMiningCapacity", m.urban_mining_capacity),
            ("chipIndependence", c.chip_independence),
            ("cloudAutonomy", c.cloud_autonomy),
            ("connectivityControl", c.connectivity_control),
            ("modelSovereignty", g.model_sovereignty),
            ("workforceCapability", g.workforce_capability),
            ("legalImmunization", j.legal_immunization),
            ("enforcementCapability", j.enforcement_capability),
        ]
        .into_iter()
        .filter(|(_, value)| *value > MAX_METRIC_VALUE)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Unrounded per-layer scores derived from a [`SovereigntyMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerScores {
    pub material: f64,
    pub compute: f64,
    pub cognitive: f64,
    pub jurisdictional: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerBreakdownEntry {
    pub key: String,
    pub name: String,
    pub weight_percent: u32,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "materialFoundation": {"energySovereignty": 72, "criticalMineralsAccess": 35, "urbanMiningCapacity": 45},
            "computeInfrastructure": {"chipIndependence": 25, "cloudAutonomy": 95, "connectivityControl": 85},
            "cognitiveLayer": {"modelSovereignty": 95, "workforceCapability": 88},
            "jurisdictionalShield": {"legalImmunization": 40, "enforcementCapability": 90}
        }"#;
        let metrics: SovereigntyMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.material_foundation.energy_sovereignty, 72);
        assert_eq!(metrics.compute_infrastructure.cloud_autonomy, 95);
        assert_eq!(metrics.jurisdictional_shield.enforcement_capability, 90);
    }

    #[test]
    fn reports_values_above_one_hundred() {
        let mut metrics = SovereigntyMetrics::default();
        assert!(metrics.out_of_range().is_empty());

        metrics.compute_infrastructure.cloud_autonomy = 120;
        metrics.cognitive_layer.model_sovereignty = 100;
        assert_eq!(metrics.out_of_range(), vec!["cloudAutonomy"]);
    }
}
