//! Layer scorers and the TSI aggregate

use crate::constants::*;
use crate::types::{
    CognitiveLayerMetrics, ComputeInfrastructureMetrics, JurisdictionalShieldMetrics,
    LayerBreakdownEntry, LayerScores, MaterialFoundationMetrics, SovereigntyMetrics,
};

pub fn calculate_material_foundation_score(metrics: &MaterialFoundationMetrics) -> f64 {
    f64::from(metrics.energy_sovereignty) * ENERGY_SOVEREIGNTY_WEIGHT
        + f64::from(metrics.critical_minerals_access) * CRITICAL_MINERALS_WEIGHT
        + f64::from(metrics.urban_mining_capacity) * URBAN_MINING_WEIGHT
}

pub fn calculate_compute_infrastructure_score(metrics: &ComputeInfrastructureMetrics) -> f64 {
    f64::from(metrics.chip_independence) * CHIP_INDEPENDENCE_WEIGHT
        + f64::from(metrics.cloud_autonomy) * CLOUD_AUTONOMY_WEIGHT
        + f64::from(metrics.connectivity_control) * CONNECTIVITY_CONTROL_WEIGHT
}

pub fn calculate_cognitive_layer_score(metrics: &CognitiveLayerMetrics) -> f64 {
    f64::from(metrics.model_sovereignty) * MODEL_SOVEREIGNTY_WEIGHT
        + f64::from(metrics.workforce_capability) * WORKFORCE_CAPABILITY_WEIGHT
}

pub fn calculate_jurisdictional_shield_score(metrics: &JurisdictionalShieldMetrics) -> f64 {
    f64::from(metrics.legal_immunization) * LEGAL_IMMUNIZATION_WEIGHT
        + f64::from(metrics.enforcement_capability) * ENFORCEMENT_CAPABILITY_WEIGHT
}

impl LayerScores {
    pub fn from_metrics(metrics: &SovereigntyMetrics) -> Self {
        Self {
            material: calculate_material_foundation_score(&metrics.material_foundation),
            compute: calculate_compute_infrastructure_score(&metrics.compute_infrastructure),
            cognitive: calculate_cognitive_layer_score(&metrics.cognitive_layer),
            jurisdictional: calculate_jurisdictional_shield_score(&metrics.jurisdictional_shield),
        }
    }

    /// Weighted sum before rounding
    pub fn weighted_total(&self) -> f64 {
        self.material * MATERIAL_FOUNDATION_WEIGHT
            + self.compute * COMPUTE_INFRASTRUCTURE_WEIGHT
            + self.cognitive * COGNITIVE_LAYER_WEIGHT
            + self.jurisdictional * JURISDICTIONAL_SHIELD_WEIGHT
    }

    pub fn tsi(&self) -> u32 {
        round_half_up(self.weighted_total()) as u32
    }
}

/// Tech Sovereignty Index, 0-100 for in-range metrics
pub fn calculate_tsi(metrics: &SovereigntyMetrics) -> u32 {
    LayerScores::from_metrics(metrics).tsi()
}

/// Nearest integer, halves go up (never banker's rounding)
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Per-layer display rows, in the fixed display order
pub fn layer_breakdown(metrics: &SovereigntyMetrics) -> Vec<LayerBreakdownEntry> {
    let scores = LayerScores::from_metrics(metrics);
    [
        ("materialFoundation", "Material Foundation", MATERIAL_FOUNDATION_WEIGHT, scores.material),
        ("computeInfrastructure", "Compute Infrastructure", COMPUTE_INFRASTRUCTURE_WEIGHT, scores.compute),
        ("cognitiveLayer", "Cognitive Layer", COGNITIVE_LAYER_WEIGHT, scores.cognitive),
        ("jurisdictionalShield", "Jurisdictional Shield", JURISDICTIONAL_SHIELD_WEIGHT, scores.jurisdictional),
    ]
    .into_iter()
    .map(|(key, name, weight, score)| LayerBreakdownEntry {
        key: key.to_string(),
        name: name.to_string(),
        weight_percent: round_half_up(weight * 100.0) as u32,
        score: round_half_up(score) as u32,
    })
    .collect()
}
