use serde::{Deserialize, Serialize};

use crate::logic::{
    calculate_tsi, check_sovereign_prison, generate_diagnosis, generate_recommendations,
    layer_breakdown,
};
use crate::types::{LayerBreakdownEntry, Recommendation, ScoreCategory, SovereigntyMetrics};

/// Everything the engine derives from one metrics set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub overall_score: u32,
    pub category: ScoreCategory,
    pub color: String,
    pub is_sovereign_prison: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sovereign_prison_reason: Option<String>,
    pub diagnosis: String,
    pub recommendations: Vec<Recommendation>,
    pub layers: Vec<LayerBreakdownEntry>,
}

pub fn assess(metrics: &SovereigntyMetrics) -> Assessment {
    let overall_score = calculate_tsi(metrics);
    let category = ScoreCategory::of(overall_score);
    let prison = check_sovereign_prison(metrics);

    Assessment {
        overall_score,
        category,
        color: category.color().to_string(),
        is_sovereign_prison: prison.is,
        sovereign_prison_reason: prison.reason.map(str::to_string),
        diagnosis: generate_diagnosis(metrics).to_string(),
        recommendations: generate_recommendations(metrics),
        layers: layer_breakdown(metrics),
    }
}
