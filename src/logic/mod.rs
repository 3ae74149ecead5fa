// Pure scoring engine: no I/O, no shared state

pub mod diagnosis;
pub mod layers;
pub mod prison;
pub mod procurement;
pub mod recommendations;
pub mod simulation;

pub use diagnosis::generate_diagnosis;
pub use layers::{
    calculate_cognitive_layer_score, calculate_compute_infrastructure_score,
    calculate_jurisdictional_shield_score, calculate_material_foundation_score, calculate_tsi,
    layer_breakdown, round_half_up,
};
pub use prison::{check_sovereign_prison, PrisonCheck};
pub use procurement::{check_vendor_compliance, compliance_rate, filter_vendors};
pub use recommendations::generate_recommendations;
pub use simulation::{
    average_vulnerability, calculate_decoupling_impact, critical_vulnerabilities, sector_vulnerability,
    simulate, simulate_batch, summarize_simulation,
};

use crate::types::ScoreCategory;

pub fn category_of(score: u32) -> ScoreCategory {
    ScoreCategory::of(score)
}
