use serde::{Deserialize, Serialize};

use super::dependency::Sector;

/// Hypothetical geopolitical shock hitting a set of technology sectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecouplingScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub affected_sectors: Vec<Sector>,
    pub source_country: String,
    pub impact_multiplier: f64,
}

impl DecouplingScenario {
    pub fn affects(&self, sector: Sector) -> bool {
        self.affected_sectors.contains(&sector)
    }
}

/// Raw degradation figures for one country under one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecouplingImpact {
    pub score_impact: u32,
    pub gdp_impact: f64,    // Percentage
    pub uptime_impact: f64, // Percentage
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub country_id: String,
    pub country_name: String,
    pub original_score: u32,
    pub impacted_score: u32,
    pub gdp_impact: f64,            // Percentage
    pub digital_uptime_impact: f64, // Percentage
    pub critical_vulnerabilities: Vec<String>,
}

impl SimulationResult {
    /// Points lost under the scenario
    pub fn score_drop(&self) -> u32 {
        self.original_score.saturating_sub(self.impacted_score)
    }
}

/// Headline figures over one batch of simulation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub countries_affected: usize,
    pub average_score_drop: u32,
    pub critical_vulnerability_count: usize,
}
