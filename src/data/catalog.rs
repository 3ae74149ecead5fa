use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::scenarios::default_scenarios;
use crate::constants::{MAX_METRIC_VALUE, SOVEREIGN_MIN_SCORE};
use crate::error::{EngineError, Result};
use crate::logic::{round_half_up, simulate_batch};
use crate::types::{
    CountryProfile, CountryRecord, DecouplingScenario, SimulationResult, Vendor,
};

/// Headline figures over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub country_count: usize,
    pub average_score: u32,
    pub sovereign_count: usize,
    pub sovereign_prison_count: usize,
}

/// Read-only reference data the engine runs against. Insertion order is
/// display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<CountryRecord>,
    scenarios: Vec<DecouplingScenario>,
    vendors: Vec<Vendor>,
}

impl Catalog {
    pub fn new(
        profiles: Vec<CountryProfile>,
        scenarios: Vec<DecouplingScenario>,
        vendors: Vec<Vendor>,
    ) -> Result<Self> {
        Catalog::default()
            .with_countries(profiles)
            .with_scenarios(scenarios)
            .map(|catalog| catalog.with_vendors(vendors))
    }

    pub fn with_default_scenarios(profiles: Vec<CountryProfile>) -> Result<Self> {
        Catalog::new(profiles, default_scenarios(), Vec::new())
    }

    /// Builds a catalog from JSON arrays of country profiles, scenarios and vendors
    pub fn from_json(countries: &str, scenarios: &str, vendors: &str) -> Result<Self> {
        let profiles: Vec<CountryProfile> = serde_json::from_str(countries)?;
        let scenarios: Vec<DecouplingScenario> = serde_json::from_str(scenarios)?;
        let vendors: Vec<Vendor> = serde_json::from_str(vendors)?;
        Catalog::new(profiles, scenarios, vendors)
    }

    /// Replaces the countries, scoring every profile once
    pub fn with_countries(mut self, profiles: Vec<CountryProfile>) -> Self {
        for profile in &profiles {
            warn_out_of_range(profile);
        }
        self.countries = profiles.into_iter().map(CountryRecord::new).collect();
        info!(countries = self.countries.len(), "Loaded country catalog");
        self
    }

    pub fn with_scenarios(mut self, scenarios: Vec<DecouplingScenario>) -> Result<Self> {
        self.set_scenarios(scenarios)?;
        Ok(self)
    }

    /// Swaps in a validated scenario set. On error the current set is kept.
    pub fn set_scenarios(&mut self, scenarios: Vec<DecouplingScenario>) -> Result<()> {
        for scenario in &scenarios {
            validate_scenario(scenario)?;
        }
        self.scenarios = scenarios;
        info!(scenarios = self.scenarios.len(), "Loaded decoupling scenarios");
        Ok(())
    }

    pub fn with_vendors(mut self, vendors: Vec<Vendor>) -> Self {
        self.vendors = vendors;
        info!(vendors = self.vendors.len(), "Loaded vendor catalog");
        self
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn scenarios(&self) -> &[DecouplingScenario] {
        &self.scenarios
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Matches the exact code, or an id equal to the lowercased input
    pub fn country_by_code(&self, code: &str) -> Result<&CountryRecord> {
        let id = code.to_lowercase();
        self.countries
            .iter()
            .find(|country| country.code() == code || country.id() == id)
            .ok_or_else(|| EngineError::CountryNotFound(code.to_string()))
    }

    pub fn scenario(&self, id: &str) -> Result<&DecouplingScenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.id == id)
            .ok_or_else(|| EngineError::ScenarioNotFound(id.to_string()))
    }

    pub fn vendor(&self, id: &str) -> Result<&Vendor> {
        self.vendors
            .iter()
            .find(|vendor| vendor.id == id)
            .ok_or_else(|| EngineError::VendorNotFound(id.to_string()))
    }

    pub fn top_countries(&self, limit: usize) -> Vec<&CountryRecord> {
        let mut ranked: Vec<&CountryRecord> = self.countries.iter().collect();
        ranked.sort_by(|a, b| b.overall_score().cmp(&a.overall_score()));
        ranked.truncate(limit);
        ranked
    }

    pub fn bottom_countries(&self, limit: usize) -> Vec<&CountryRecord> {
        let mut ranked: Vec<&CountryRecord> = self.countries.iter().collect();
        ranked.sort_by_key(|country| country.overall_score());
        ranked.truncate(limit);
        ranked
    }

    pub fn sovereign_prisons(&self) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|country| country.is_sovereign_prison())
            .collect()
    }

    pub fn countries_by_region(&self, region: &str) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|country| country.region() == region)
            .collect()
    }

    /// Distinct regions, alphabetical
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.countries.iter().map(CountryRecord::region).collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    /// Name search with an optional region filter ("all" disables it), best score first
    pub fn search(&self, query: &str, region: Option<&str>) -> Vec<&CountryRecord> {
        let query = query.to_lowercase();
        let region = region.filter(|region| *region != "all");

        let mut matches: Vec<&CountryRecord> = self
            .countries
            .iter()
            .filter(|country| country.name().to_lowercase().contains(&query))
            .filter(|country| region.map_or(true, |region| country.region() == region))
            .collect();
        matches.sort_by(|a, b| b.overall_score().cmp(&a.overall_score()));
        matches
    }

    /// Other countries of the same region, in catalog order
    pub fn regional_peers(&self, country: &CountryRecord, limit: usize) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|other| other.id() != country.id() && other.region() == country.region())
            .take(limit)
            .collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        let country_count = self.countries.len();
        let total: u32 = self.countries.iter().map(CountryRecord::overall_score).sum();
        let average_score = if country_count == 0 {
            0
        } else {
            round_half_up(f64::from(total) / country_count as f64) as u32
        };

        CatalogSummary {
            country_count,
            average_score,
            sovereign_count: self
                .countries
                .iter()
                .filter(|country| country.overall_score() >= SOVEREIGN_MIN_SCORE)
                .count(),
            sovereign_prison_count: self.sovereign_prisons().len(),
        }
    }

    /// Simulates the listed countries (every country when the list is empty).
    /// Unknown ids are skipped.
    pub fn run_simulation(&self, scenario_id: &str, country_ids: &[String]) -> Result<Vec<SimulationResult>> {
        let scenario = self.scenario(scenario_id)?;

        let selected: Vec<&CountryRecord> = if country_ids.is_empty() {
            self.countries.iter().collect()
        } else {
            self.countries
                .iter()
                .filter(|country| country_ids.iter().any(|id| id == country.id()))
                .collect()
        };

        debug!(
            scenario = scenario_id,
            requested = country_ids.len(),
            simulated = selected.len(),
            "Running decoupling simulation"
        );
        Ok(simulate_batch(selected, scenario))
    }
}

fn validate_scenario(scenario: &DecouplingScenario) -> Result<()> {
    let invalid = |reason: &str| EngineError::InvalidScenario {
        id: scenario.id.clone(),
        reason: reason.to_string(),
    };

    if !scenario.impact_multiplier.is_finite() || scenario.impact_multiplier <= 0.0 {
        return Err(invalid("impact multiplier must be a positive number"));
    }
    if scenario.affected_sectors.is_empty() {
        return Err(invalid("no affected sectors"));
    }
    Ok(())
}

fn warn_out_of_range(profile: &CountryProfile) {
    let metrics = profile.metrics.out_of_range();
    if !metrics.is_empty() {
        warn!(country = %profile.id, ?metrics, "Sub-metrics above 100, scoring unclamped");
    }
    for dependency in &profile.dependencies {
        if dependency.dependency_level > MAX_METRIC_VALUE {
            warn!(
                country = %profile.id,
                sector = %dependency.sector,
                level = dependency.dependency_level,
                "Dependency level above 100"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layers::tests::uniform_metrics;
    use crate::types::{CountryDependency, Sector};

    fn profile(id: &str, name: &str, region: &str, level: u8) -> CountryProfile {
        CountryProfile::new(id, name, &id.to_uppercase(), region, uniform_metrics(level, level, level, level))
    }

    fn catalog() -> Catalog {
        let profiles = vec![
            profile("deu", "Germany", "Europe", 50),
            profile("usa", "United States", "North America", 85)
                .with_dependency(CountryDependency::new("Taiwan", "TWN", Sector::Chips, 92)),
            profile("fra", "France", "Europe", 55),
            profile("ken", "Kenya", "Africa", 15),
            profile("ita", "Italy", "Europe", 50),
        ];
        Catalog::with_default_scenarios(profiles).unwrap()
    }

    #[test]
    fn finds_country_by_code_or_id() {
        let catalog = catalog();
        assert_eq!(catalog.country_by_code("USA").unwrap().name(), "United States");
        assert_eq!(catalog.country_by_code("FRA").unwrap().id(), "fra");
        assert!(matches!(
            catalog.country_by_code("XXX"),
            Err(EngineError::CountryNotFound(code)) if code == "XXX"
        ));
    }

    #[test]
    fn missing_scenario_is_reported() {
        let catalog = catalog();
        assert!(catalog.scenario("taiwan-strait").is_ok());
        assert!(matches!(
            catalog.scenario("moon-landing"),
            Err(EngineError::ScenarioNotFound(_))
        ));
    }

    #[test]
    fn ranks_top_and_bottom_countries() {
        let catalog = catalog();
        let top: Vec<&str> = catalog.top_countries(3).iter().map(|c| c.id()).collect();
        assert_eq!(top, vec!["usa", "fra", "deu"]);

        let bottom: Vec<&str> = catalog.bottom_countries(2).iter().map(|c| c.id()).collect();
        assert_eq!(bottom, vec!["ken", "deu"]);
    }

    #[test]
    fn groups_by_region() {
        let catalog = catalog();
        assert_eq!(catalog.regions(), vec!["Africa", "Europe", "North America"]);
        assert_eq!(catalog.countries_by_region("Europe").len(), 3);

        let germany = catalog.country_by_code("DEU").unwrap();
        let peers: Vec<&str> = catalog.regional_peers(germany, 4).iter().map(|c| c.id()).collect();
        assert_eq!(peers, vec!["fra", "ita"]);
    }

    #[test]
    fn searches_names_within_region() {
        let catalog = catalog();
        let hits: Vec<&str> = catalog.search("a", Some("Europe")).iter().map(|c| c.id()).collect();
        assert_eq!(hits, vec!["fra", "deu", "ita"]);

        let hits: Vec<&str> = catalog.search("UNITED", Some("all")).iter().map(|c| c.id()).collect();
        assert_eq!(hits, vec!["usa"]);
        assert!(catalog.search("atlantis", None).is_empty());
    }

    #[test]
    fn summarizes_catalog() {
        let summary = catalog().summary();
        assert_eq!(summary.country_count, 5);
        // (50 + 85 + 55 + 15 + 50) / 5
        assert_eq!(summary.average_score, 51);
        assert_eq!(summary.sovereign_count, 1);
        assert_eq!(summary.sovereign_prison_count, 0);

        assert_eq!(Catalog::default().summary().average_score, 0);
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        let mut scenario = default_scenarios().remove(0);
        scenario.impact_multiplier = 0.0;
        let result = Catalog::new(Vec::new(), vec![scenario], Vec::new());
        assert!(matches!(result, Err(EngineError::InvalidScenario { .. })));
    }

    #[test]
    fn rejects_scenario_without_sectors() {
        let mut scenario = default_scenarios().remove(0);
        scenario.affected_sectors.clear();
        let result = Catalog::new(Vec::new(), vec![scenario], Vec::new());
        assert!(matches!(result, Err(EngineError::InvalidScenario { id, .. }) if id == "taiwan-strait"));
    }

    #[test]
    fn simulates_selected_countries_only() {
        let catalog = catalog();
        let results = catalog
            .run_simulation("taiwan-strait", &["usa".to_string(), "nowhere".to_string()])
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].country_id, "usa");
        // 92 * 1.5 * 0.3 = 41.4, capped at 40
        assert_eq!(results[0].impacted_score, 45);
        assert_eq!(results[0].critical_vulnerabilities, vec!["chips: 92% dependency on Taiwan"]);

        let all = catalog.run_simulation("taiwan-strait", &[]).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].country_id, "usa");
    }

    #[test]
    fn failed_scenario_swap_keeps_current_set() {
        let mut catalog = catalog();
        let mut broken = default_scenarios();
        broken[5].affected_sectors.clear();

        assert!(catalog.set_scenarios(broken).is_err());
        assert_eq!(catalog.scenarios().len(), 7);
        assert_eq!(catalog.countries().len(), 5);

        let single = default_scenarios().into_iter().take(1).collect();
        assert!(catalog.set_scenarios(single).is_ok());
        assert_eq!(catalog.scenarios().len(), 1);
    }
}
