use serde::{Deserialize, Serialize};

use super::category::ScoreCategory;
use super::dependency::CountryDependency;
use super::metrics::SovereigntyMetrics;
use super::recommendation::Recommendation;
use crate::logic::{
    calculate_tsi, check_sovereign_prison, generate_diagnosis, generate_recommendations,
};

/// Author-supplied country data before any derived field is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    pub id: String,
    pub name: String,
    pub code: String, // ISO 3166-1 alpha-3
    pub region: String,
    pub metrics: SovereigntyMetrics,
    #[serde(default)]
    pub dependencies: Vec<CountryDependency>,
    #[serde(default)]
    pub last_updated: String,
}

impl CountryProfile {
    pub fn new(id: &str, name: &str, code: &str, region: &str, metrics: SovereigntyMetrics) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            region: region.to_string(),
            metrics,
            dependencies: Vec::new(),
            last_updated: String::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: CountryDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// Scored country. Derived fields are computed once on construction; to
/// change the metrics, build a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CountryProfile")]
pub struct CountryRecord {
    id: String,
    name: String,
    code: String,
    region: String,
    metrics: SovereigntyMetrics,
    overall_score: u32,
    is_sovereign_prison: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sovereign_prison_reason: Option<String>,
    dependencies: Vec<CountryDependency>,
    diagnosis: String,
    recommendations: Vec<Recommendation>,
    last_updated: String,
}

impl CountryRecord {
    pub fn new(profile: CountryProfile) -> Self {
        let metrics = profile.metrics;
        let prison = check_sovereign_prison(&metrics);

        Self {
            id: profile.id,
            name: profile.name,
            code: profile.code,
            region: profile.region,
            metrics,
            overall_score: calculate_tsi(&metrics),
            is_sovereign_prison: prison.is,
            sovereign_prison_reason: prison.reason.map(str::to_string),
            dependencies: profile.dependencies,
            diagnosis: generate_diagnosis(&metrics).to_string(),
            recommendations: generate_recommendations(&metrics),
            last_updated: profile.last_updated,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn metrics(&self) -> &SovereigntyMetrics {
        &self.metrics
    }

    pub fn overall_score(&self) -> u32 {
        self.overall_score
    }

    pub fn category(&self) -> ScoreCategory {
        ScoreCategory::of(self.overall_score)
    }

    pub fn is_sovereign_prison(&self) -> bool {
        self.is_sovereign_prison
    }

    pub fn sovereign_prison_reason(&self) -> Option<&str> {
        self.sovereign_prison_reason.as_deref()
    }

    pub fn dependencies(&self) -> &[CountryDependency] {
        &self.dependencies
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }
}

impl From<CountryProfile> for CountryRecord {
    fn from(profile: CountryProfile) -> Self {
        CountryRecord::new(profile)
    }
}
