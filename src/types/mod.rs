pub mod category;
pub mod country;
pub mod dependency;
pub mod metrics;
pub mod recommendation;
pub mod scenario;
pub mod vendor;

pub use category::ScoreCategory;
pub use country::{CountryProfile, CountryRecord};
pub use dependency::{CountryDependency, Sector};
pub use metrics::{
    CognitiveLayerMetrics, ComputeInfrastructureMetrics, JurisdictionalShieldMetrics,
    LayerBreakdownEntry, LayerScores, MaterialFoundationMetrics, SovereigntyMetrics,
};
pub use recommendation::{Priority, Recommendation, RecommendationCategory, RecommendationTemplate};
pub use scenario::{DecouplingImpact, DecouplingScenario, SimulationResult, SimulationSummary};
pub use vendor::{Vendor, VendorCategory, VendorCompliance, VendorFilter};
