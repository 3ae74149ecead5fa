// Shared scoring constants

// Top-level layer weights (sum to 1.0)
pub const MATERIAL_FOUNDATION_WEIGHT: f64 = 0.30;
pub const COMPUTE_INFRASTRUCTURE_WEIGHT: f64 = 0.30;
pub const COGNITIVE_LAYER_WEIGHT: f64 = 0.20;
pub const JURISDICTIONAL_SHIELD_WEIGHT: f64 = 0.20;

// Material foundation sub-metric weights
pub const ENERGY_SOVEREIGNTY_WEIGHT: f64 = 0.40;
pub const CRITICAL_MINERALS_WEIGHT: f64 = 0.35;
pub const URBAN_MINING_WEIGHT: f64 = 0.25;

// Compute infrastructure sub-metric weights
pub const CHIP_INDEPENDENCE_WEIGHT: f64 = 0.45;
pub const CLOUD_AUTONOMY_WEIGHT: f64 = 0.35;
pub const CONNECTIVITY_CONTROL_WEIGHT: f64 = 0.20;

// Cognitive layer sub-metric weights
pub const MODEL_SOVEREIGNTY_WEIGHT: f64 = 0.55;
pub const WORKFORCE_CAPABILITY_WEIGHT: f64 = 0.45;

// Jurisdictional shield sub-metric weights
pub const LEGAL_IMMUNIZATION_WEIGHT: f64 = 0.50;
pub const ENFORCEMENT_CAPABILITY_WEIGHT: f64 = 0.50;

// Score category breakpoints (inclusive lower bounds)
pub const SOVEREIGN_MIN_SCORE: u32 = 80;
pub const RESILIENT_MIN_SCORE: u32 = 60;
pub const VULNERABLE_MIN_SCORE: u32 = 40;
pub const DEPENDENT_MIN_SCORE: u32 = 20;

// Decoupling impact factors and caps
pub const SCORE_IMPACT_FACTOR: f64 = 0.3;
pub const GDP_IMPACT_FACTOR: f64 = 0.05;
pub const UPTIME_IMPACT_FACTOR: f64 = 0.15;
pub const MAX_SCORE_IMPACT: u32 = 40; // TSI points
pub const MAX_GDP_IMPACT: f64 = 15.0; // percent
pub const MAX_UPTIME_IMPACT: f64 = 50.0; // percent

// Dependencies above this level are reported as critical vulnerabilities
pub const CRITICAL_DEPENDENCY_LEVEL: u8 = 70;

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const DEFAULT_TOP_COUNTRIES: usize = 10;
pub const REGIONAL_PEER_LIMIT: usize = 4;

// Points per satisfied vendor sovereignty criterion (four criteria, 100 = compliant)
pub const VENDOR_CRITERION_POINTS: u32 = 25;
pub const VENDOR_FULL_COMPLIANCE: u32 = 100;

// Upper bound of every sub-metric and dependency level
pub const MAX_METRIC_VALUE: u8 = 100;
