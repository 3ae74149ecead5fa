//! Tech Sovereignty Index engine.
//!
//! Scores countries across four weighted layers (material foundation,
//! compute infrastructure, cognitive layer, jurisdictional shield), flags
//! Sovereign Prisons, diagnoses each profile, recommends policies and
//! simulates geopolitical decoupling shocks. `service` exposes the engine
//! to JavaScript through wasm-bindgen; everything else is plain Rust.

pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use data::{default_scenarios, Catalog, CatalogSummary};
pub use error::{EngineError, Result};
pub use service::{assess, Assessment, SovereigntyEngine};
pub use types::{
    CountryDependency, CountryProfile, CountryRecord, DecouplingScenario, Recommendation,
    ScoreCategory, Sector, SimulationResult, SimulationSummary, SovereigntyMetrics, Vendor,
    VendorCompliance, VendorFilter,
};
