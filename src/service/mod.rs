mod assessment;

pub use assessment::{assess, Assessment};

use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::constants::{DEFAULT_TOP_COUNTRIES, REGIONAL_PEER_LIMIT};
use crate::data::{default_scenarios, Catalog, CatalogSummary};
use crate::dependency::{elapsed_ms, performance_now};
use crate::error::{EngineError, Result};
use crate::logic::{
    category_of, check_vendor_compliance, compliance_rate, filter_vendors, summarize_simulation,
};
use crate::types::{
    CountryProfile, CountryRecord, DecouplingScenario, SimulationResult, SimulationSummary,
    SovereigntyMetrics, Vendor, VendorCompliance, VendorFilter,
};

#[wasm_bindgen]
pub struct SovereigntyEngine {
    catalog: Catalog,
    last_simulation_duration_ms: f64,
    last_simulation_summary: SimulationSummary,
}

#[wasm_bindgen]
impl SovereigntyEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut catalog = Catalog::default();
        if let Err(err) = catalog.set_scenarios(default_scenarios()) {
            warn!(%err, "Built-in scenarios rejected, starting without scenarios");
        }
        Self {
            catalog,
            last_simulation_duration_ms: 0.0,
            last_simulation_summary: SimulationSummary::default(),
        }
    }

    #[wasm_bindgen]
    pub fn load_countries(&mut self, countries: JsValue) -> std::result::Result<usize, JsValue> {
        let profiles: Vec<CountryProfile> = from_js(countries)?;
        Ok(self.set_countries(profiles))
    }

    #[wasm_bindgen]
    pub fn load_scenarios(&mut self, scenarios: JsValue) -> std::result::Result<usize, JsValue> {
        let scenarios: Vec<DecouplingScenario> = from_js(scenarios)?;
        self.set_scenarios(scenarios).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn load_vendors(&mut self, vendors: JsValue) -> std::result::Result<usize, JsValue> {
        let vendors: Vec<Vendor> = from_js(vendors)?;
        Ok(self.set_vendors(vendors))
    }

    #[wasm_bindgen]
    pub fn assess(&self, metrics: JsValue) -> std::result::Result<JsValue, JsValue> {
        let metrics: SovereigntyMetrics = from_js(metrics)?;
        to_js(&assess(&metrics))
    }

    #[wasm_bindgen]
    pub fn get_country(&self, code: &str) -> std::result::Result<JsValue, JsValue> {
        let country = self.catalog.country_by_code(code).map_err(to_js_error)?;
        to_js(country)
    }

    #[wasm_bindgen]
    pub fn get_countries(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.catalog.countries()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_scenarios(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.catalog.scenarios()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_top_countries(&self, limit: Option<usize>) -> JsValue {
        let top = self
            .catalog
            .top_countries(limit.unwrap_or(DEFAULT_TOP_COUNTRIES));
        serde_wasm_bindgen::to_value(&top).unwrap_or(JsValue::NULL)
    }

    /// Same-region countries of `code`, at most `limit` (4 when omitted)
    #[wasm_bindgen]
    pub fn get_regional_peers(
        &self,
        code: &str,
        limit: Option<usize>,
    ) -> std::result::Result<JsValue, JsValue> {
        let peers = self.regional_peers(code, limit).map_err(to_js_error)?;
        to_js(&peers)
    }

    #[wasm_bindgen]
    pub fn search_countries(&self, query: &str, region: Option<String>) -> JsValue {
        let matches = self.catalog.search(query, region.as_deref());
        serde_wasm_bindgen::to_value(&matches).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_regions(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.catalog.regions()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_sovereign_prisons(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.catalog.sovereign_prisons()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.summary()).unwrap_or(JsValue::NULL)
    }

    /// Results for the given country ids (all countries when empty or
    /// undefined), most impacted first
    #[wasm_bindgen]
    pub fn simulate(
        &mut self,
        scenario_id: &str,
        country_ids: JsValue,
    ) -> std::result::Result<JsValue, JsValue> {
        let country_ids: Vec<String> = if country_ids.is_undefined() || country_ids.is_null() {
            Vec::new()
        } else {
            from_js(country_ids)?
        };
        let results = self.run_simulation(scenario_id, &country_ids).map_err(to_js_error)?;
        to_js(&results)
    }

    #[wasm_bindgen]
    pub fn filter_vendors(&self, filter: JsValue) -> std::result::Result<JsValue, JsValue> {
        let filter: VendorFilter = if filter.is_undefined() || filter.is_null() {
            VendorFilter::default()
        } else {
            from_js(filter)?
        };
        to_js(&filter_vendors(self.catalog.vendors(), &filter))
    }

    #[wasm_bindgen]
    pub fn check_vendor_compliance(&self, vendor_id: &str) -> std::result::Result<JsValue, JsValue> {
        let compliance = self.vendor_compliance(vendor_id).map_err(to_js_error)?;
        to_js(&compliance)
    }

    #[wasm_bindgen]
    pub fn get_compliance_rate(&self) -> u32 {
        compliance_rate(self.catalog.vendors())
    }

    /// Overall scores in catalog order, for map colouring
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn get_flat_scores(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(self.flat_scores().as_slice())
    }

    #[wasm_bindgen]
    pub fn get_last_simulation_duration(&self) -> f64 {
        self.last_simulation_duration_ms
    }

    /// Headline figures of the most recent `simulate` call
    #[wasm_bindgen]
    pub fn get_last_simulation_summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.last_simulation_summary).unwrap_or(JsValue::NULL)
    }
}

impl SovereigntyEngine {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_countries(&mut self, profiles: Vec<CountryProfile>) -> usize {
        self.catalog = std::mem::take(&mut self.catalog).with_countries(profiles);
        self.catalog.countries().len()
    }

    /// Leaves the current scenarios in place when validation fails
    pub fn set_scenarios(&mut self, scenarios: Vec<DecouplingScenario>) -> Result<usize> {
        self.catalog.set_scenarios(scenarios)?;
        Ok(self.catalog.scenarios().len())
    }

    pub fn set_vendors(&mut self, vendors: Vec<Vendor>) -> usize {
        self.catalog = std::mem::take(&mut self.catalog).with_vendors(vendors);
        self.catalog.vendors().len()
    }

    pub fn summary(&self) -> CatalogSummary {
        self.catalog.summary()
    }

    pub fn regional_peers(&self, code: &str, limit: Option<usize>) -> Result<Vec<&CountryRecord>> {
        let country = self.catalog.country_by_code(code)?;
        Ok(self
            .catalog
            .regional_peers(country, limit.unwrap_or(REGIONAL_PEER_LIMIT)))
    }

    pub fn vendor_compliance(&self, vendor_id: &str) -> Result<VendorCompliance> {
        self.catalog.vendor(vendor_id).map(check_vendor_compliance)
    }

    pub fn last_simulation_summary(&self) -> SimulationSummary {
        self.last_simulation_summary
    }

    pub fn run_simulation(
        &mut self,
        scenario_id: &str,
        country_ids: &[String],
    ) -> Result<Vec<SimulationResult>> {
        let start = performance_now();
        let results = self.catalog.run_simulation(scenario_id, country_ids)?;
        if let Some(duration) = elapsed_ms(start, performance_now()) {
            self.last_simulation_duration_ms = duration;
        }
        self.last_simulation_summary = summarize_simulation(&results);

        debug!(
            scenario = scenario_id,
            results = results.len(),
            duration_ms = self.last_simulation_duration_ms,
            "Simulation finished"
        );
        Ok(results)
    }

    pub fn flat_scores(&self) -> Vec<f64> {
        self.catalog
            .countries()
            .iter()
            .map(|country| f64::from(country.overall_score()))
            .collect()
    }
}

impl Default for SovereigntyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_name = categoryOf)]
pub fn category_label(score: u32) -> String {
    category_of(score).as_str().to_string()
}

#[wasm_bindgen(js_name = categoryColor)]
pub fn category_color(score: u32) -> String {
    category_of(score).color().to_string()
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> std::result::Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(EngineError::from)
        .map_err(to_js_error)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(EngineError::from)
        .map_err(to_js_error)
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
