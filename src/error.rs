use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    #[error("Invalid scenario {id}: {reason}")]
    InvalidScenario { id: String, reason: String },

    #[error("Invalid payload: {0}")]
    Payload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_wasm_bindgen::Error> for EngineError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        EngineError::Payload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
