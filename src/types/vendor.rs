use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorCategory {
    Cloud,
    Security,
    Ai,
    Infrastructure,
    Data,
    Identity,
}

/// Technology provider evaluated against sovereign procurement criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub headquarters: String,
    pub country_code: String,
    pub category: VendorCategory,
    #[serde(rename = "isEUHQ")]
    pub is_eu_hq: bool,
    pub foreign_control_free: bool,
    pub data_resident: bool,
    pub legally_immunized: bool,
    pub eu_stack_compliant: bool,
    pub description: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorFilter {
    pub query: String,
    pub category: Option<VendorCategory>,
    pub only_compliant: bool,
}

/// Per-vendor sovereignty check: 25 points per satisfied criterion and one
/// issue line per failed criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorCompliance {
    pub compliant: bool,
    pub issues: Vec<&'static str>,
    pub score: u32,
}
