use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology sector a dependency or scenario refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Chips,
    Cloud,
    Minerals,
    Energy,
    Cables,
    Ai,
}

impl Sector {
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Chips => "chips",
            Sector::Cloud => "cloud",
            Sector::Minerals => "minerals",
            Sector::Energy => "energy",
            Sector::Cables => "cables",
            Sector::Ai => "ai",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One external reliance of a country on another country (or a global pool)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDependency {
    pub country: String,
    pub country_code: String,
    pub sector: Sector,
    pub dependency_level: u8, // 0-100
    #[serde(default)]
    pub description: String,
}

impl CountryDependency {
    pub fn new(country: &str, country_code: &str, sector: Sector, dependency_level: u8) -> Self {
        Self {
            country: country.to_string(),
            country_code: country_code.to_string(),
            sector,
            dependency_level,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}
