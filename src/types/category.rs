use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEPENDENT_MIN_SCORE, RESILIENT_MIN_SCORE, SOVEREIGN_MIN_SCORE, VULNERABLE_MIN_SCORE,
};

/// Qualitative band of a TSI score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Sovereign,
    Resilient,
    Vulnerable,
    Dependent,
    Critical,
}

impl ScoreCategory {
    /// First matching breakpoint, evaluated from the top down
    pub fn of(score: u32) -> Self {
        if score >= SOVEREIGN_MIN_SCORE {
            ScoreCategory::Sovereign
        } else if score >= RESILIENT_MIN_SCORE {
            ScoreCategory::Resilient
        } else if score >= VULNERABLE_MIN_SCORE {
            ScoreCategory::Vulnerable
        } else if score >= DEPENDENT_MIN_SCORE {
            ScoreCategory::Dependent
        } else {
            ScoreCategory::Critical
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreCategory::Sovereign => "#10B981",
            ScoreCategory::Resilient => "#3B82F6",
            ScoreCategory::Vulnerable => "#F59E0B",
            ScoreCategory::Dependent => "#F97316",
            ScoreCategory::Critical => "#EF4444",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreCategory::Sovereign => "sovereign",
            ScoreCategory::Resilient => "resilient",
            ScoreCategory::Vulnerable => "vulnerable",
            ScoreCategory::Dependent => "dependent",
            ScoreCategory::Critical => "critical",
        }
    }
}

impl From<u32> for ScoreCategory {
    fn from(score: u32) -> ScoreCategory {
        ScoreCategory::of(score)
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
