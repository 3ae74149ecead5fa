use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationCategory {
    Procurement,
    TechStack,
    Capital,
    Reshoring,
    Resources,
    Workforce,
    Leverage,
    Dpi,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    /// Sort rank, lower comes first
    pub fn rank(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_impact: u32, // Expected TSI improvement
}

/// Fixed recommendation text attached to a trigger rule
#[derive(Debug, Clone, Copy)]
pub struct RecommendationTemplate {
    pub category: RecommendationCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub estimated_impact: u32,
}

impl From<&RecommendationTemplate> for Recommendation {
    fn from(template: &RecommendationTemplate) -> Self {
        Self {
            category: template.category,
            title: template.title.to_string(),
            description: template.description.to_string(),
            priority: template.priority,
            estimated_impact: template.estimated_impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ranks_follow_severity() {
        assert_eq!(Priority::Critical.rank(), 0);
        assert_eq!(Priority::High.rank(), 1);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 3);
    }

    #[test]
    fn category_tags_are_camel_case() {
        assert_eq!(
            serde_json::to_string(&RecommendationCategory::TechStack).unwrap(),
            "\"techStack\""
        );
        assert_eq!(serde_json::to_string(&RecommendationCategory::Dpi).unwrap(), "\"dpi\"");
    }
}
