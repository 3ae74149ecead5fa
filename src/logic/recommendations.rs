//! Recommendation generation
//!
//! Unlike the diagnosis cascade, every trigger is checked and all firing
//! triggers contribute. The collected list is ranked by priority, then by
//! descending impact, and cut to the top [`MAX_RECOMMENDATIONS`].

use crate::constants::MAX_RECOMMENDATIONS;
use crate::types::{
    LayerScores, Priority, Recommendation, RecommendationCategory as Category,
    RecommendationTemplate as Template, SovereigntyMetrics,
};

struct RecommendationTrigger {
    fires: fn(&SovereigntyMetrics, &LayerScores) -> bool,
    templates: &'static [Template],
}

const TRIGGERS: &[RecommendationTrigger] = &[
    // High jurisdiction, low infrastructure
    RecommendationTrigger {
        fires: |_: &SovereigntyMetrics, s: &LayerScores| s.jurisdictional > 60.0 && s.compute < 50.0,
        templates: &[
            Template {
                category: Category::Procurement,
                title: "Implement Sovereign Procurement Mandate",
                description: "Require public sector digital procurement to prioritize domestic vendors, \
                              redirecting capital to local technology providers.",
                priority: Priority::Critical,
                estimated_impact: 8,
            },
            Template {
                category: Category::TechStack,
                title: "Adopt Federated Cloud Architecture",
                description: "Shift from proprietary hyperscalers to open-source, federated cloud \
                              architectures to prevent vendor lock-in.",
                priority: Priority::High,
                estimated_impact: 6,
            },
            Template {
                category: Category::Capital,
                title: "Redirect Sovereign Tech Investment",
                description: "Direct funding toward native cloud providers rather than subsidizing \
                              foreign R&D through contracts.",
                priority: Priority::High,
                estimated_impact: 5,
            },
        ],
    },
    // Strong infrastructure over a fragile supply chain
    RecommendationTrigger {
        fires: |_: &SovereigntyMetrics, s: &LayerScores| s.compute > 55.0 && s.material < 55.0,
        templates: &[
            Template {
                category: Category::Reshoring,
                title: "Accelerate Semiconductor Reshoring",
                description: "Use tariffs and subsidies to force repatriation of semiconductor \
                              manufacturing capacity.",
                priority: Priority::Critical,
                estimated_impact: 10,
            },
            Template {
                category: Category::Resources,
                title: "Secure Critical Mineral Agreements",
                description: "Establish bilateral minerals deals to guarantee lithium and rare earth supplies.",
                priority: Priority::High,
                estimated_impact: 7,
            },
            Template {
                category: Category::Workforce,
                title: "Reform STEM Talent Retention",
                description: "Adjust immigration policies to retain global STEM talent and prevent brain drain.",
                priority: Priority::Medium,
                estimated_impact: 4,
            },
        ],
    },
    // Emerging digital power
    RecommendationTrigger {
        fires: |_: &SovereigntyMetrics, s: &LayerScores| s.cognitive > 40.0 && s.compute > 30.0 && s.compute < 60.0,
        templates: &[
            Template {
                category: Category::Leverage,
                title: "Exploit Geopolitical Arbitrage",
                description: "Leverage trade tensions to attract displaced manufacturing and supply chains.",
                priority: Priority::High,
                estimated_impact: 8,
            },
            Template {
                category: Category::Dpi,
                title: "Expand Digital Public Infrastructure",
                description: "Scale national digital infrastructure stack to reduce reliance on foreign \
                              payment and identity platforms.",
                priority: Priority::Critical,
                estimated_impact: 9,
            },
            Template {
                category: Category::Data,
                title: "Enforce Data Localization",
                description: "Implement data localization requirements to train indigenous AI models on \
                              local language and cultural data.",
                priority: Priority::High,
                estimated_impact: 6,
            },
        ],
    },
    RecommendationTrigger {
        fires: |_: &SovereigntyMetrics, s: &LayerScores| s.cognitive < 40.0,
        templates: &[Template {
            category: Category::Workforce,
            title: "Invest in AI Research Capacity",
            description: "Fund national AI research labs and university programs to build indigenous \
                          foundation model capability.",
            priority: Priority::High,
            estimated_impact: 7,
        }],
    },
    RecommendationTrigger {
        fires: |_: &SovereigntyMetrics, s: &LayerScores| s.material < 40.0,
        templates: &[Template {
            category: Category::Resources,
            title: "Diversify Critical Mineral Sources",
            description: "Establish multiple supplier relationships for lithium, cobalt, and rare earths \
                          to reduce single-source dependency.",
            priority: Priority::High,
            estimated_impact: 6,
        }],
    },
    // Raw sub-metric, not the layer score
    RecommendationTrigger {
        fires: |m: &SovereigntyMetrics, _: &LayerScores| m.compute_infrastructure.cloud_autonomy < 30,
        templates: &[Template {
            category: Category::TechStack,
            title: "Develop Sovereign Cloud Capacity",
            description: "Invest in domestic hyperscaler infrastructure to reduce reliance on foreign \
                          cloud providers.",
            priority: Priority::Critical,
            estimated_impact: 8,
        }],
    },
];

/// Top recommendations for the given metrics, at most [`MAX_RECOMMENDATIONS`]
pub fn generate_recommendations(metrics: &SovereigntyMetrics) -> Vec<Recommendation> {
    let scores = LayerScores::from_metrics(metrics);

    let mut recommendations: Vec<Recommendation> = TRIGGERS
        .iter()
        .filter(|trigger| (trigger.fires)(metrics, &scores))
        .flat_map(|trigger| trigger.templates.iter().map(Recommendation::from))
        .collect();

    // Stable: equal priority and impact keep trigger order
    recommendations.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| b.estimated_impact.cmp(&a.estimated_impact))
    });
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
