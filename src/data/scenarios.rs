use crate::types::{DecouplingScenario, Sector};

fn scenario(
    id: &str,
    name: &str,
    description: &str,
    affected_sectors: &[Sector],
    source_country: &str,
    impact_multiplier: f64,
) -> DecouplingScenario {
    DecouplingScenario {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        affected_sectors: affected_sectors.to_vec(),
        source_country: source_country.to_string(),
        impact_multiplier,
    }
}

/// Reference decoupling scenarios shipped with the engine
pub fn default_scenarios() -> Vec<DecouplingScenario> {
    vec![
        scenario(
            "taiwan-strait",
            "Taiwan Strait Crisis",
            "Complete disruption of Taiwanese semiconductor exports due to military conflict or blockade.",
            &[Sector::Chips],
            "TWN",
            1.5,
        ),
        scenario(
            "china-gallium-ban",
            "China Gallium Export Ban",
            "China restricts export of gallium and germanium, critical for semiconductor manufacturing.",
            &[Sector::Chips, Sector::Minerals],
            "CHN",
            1.2,
        ),
        scenario(
            "us-cloud-act",
            "US CLOUD Act Enforcement",
            "Aggressive enforcement of US CLOUD Act extraterritorial data access provisions.",
            &[Sector::Cloud, Sector::Ai],
            "USA",
            1.0,
        ),
        scenario(
            "rare-earth-shock",
            "Global Rare Earth Shortage",
            "Major disruption to rare earth supply chains affecting battery and electronics production.",
            &[Sector::Minerals, Sector::Chips],
            "CHN",
            1.3,
        ),
        scenario(
            "submarine-cable-cut",
            "Submarine Cable Disruption",
            "Critical undersea internet cables damaged or sabotaged, affecting connectivity.",
            &[Sector::Cables, Sector::Cloud],
            "Global",
            1.1,
        ),
        scenario(
            "ai-model-restriction",
            "US AI Export Controls",
            "Expansion of US export controls to restrict access to advanced AI models and chips.",
            &[Sector::Ai, Sector::Chips],
            "USA",
            1.2,
        ),
        scenario(
            "energy-crisis",
            "Global Energy Supply Shock",
            "Major energy supply disruption affecting data center operations worldwide.",
            &[Sector::Energy, Sector::Cloud],
            "Global",
            1.4,
        ),
    ]
}
