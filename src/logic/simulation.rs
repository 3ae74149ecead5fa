//! Decoupling impact simulation

use crate::constants::*;
use crate::logic::layers::round_half_up;
use crate::types::{
    CountryDependency, CountryRecord, DecouplingImpact, DecouplingScenario, Sector,
    SimulationResult, SimulationSummary,
};

/// Mean dependency level for one sector, 0 when the country has none there
pub fn sector_vulnerability(dependencies: &[CountryDependency], sector: Sector) -> f64 {
    let (sum, count) = dependencies
        .iter()
        .filter(|dep| dep.sector == sector)
        .fold((0.0, 0usize), |(sum, count), dep| {
            (sum + f64::from(dep.dependency_level), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Unweighted mean of the per-sector averages. Sectors without matching
/// dependencies count as 0; no sectors at all means no exposure.
pub fn average_vulnerability(dependencies: &[CountryDependency], affected_sectors: &[Sector]) -> f64 {
    if affected_sectors.is_empty() {
        return 0.0;
    }

    let total: f64 = affected_sectors
        .iter()
        .map(|&sector| sector_vulnerability(dependencies, sector))
        .sum();
    total / affected_sectors.len() as f64
}

/// A multiplier that is not a finite positive number yields no impact.
pub fn calculate_decoupling_impact(
    country: &CountryRecord,
    affected_sectors: &[Sector],
    impact_multiplier: f64,
) -> DecouplingImpact {
    if !impact_multiplier.is_finite() || impact_multiplier <= 0.0 {
        return DecouplingImpact {
            score_impact: 0,
            gdp_impact: 0.0,
            uptime_impact: 0.0,
        };
    }

    let vulnerability = average_vulnerability(country.dependencies(), affected_sectors);

    let score_impact = round_half_up(vulnerability * impact_multiplier * SCORE_IMPACT_FACTOR) as u32;
    let gdp_impact = vulnerability * impact_multiplier * GDP_IMPACT_FACTOR;
    let uptime_impact = vulnerability * impact_multiplier * UPTIME_IMPACT_FACTOR;

    DecouplingImpact {
        score_impact: score_impact.min(MAX_SCORE_IMPACT),
        gdp_impact: gdp_impact.min(MAX_GDP_IMPACT),
        uptime_impact: uptime_impact.min(MAX_UPTIME_IMPACT),
    }
}

/// "{sector}: {level}% dependency on {country}" for every heavy reliance the
/// scenario touches
pub fn critical_vulnerabilities(country: &CountryRecord, scenario: &DecouplingScenario) -> Vec<String> {
    country
        .dependencies()
        .iter()
        .filter(|dep| scenario.affects(dep.sector) && dep.dependency_level > CRITICAL_DEPENDENCY_LEVEL)
        .map(|dep| {
            format!(
                "{}: {}% dependency on {}",
                dep.sector, dep.dependency_level, dep.country
            )
        })
        .collect()
}

pub fn simulate(country: &CountryRecord, scenario: &DecouplingScenario) -> SimulationResult {
    let impact = calculate_decoupling_impact(
        country,
        &scenario.affected_sectors,
        scenario.impact_multiplier,
    );
    let original_score = country.overall_score();

    SimulationResult {
        country_id: country.id().to_string(),
        country_name: country.name().to_string(),
        original_score,
        impacted_score: original_score.saturating_sub(impact.score_impact),
        gdp_impact: impact.gdp_impact,
        digital_uptime_impact: impact.uptime_impact,
        critical_vulnerabilities: critical_vulnerabilities(country, scenario),
    }
}

/// Simulates every country, most impacted first. Ties keep input order.
pub fn simulate_batch<'a, I>(countries: I, scenario: &DecouplingScenario) -> Vec<SimulationResult>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let mut results: Vec<SimulationResult> = countries
        .into_iter()
        .map(|country| simulate(country, scenario))
        .collect();

    results.sort_by(|a, b| b.score_drop().cmp(&a.score_drop()));
    results
}

/// Affected-country count, mean score drop (half up) and total critical
/// vulnerabilities. An empty batch summarizes to zeros.
pub fn summarize_simulation(results: &[SimulationResult]) -> SimulationSummary {
    if results.is_empty() {
        return SimulationSummary::default();
    }

    let total_drop: u32 = results.iter().map(SimulationResult::score_drop).sum();
    SimulationSummary {
        countries_affected: results
            .iter()
            .filter(|result| result.original_score != result.impacted_score)
            .count(),
        average_score_drop: round_half_up(f64::from(total_drop) / results.len() as f64) as u32,
        critical_vulnerability_count: results
            .iter()
            .map(|result| result.critical_vulnerabilities.len())
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layers::tests::uniform_metrics;
    use crate::types::CountryProfile;
    use approx::assert_relative_eq;

    fn scenario(sectors: &[Sector], multiplier: f64) -> DecouplingScenario {
        DecouplingScenario {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            affected_sectors: sectors.to_vec(),
            source_country: "TWN".to_string(),
            impact_multiplier: multiplier,
        }
    }

    fn country(id: &str, score: u8, dependencies: &[(Sector, u8)]) -> CountryRecord {
        let mut profile = CountryProfile::new(id, id, id, "Test", uniform_metrics(score, score, score, score));
        for &(sector, level) in dependencies {
            profile = profile.with_dependency(CountryDependency::new("Taiwan", "TWN", sector, level));
        }
        CountryRecord::new(profile)
    }

    #[test]
    fn averages_within_sector_then_across_sectors() {
        let usa = country(
            "usa",
            60,
            &[(Sector::Chips, 92), (Sector::Minerals, 80), (Sector::Chips, 45), (Sector::Chips, 35)],
        );
        assert_relative_eq!(sector_vulnerability(usa.dependencies(), Sector::Chips), 57.333333333, epsilon = 1e-6);
        assert_eq!(sector_vulnerability(usa.dependencies(), Sector::Cloud), 0.0);

        let vulnerability = average_vulnerability(usa.dependencies(), &[Sector::Chips, Sector::Cloud]);
        assert_relative_eq!(vulnerability, 28.666666666, epsilon = 1e-6);
    }

    #[test]
    fn computes_uncapped_impact() {
        let target = country("t", 60, &[(Sector::Chips, 80)]);
        let impact = calculate_decoupling_impact(&target, &[Sector::Chips], 1.5);

        // 80 * 1.5 = 120
        assert_eq!(impact.score_impact, 36);
        assert_relative_eq!(impact.gdp_impact, 6.0, epsilon = 1e-9);
        assert_relative_eq!(impact.uptime_impact, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn clamps_impact_to_caps() {
        let target = country("t", 60, &[(Sector::Chips, 100), (Sector::Cloud, 100)]);
        let sectors = [Sector::Chips, Sector::Cloud];

        // 100 * 2.0 only saturates the score cap
        let impact = calculate_decoupling_impact(&target, &sectors, 2.0);
        assert_eq!(impact.score_impact, MAX_SCORE_IMPACT);
        assert_relative_eq!(impact.gdp_impact, 10.0, epsilon = 1e-9);
        assert_relative_eq!(impact.uptime_impact, 30.0, epsilon = 1e-9);

        let impact = calculate_decoupling_impact(&target, &sectors, 4.0);
        assert_eq!(impact.score_impact, MAX_SCORE_IMPACT);
        assert_eq!(impact.gdp_impact, MAX_GDP_IMPACT);
        assert_eq!(impact.uptime_impact, MAX_UPTIME_IMPACT);
    }

    #[test]
    fn no_matching_dependencies_means_no_impact() {
        let target = country("t", 60, &[(Sector::Energy, 90)]);
        let impact = calculate_decoupling_impact(&target, &[Sector::Chips], 1.5);
        assert_eq!(impact.score_impact, 0);
        assert_eq!(impact.gdp_impact, 0.0);

        let impact = calculate_decoupling_impact(&target, &[], 1.5);
        assert_eq!(impact.score_impact, 0);
        assert_eq!(impact.uptime_impact, 0.0);
    }

    #[test]
    fn impacted_score_floors_at_zero() {
        let weak = country("weak", 10, &[(Sector::Chips, 100)]);
        let result = simulate(&weak, &scenario(&[Sector::Chips], 2.0));
        assert_eq!(result.original_score, 10);
        assert_eq!(result.impacted_score, 0);
        assert_eq!(result.score_drop(), 10);
    }

    #[test]
    fn lists_only_heavy_dependencies_in_affected_sectors() {
        let target = country(
            "t",
            60,
            &[(Sector::Chips, 92), (Sector::Chips, 70), (Sector::Cloud, 95), (Sector::Chips, 71)],
        );
        let vulnerabilities = critical_vulnerabilities(&target, &scenario(&[Sector::Chips], 1.0));
        assert_eq!(
            vulnerabilities,
            vec![
                "chips: 92% dependency on Taiwan".to_string(),
                "chips: 71% dependency on Taiwan".to_string(),
            ]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let target = country("t", 55, &[(Sector::Chips, 63), (Sector::Minerals, 77)]);
        let shock = scenario(&[Sector::Chips, Sector::Minerals], 1.2);
        let first = simulate(&target, &shock);
        let second = simulate(&target, &shock);
        assert_eq!(first, second);
        assert_eq!(first.gdp_impact.to_bits(), second.gdp_impact.to_bits());
        assert_eq!(first.digital_uptime_impact.to_bits(), second.digital_uptime_impact.to_bits());
    }

    #[test]
    fn batch_orders_by_largest_drop() {
        // Multiplier 1.0 on chips: drop = round(level * 0.3)
        let small = country("small", 60, &[(Sector::Chips, 17)]); // 5.1 -> 5
        let large = country("large", 60, &[(Sector::Chips, 67)]); // 20.1 -> 20
        let medium = country("medium", 60, &[(Sector::Chips, 33)]); // 9.9 -> 10
        let shock = scenario(&[Sector::Chips], 1.0);

        let results = simulate_batch([&small, &large, &medium], &shock);
        let order: Vec<&str> = results.iter().map(|r| r.country_id.as_str()).collect();
        assert_eq!(order, vec!["large", "medium", "small"]);
        assert_eq!(
            results.iter().map(SimulationResult::score_drop).collect::<Vec<_>>(),
            vec![20, 10, 5]
        );
    }

    #[test]
    fn batch_ties_keep_input_order() {
        let first = country("first", 60, &[(Sector::Cloud, 50)]);
        let second = country("second", 70, &[(Sector::Cloud, 50)]);
        let untouched = country("untouched", 40, &[]);
        let shock = scenario(&[Sector::Cloud], 1.0);

        let results = simulate_batch([&untouched, &first, &second], &shock);
        let order: Vec<&str> = results.iter().map(|r| r.country_id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "untouched"]);
    }

    #[test]
    fn invalid_multiplier_means_no_impact() {
        let target = country("t", 60, &[(Sector::Chips, 80)]);
        for multiplier in [f64::NAN, f64::INFINITY, 0.0, -1.5] {
            let impact = calculate_decoupling_impact(&target, &[Sector::Chips], multiplier);
            assert_eq!(impact.score_impact, 0);
            assert_eq!(impact.gdp_impact, 0.0);
            assert_eq!(impact.uptime_impact, 0.0);
        }
    }

    #[test]
    fn summarizes_batch_headline_figures() {
        let small = country("small", 60, &[(Sector::Chips, 17)]);
        let large = country("large", 60, &[(Sector::Chips, 67), (Sector::Chips, 95)]); // mean 81 -> 24
        let medium = country("medium", 60, &[(Sector::Chips, 33)]);
        let untouched = country("untouched", 60, &[(Sector::Cloud, 99)]);
        let shock = scenario(&[Sector::Chips], 1.0);

        let results = simulate_batch([&small, &large, &medium], &shock);
        // (24 + 10 + 5) / 3 = 13
        assert_eq!(
            summarize_simulation(&results),
            SimulationSummary {
                countries_affected: 3,
                average_score_drop: 13,
                critical_vulnerability_count: 1,
            }
        );

        let results = simulate_batch([&small, &large, &medium, &untouched], &shock);
        let summary = summarize_simulation(&results);
        assert_eq!(summary.countries_affected, 3);
        // 39 / 4 = 9.75
        assert_eq!(summary.average_score_drop, 10);
    }

    #[test]
    fn drops_of_twenty_ten_and_five_average_to_twelve() {
        let small = country("small", 60, &[(Sector::Chips, 17)]);
        let large = country("large", 60, &[(Sector::Chips, 67)]);
        let medium = country("medium", 60, &[(Sector::Chips, 33)]);
        let results = simulate_batch([&small, &large, &medium], &scenario(&[Sector::Chips], 1.0));

        let summary = summarize_simulation(&results);
        assert_eq!(summary.countries_affected, 3);
        // 35 / 3 = 11.67
        assert_eq!(summary.average_score_drop, 12);
        assert_eq!(summary.critical_vulnerability_count, 0);
    }

    #[test]
    fn empty_batch_summarizes_to_zero() {
        assert_eq!(summarize_simulation(&[]), SimulationSummary::default());
    }
}
