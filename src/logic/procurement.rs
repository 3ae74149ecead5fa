//! Sovereign procurement: vendor filtering and per-vendor compliance

use crate::constants::{VENDOR_CRITERION_POINTS, VENDOR_FULL_COMPLIANCE};
use crate::logic::layers::round_half_up;
use crate::types::{Vendor, VendorCompliance, VendorFilter};

struct ComplianceCriterion {
    satisfied: fn(&Vendor) -> bool,
    issue: &'static str,
}

// Issues are reported in this order
const COMPLIANCE_CRITERIA: &[ComplianceCriterion] = &[
    ComplianceCriterion {
        satisfied: |v: &Vendor| v.is_eu_hq,
        issue: "Headquarters outside EU jurisdiction",
    },
    ComplianceCriterion {
        satisfied: |v: &Vendor| v.foreign_control_free,
        issue: "Subject to foreign corporate control",
    },
    ComplianceCriterion {
        satisfied: |v: &Vendor| v.data_resident,
        issue: "Data may be processed outside EU",
    },
    ComplianceCriterion {
        satisfied: |v: &Vendor| v.legally_immunized,
        issue: "Exposed to extraterritorial data access laws (e.g., US CLOUD Act)",
    },
];

impl VendorFilter {
    pub fn matches(&self, vendor: &Vendor) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = vendor.name.to_lowercase().contains(&query)
            || vendor.description.to_lowercase().contains(&query);
        let matches_category = self.category.map_or(true, |category| vendor.category == category);
        let matches_compliance = !self.only_compliant || vendor.eu_stack_compliant;

        matches_search && matches_category && matches_compliance
    }
}

pub fn filter_vendors<'a>(vendors: &'a [Vendor], filter: &VendorFilter) -> Vec<&'a Vendor> {
    vendors.iter().filter(|vendor| filter.matches(vendor)).collect()
}

/// Whole percent of vendors meeting the sovereign stack criteria
pub fn compliance_rate(vendors: &[Vendor]) -> u32 {
    if vendors.is_empty() {
        return 0;
    }
    let compliant = vendors.iter().filter(|vendor| vendor.eu_stack_compliant).count();
    round_half_up(compliant as f64 / vendors.len() as f64 * 100.0) as u32
}

pub fn check_vendor_compliance(vendor: &Vendor) -> VendorCompliance {
    let mut score = 0;
    let mut issues = Vec::new();
    for criterion in COMPLIANCE_CRITERIA {
        if (criterion.satisfied)(vendor) {
            score += VENDOR_CRITERION_POINTS;
        } else {
            issues.push(criterion.issue);
        }
    }

    VendorCompliance {
        compliant: score == VENDOR_FULL_COMPLIANCE,
        issues,
        score,
    }
}
