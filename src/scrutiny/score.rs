//! Quality score.
//!
//! The score is one minus the weighted sum of unresolved gaps, normalized by
//! the number of checks a roadmap of that size receives (twelve per unit).

use super::Gap;

/// Checks applied to every unit in a pass.
pub const CHECKS_PER_UNIT: usize = 12;

/// Score a gap list for a roadmap with `unit_count` units.
///
/// Always in `[0, 1]`. Resolved gaps do not count; an empty roadmap is
/// normalized as though it had a single check.
pub fn score_gaps(gaps: &[Gap], unit_count: usize) -> f64 {
    let penalty: u32 = gaps
        .iter()
        .filter(|g| !g.resolved)
        .map(|g| g.severity.weight())
        .sum();
    let total_checks = (unit_count * CHECKS_PER_UNIT).max(1);

    (1.0 - f64::from(penalty) / total_checks as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrutiny::{GapCategory, Severity};

    fn gap(severity: Severity) -> Gap {
        Gap::new("GAP-001", GapCategory::MissingTools, severity, "U-1", "d")
    }

    fn gaps(critical: usize, major: usize, minor: usize) -> Vec<Gap> {
        std::iter::repeat_n(Severity::Critical, critical)
            .chain(std::iter::repeat_n(Severity::Major, major))
            .chain(std::iter::repeat_n(Severity::Minor, minor))
            .map(gap)
            .collect()
    }

    #[test]
    fn no_gaps_is_perfect() {
        assert_eq!(score_gaps(&[], 3), 1.0);
    }

    #[test]
    fn weighted_formula() {
        // 1 - (3*1 + 2*2 + 1*3) / (12*2) = 1 - 10/24
        let score = score_gaps(&gaps(1, 2, 3), 2);
        assert!((score - (1.0 - 10.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn formula_holds_across_sizes() {
        for units in 1..6 {
            for (n, m, k) in [(0, 0, 1), (2, 1, 0), (1, 4, 7), (5, 5, 5)] {
                let expected =
                    (1.0 - (3 * n + 2 * m + k) as f64 / (12 * units) as f64).max(0.0);
                let score = score_gaps(&gaps(n, m, k), units);
                assert!((score - expected).abs() < 1e-9, "U={units} N={n} M={m} K={k}");
            }
        }
    }

    #[test]
    fn score_never_goes_negative() {
        assert_eq!(score_gaps(&gaps(40, 0, 0), 1), 0.0);
    }

    #[test]
    fn info_gaps_are_free() {
        assert_eq!(score_gaps(&[gap(Severity::Info), gap(Severity::Info)], 1), 1.0);
    }

    #[test]
    fn resolved_gaps_do_not_count() {
        let mut resolved = gap(Severity::Critical);
        resolved.resolve(1);
        assert_eq!(score_gaps(&[resolved], 1), 1.0);
    }

    #[test]
    fn empty_roadmap_uses_unit_floor() {
        // denominator is max(1, 0) = 1
        assert_eq!(score_gaps(&[gap(Severity::Minor)], 0), 0.0);
        assert_eq!(score_gaps(&[], 0), 1.0);
    }
}
