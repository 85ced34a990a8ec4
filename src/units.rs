//! Unit summation and load bands.
//!
//! Regular terms (Fall, Spring) must carry a unit load inside a caller
//! supplied `[min, max]` band. Intersessions are exempt: they are short
//! and usually lighter.
//!
//! Courses without a units value count as zero.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::models::{Course, SchedulePlan, Term, TermSlot};

/// Inclusive unit load band for regular terms.
///
/// A bound missing from configuration falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitBand {
    /// Minimum units (inclusive).
    pub min: f64,
    /// Maximum units (inclusive).
    pub max: f64,
}

impl UnitBand {
    /// Creates a band, rejecting negative, non-finite or inverted bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let band = Self { min, max };
        band.validate()?;
        Ok(band)
    }

    /// Checks the bounds of an already constructed band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidUnitBand {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Whether a total lies inside the band.
    #[inline]
    pub fn contains(&self, units: f64) -> bool {
        units >= self.min && units <= self.max
    }
}

impl Default for UnitBand {
    /// Full-time load of 12 to 16 units.
    fn default() -> Self {
        Self {
            min: 12.0,
            max: 16.0,
        }
    }
}

/// Sum of units over a course list.
pub fn sum_units(courses: &[Course]) -> f64 {
    courses.iter().map(Course::units_or_zero).sum()
}

/// Whether a term total satisfies the band.
///
/// Fall and Spring are checked inclusively against the band. Intersession
/// terms always pass.
pub fn check_unit_band(term: Term, total_units: f64, band: &UnitBand) -> bool {
    term.is_intersession() || band.contains(total_units)
}

/// Units and course count for one term of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermTotal {
    /// Which term.
    pub slot: TermSlot,
    /// Sum of course units.
    pub units: f64,
    /// Number of courses scheduled.
    pub course_count: usize,
}

/// Totals for every slot of every year, in plan order.
pub fn term_totals(plan: &SchedulePlan) -> Vec<TermTotal> {
    plan.terms()
        .map(|(slot, courses)| TermTotal {
            slot,
            units: sum_units(courses),
            course_count: courses.len(),
        })
        .collect()
}

/// Total units across the whole plan.
pub fn plan_total_units(plan: &SchedulePlan) -> f64 {
    plan.courses().map(Course::units_or_zero).sum()
}

/// A regular term whose load falls outside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitBandViolation {
    /// Offending term.
    pub slot: TermSlot,
    /// Its unit total.
    pub units: f64,
    /// Band it was checked against.
    pub band: UnitBand,
}

impl UnitBandViolation {
    /// Whether the load was under the minimum (otherwise over the maximum).
    pub fn is_underload(&self) -> bool {
        self.units < self.band.min
    }
}

/// Regular terms whose totals fall outside the band.
///
/// An empty Fall or Spring term totals zero and is reported when the band
/// minimum is positive.
pub fn unit_band_violations(plan: &SchedulePlan, band: &UnitBand) -> Vec<UnitBandViolation> {
    let violations: Vec<UnitBandViolation> = term_totals(plan)
        .into_iter()
        .filter(|t| !check_unit_band(t.slot.term, t.units, band))
        .map(|t| UnitBandViolation {
            slot: t.slot,
            units: t.units,
            band: *band,
        })
        .collect();

    tracing::debug!(
        count = violations.len(),
        min = band.min,
        max = band.max,
        "checked unit bands"
    );
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AcademicYear;

    fn course(code: &str, units: f64) -> Course {
        Course::new(code, code).with_units(units)
    }

    #[test]
    fn test_sum_units() {
        assert_eq!(sum_units(&[]), 0.0);
        assert_eq!(sum_units(&[course("A", 3.0), course("B", 4.0)]), 7.0);
        assert_eq!(sum_units(&[Course::new("A", "A")]), 0.0);
        assert_eq!(sum_units(&[Course::new("A", "A"), course("B", 2.5)]), 2.5);
    }

    #[test]
    fn test_check_unit_band() {
        let band = UnitBand::new(12.0, 16.0).unwrap();
        assert!(check_unit_band(Term::WinterIntersession, 2.0, &band));
        assert!(check_unit_band(Term::SummerIntersession, 30.0, &band));
        assert!(!check_unit_band(Term::Fall, 10.0, &band));
        assert!(!check_unit_band(Term::Spring, 17.0, &band));
        assert!(check_unit_band(Term::Fall, 12.0, &band));
        assert!(check_unit_band(Term::Spring, 16.0, &band));
    }

    #[test]
    fn test_band_validation() {
        assert!(UnitBand::new(12.0, 16.0).is_ok());
        assert!(UnitBand::new(12.0, 12.0).is_ok());
        assert!(UnitBand::new(16.0, 12.0).is_err());
        assert!(UnitBand::new(-1.0, 12.0).is_err());
        assert!(UnitBand::new(0.0, f64::NAN).is_err());
        assert_eq!(UnitBand::default(), UnitBand::new(12.0, 16.0).unwrap());
    }

    #[test]
    fn test_term_totals_and_plan_total() {
        let plan = SchedulePlan::new().with_year(
            AcademicYear::new(1)
                .with_course(Term::Fall, course("A", 4.0))
                .with_course(Term::Fall, course("B", 3.0))
                .with_course(Term::Spring, course("C", 5.0)),
        );

        let totals = term_totals(&plan);
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].units, 7.0);
        assert_eq!(totals[0].course_count, 2);
        assert_eq!(totals[1].units, 0.0);
        assert_eq!(totals[2].slot, TermSlot::new(1, Term::Spring));
        assert_eq!(plan_total_units(&plan), 12.0);
    }

    #[test]
    fn test_unit_band_violations() {
        let plan = SchedulePlan::new().with_year(
            AcademicYear::new(1)
                .with_course(Term::Fall, course("A", 4.0))
                .with_course(Term::Fall, course("B", 4.0))
                .with_course(Term::Fall, course("C", 4.0))
                .with_course(Term::WinterIntersession, course("D", 3.0))
                .with_course(Term::Spring, course("E", 5.0))
                .with_course(Term::Spring, course("F", 5.0))
                .with_course(Term::Spring, course("G", 5.0))
                .with_course(Term::Spring, course("H", 5.0)),
        );

        let violations = unit_band_violations(&plan, &UnitBand::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].slot, TermSlot::new(1, Term::Spring));
        assert_eq!(violations[0].units, 20.0);
        assert!(!violations[0].is_underload());
    }

    #[test]
    fn test_empty_regular_term_is_underload() {
        let plan = SchedulePlan::new().with_year(AcademicYear::new(1));
        let violations = unit_band_violations(&plan, &UnitBand::default());
        // Fall and Spring, both empty
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.is_underload()));
    }
}
