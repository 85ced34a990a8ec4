//! Plan summary.
//!
//! Combines every check of this crate into one report for a presentation
//! layer to render.
//!
//! | Field | Source |
//! |-------|--------|
//! | Total units, course count | [`units::plan_total_units`](crate::units::plan_total_units) |
//! | Per-term totals | [`units::term_totals`](crate::units::term_totals) |
//! | Fulfillment | [`compute_fulfillment`](crate::fulfillment::compute_fulfillment) |
//! | Ordering violations | [`validate_ordering`](crate::validation::validate_ordering) |
//! | Unit band violations | [`unit_band_violations`](crate::units::unit_band_violations) |
//! | Preference violations | [`check_preferences`](crate::validation::check_preferences) |
//! | Agreement progress | [`AgreementProgress`] (when an agreement applies) |

use serde::Serialize;

use crate::articulation::AgreementProgress;
use crate::config::PlannerConfig;
use crate::fulfillment::{compute_fulfillment, Fulfillment};
use crate::models::{SchedulePlan, TransferAgreement};
use crate::units::{plan_total_units, term_totals, unit_band_violations, TermTotal, UnitBandViolation};
use crate::validation::{check_preferences, validate_ordering, OrderingViolation, PreferenceViolation};

/// Aggregate view of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Number of academic years.
    pub year_count: usize,
    /// Number of scheduled course occurrences.
    pub course_count: usize,
    /// Units across the whole plan.
    pub total_units: f64,
    /// Units per term, in plan order.
    pub term_totals: Vec<TermTotal>,
    /// Requirement category counts.
    pub fulfillment: Fulfillment,
    /// Requisite ordering problems.
    pub ordering_violations: Vec<OrderingViolation>,
    /// Regular terms outside the unit band.
    pub unit_band_violations: Vec<UnitBandViolation>,
    /// Mismatches with the student's preferences.
    pub preference_violations: Vec<PreferenceViolation>,
    /// Agreement progress, if an agreement was supplied or selected.
    pub agreement: Option<AgreementProgress>,
}

impl PlanSummary {
    /// Computes a summary of `plan` under `config`.
    ///
    /// # Arguments
    /// * `plan` - The generated plan.
    /// * `config` - Band, preferences and catalogs to check against.
    /// * `agreement` - Transfer agreement to evaluate. When `None`, the
    ///   agreement for the preferred university and major is used, if any.
    pub fn calculate(
        plan: &SchedulePlan,
        config: &PlannerConfig,
        agreement: Option<&TransferAgreement>,
    ) -> Self {
        let agreement = agreement.or_else(|| config.selected_agreement());
        let summary = Self {
            year_count: plan.year_count(),
            course_count: plan.course_count(),
            total_units: plan_total_units(plan),
            term_totals: term_totals(plan),
            fulfillment: compute_fulfillment(plan, &config.ge_categories, &config.transfer_categories),
            ordering_violations: validate_ordering(plan).collect(),
            unit_band_violations: unit_band_violations(plan, &config.units),
            preference_violations: check_preferences(plan, &config.preferences),
            agreement: agreement.map(|a| AgreementProgress::evaluate(plan, a)),
        };

        tracing::debug!(
            years = summary.year_count,
            courses = summary.course_count,
            total_units = summary.total_units,
            ordering = summary.ordering_violations.len(),
            unit_band = summary.unit_band_violations.len(),
            preferences = summary.preference_violations.len(),
            "summarized plan"
        );

        summary
    }

    /// Whether the plan has no ordering, unit band or preference violations.
    ///
    /// Fulfillment and agreement progress are informational and do not
    /// affect soundness.
    pub fn is_sound(&self) -> bool {
        self.ordering_violations.is_empty()
            && self.unit_band_violations.is_empty()
            && self.preference_violations.is_empty()
    }

    /// Total number of violations of all kinds.
    pub fn violation_count(&self) -> usize {
        self.ordering_violations.len()
            + self.unit_band_violations.len()
            + self.preference_violations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicYear, Course, Term};

    fn course(code: &str, units: f64) -> Course {
        Course::new(code, code).with_units(units)
    }

    fn one_year_config() -> PlannerConfig {
        let mut config = PlannerConfig::default();
        config.preferences.years = 1;
        config
    }

    fn sound_plan() -> SchedulePlan {
        SchedulePlan::new().with_year(
            AcademicYear::new(1)
                .with_course(Term::Fall, course("ENG-1A", 4.0).with_ge_category("RCCD GE Area 1A"))
                .with_course(Term::Fall, course("MAT-1A", 4.0).with_ge_category("RCCD GE Area 2"))
                .with_course(Term::Fall, course("CIS-5", 4.0))
                .with_course(Term::WinterIntersession, course("HIS-6", 3.0))
                .with_course(Term::Spring, course("CIS-17A", 4.0).with_prerequisite("CIS-5"))
                .with_course(Term::Spring, course("MAT-1B", 4.0).with_prerequisite("MAT-1A"))
                .with_course(
                    Term::Spring,
                    course("PHY-4A", 5.0)
                        .with_corequisite("MAT-1B")
                        .with_transfer_category("IGETC Area 5A"),
                ),
        )
    }

    #[test]
    fn test_sound_plan() {
        let summary = PlanSummary::calculate(&sound_plan(), &one_year_config(), None);
        assert_eq!(summary.year_count, 1);
        assert_eq!(summary.course_count, 7);
        assert_eq!(summary.total_units, 28.0);
        assert_eq!(summary.term_totals.len(), 4);
        assert_eq!(summary.fulfillment.ge_fulfilled, 2);
        assert_eq!(summary.fulfillment.transfer_fulfilled, 1);
        assert!(summary.agreement.is_none());
        assert!(summary.is_sound(), "{summary:?}");
        assert_eq!(summary.violation_count(), 0);
    }

    #[test]
    fn test_unsound_plan() {
        let mut plan = sound_plan();
        plan.years[0].semesters.fall.retain(|c| c.code != "CIS-5");

        let summary = PlanSummary::calculate(&plan, &PlannerConfig::default(), None);
        // CIS-17A loses its prerequisite, Fall drops to 8 units, plan is 1 year not 2
        assert_eq!(summary.ordering_violations.len(), 1);
        assert_eq!(summary.unit_band_violations.len(), 1);
        assert_eq!(summary.preference_violations.len(), 1);
        assert_eq!(summary.violation_count(), 3);
        assert!(!summary.is_sound());
    }

    #[test]
    fn test_with_agreement() {
        let config = one_year_config();
        let agreement = config
            .agreements
            .get("csusb", "computer-science-adt")
            .cloned();
        let summary = PlanSummary::calculate(&sound_plan(), &config, agreement.as_ref());

        let progress = summary.agreement.unwrap();
        assert_eq!(progress.required_total, 6);
        assert_eq!(progress.required_missing, vec!["CIS-7", "CIS-11"]);
    }

    #[test]
    fn test_agreement_from_preferences() {
        let mut config = one_year_config();
        config.preferences.transfer_university = Some("csusb".to_string());
        config.preferences.major = Some("computer-science-adt".to_string());
        let summary = PlanSummary::calculate(&sound_plan(), &config, None);

        let progress = summary.agreement.unwrap();
        assert_eq!(progress.required_total, 6);
        assert_eq!(progress.required_missing, vec!["CIS-7", "CIS-11"]);
    }

    #[test]
    fn test_explicit_agreement_overrides_preferences() {
        let mut config = one_year_config();
        config.preferences.transfer_university = Some("csusb".to_string());
        config.preferences.major = Some("computer-science-adt".to_string());
        let ucr = config.agreements.get("ucr", "computer-science-adt").cloned();
        let summary = PlanSummary::calculate(&sound_plan(), &config, ucr.as_ref());
        assert_eq!(summary.agreement.unwrap().required_total, 8);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = PlanSummary::calculate(&SchedulePlan::new(), &PlannerConfig::default(), None);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["fulfillment"]["ge_total"], 8);
        assert_eq!(json["preference_violations"][0]["type"], "year_count");
    }
}
