//! Progress against a transfer articulation agreement.

use serde::Serialize;

use crate::models::{SchedulePlan, TermSlot, TransferAgreement};

/// Which agreement courses a plan schedules, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgreementProgress {
    /// Required courses present in the plan, with their earliest slot.
    pub required_scheduled: Vec<(String, TermSlot)>,
    /// Required courses absent from the plan.
    pub required_missing: Vec<String>,
    /// Elective courses present in the plan, with their earliest slot.
    pub electives_scheduled: Vec<(String, TermSlot)>,
    /// Number of required courses in the agreement.
    pub required_total: usize,
}

impl AgreementProgress {
    /// Matches a plan against an agreement, preserving agreement order.
    pub fn evaluate(plan: &SchedulePlan, agreement: &TransferAgreement) -> Self {
        let mut required_scheduled = Vec::new();
        let mut required_missing = Vec::new();
        for code in &agreement.required {
            match plan.earliest_slot(code) {
                Some(slot) => required_scheduled.push((code.clone(), slot)),
                None => required_missing.push(code.clone()),
            }
        }

        let electives_scheduled = agreement
            .electives
            .iter()
            .filter_map(|code| plan.earliest_slot(code).map(|slot| (code.clone(), slot)))
            .collect();

        Self {
            required_scheduled,
            required_missing,
            electives_scheduled,
            required_total: agreement.required.len(),
        }
    }

    /// Whether every required course is scheduled.
    pub fn is_complete(&self) -> bool {
        self.required_missing.is_empty()
    }

    /// Fraction of required courses scheduled (1.0 when nothing is required).
    pub fn completion_rate(&self) -> f64 {
        if self.required_total == 0 {
            1.0
        } else {
            self.required_scheduled.len() as f64 / self.required_total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicYear, Course, Term, TransferAgreements};

    fn cs_plan() -> SchedulePlan {
        SchedulePlan::new()
            .with_year(
                AcademicYear::new(1)
                    .with_course(Term::Fall, Course::new("CIS-5", "Programming Concepts"))
                    .with_course(Term::Fall, Course::new("MAT-1A", "Calculus I"))
                    .with_course(Term::Spring, Course::new("CIS-17A", "C++ I"))
                    .with_course(Term::Spring, Course::new("MAT-1B", "Calculus II")),
            )
            .with_year(
                AcademicYear::new(2)
                    .with_course(Term::Fall, Course::new("CIS-17B", "C++ II"))
                    .with_course(Term::Fall, Course::new("PHY-4A", "Mechanics"))
                    .with_course(Term::Spring, Course::new("PHY-4B", "Electricity")),
            )
    }

    #[test]
    fn test_partial_progress() {
        let agreements = TransferAgreements::builtin();
        let ucr = agreements.get("ucr", "computer-science-adt").unwrap();

        let progress = AgreementProgress::evaluate(&cs_plan(), ucr);
        assert_eq!(progress.required_total, 8);
        assert_eq!(progress.required_scheduled.len(), 6);
        assert_eq!(progress.required_missing, vec!["CIS-17C", "MAT-1C"]);
        assert_eq!(
            progress.electives_scheduled,
            vec![("PHY-4B".to_string(), TermSlot::new(2, Term::Spring))]
        );
        assert!(!progress.is_complete());
        assert!((progress.completion_rate() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_required_in_agreement_order() {
        let agreement = TransferAgreement::new(&["MAT-1B", "CIS-5"], &[]);
        let progress = AgreementProgress::evaluate(&cs_plan(), &agreement);
        assert_eq!(progress.required_scheduled[0].0, "MAT-1B");
        assert_eq!(progress.required_scheduled[1].1, TermSlot::new(1, Term::Fall));
        assert!(progress.is_complete());
    }

    #[test]
    fn test_empty_agreement() {
        let progress = AgreementProgress::evaluate(&cs_plan(), &TransferAgreement::default());
        assert!(progress.is_complete());
        assert_eq!(progress.completion_rate(), 1.0);
    }
}
