//! Plan validation.
//!
//! Three independent checks, none of which modify or reject a plan:
//!
//! - **Ordering** ([`validate_ordering`]): every prerequisite is scheduled in
//!   a strictly earlier term, every corequisite in the same or an earlier
//!   term. Advisory; the caller decides whether to surface warnings.
//! - **Structure** ([`validate_plan`]): year numbers, unit values, duplicate
//!   course codes, unknown category ids, self and cyclic requisites.
//! - **Preferences** ([`check_preferences`]): excluded intersessions left
//!   populated, wrong plan length, courses before the starting term.
//!
//! # Term Order
//!
//! Terms are ordered globally by `(year, slot rank)` with
//! Fall < Winter Intersession < Spring < Summer Intersession. When a code is
//! scheduled more than once, its earliest occurrence is the one that counts
//! as satisfying requirements.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::PlanPreferences;
use crate::models::{Course, RequirementCatalog, SchedulePlan, Term, TermSlot};

/// Which requisite rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingViolationKind {
    /// Prerequisite absent or not scheduled strictly earlier.
    MissingPrerequisite,
    /// Corequisite absent or scheduled later.
    MissingCorequisite,
}

/// A course scheduled before one of its requisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingViolation {
    /// Code of the course whose requisite is unmet.
    pub course_code: String,
    /// Code of the unmet requisite.
    pub requirement_code: String,
    /// Rule broken.
    pub kind: OrderingViolationKind,
    /// Where the offending course is scheduled.
    pub slot: TermSlot,
}

impl OrderingViolation {
    /// Human-readable description.
    pub fn message(&self) -> String {
        match self.kind {
            OrderingViolationKind::MissingPrerequisite => format!(
                "{} in {} requires {} to be completed in an earlier term",
                self.course_code, self.slot, self.requirement_code
            ),
            OrderingViolationKind::MissingCorequisite => format!(
                "{} in {} requires {} in the same or an earlier term",
                self.course_code, self.slot, self.requirement_code
            ),
        }
    }
}

/// Earliest slot of every course code in the plan.
fn earliest_slots(plan: &SchedulePlan) -> HashMap<&str, TermSlot> {
    let mut earliest: HashMap<&str, TermSlot> = HashMap::new();
    for (slot, course) in plan.occurrences() {
        earliest
            .entry(course.code.as_str())
            .and_modify(|s| *s = (*s).min(slot))
            .or_insert(slot);
    }
    earliest
}

fn course_ordering_violations(
    earliest: &HashMap<&str, TermSlot>,
    slot: TermSlot,
    course: &Course,
) -> Vec<OrderingViolation> {
    let violation = |code: &String, kind| OrderingViolation {
        course_code: course.code.clone(),
        requirement_code: code.clone(),
        kind,
        slot,
    };

    let prereqs = course
        .prerequisites
        .iter()
        .filter(|code| !matches!(earliest.get(code.as_str()), Some(&s) if s < slot))
        .map(|code| violation(code, OrderingViolationKind::MissingPrerequisite));

    let coreqs = course
        .corequisites
        .iter()
        .filter(|code| !matches!(earliest.get(code.as_str()), Some(&s) if s <= slot))
        .map(|code| violation(code, OrderingViolationKind::MissingCorequisite));

    prereqs.chain(coreqs).collect()
}

/// Lazily yields every requisite ordering violation in the plan.
///
/// Occurrences are visited in plan order; for each course, prerequisites
/// are reported before corequisites. A requisite code that is not scheduled
/// anywhere in the plan is a violation. Never fails.
pub fn validate_ordering(plan: &SchedulePlan) -> impl Iterator<Item = OrderingViolation> + '_ {
    let earliest = earliest_slots(plan);
    plan.occurrences()
        .flat_map(move |(slot, course)| course_ordering_violations(&earliest, slot, course))
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of structural validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// A year is numbered 0.
    InvalidYear,
    /// Two years share the same number.
    DuplicateYear,
    /// A course has negative or non-finite units.
    InvalidUnits,
    /// A course code is scheduled more than once.
    DuplicateCourse,
    /// A course lists a category id found in neither catalog.
    UnknownCategory,
    /// A course lists itself as a prerequisite or corequisite.
    SelfRequisite,
    /// Prerequisites among scheduled courses form a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a plan.
///
/// Checks:
/// 1. Every year number is positive
/// 2. No two years share a number
/// 3. Every course's units, when present, are finite and non-negative
/// 4. No course code is scheduled more than once
/// 5. Every category id appears in one of the catalogs
/// 6. No course is its own prerequisite or corequisite
/// 7. No prerequisite cycles among scheduled courses
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_plan(
    plan: &SchedulePlan,
    ge_catalog: &RequirementCatalog,
    transfer_catalog: &RequirementCatalog,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut years = HashSet::new();
    for y in &plan.years {
        if y.year == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidYear,
                "Year numbers must be positive, found 0",
            ));
        }
        if !years.insert(y.year) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateYear,
                format!("Duplicate year number: {}", y.year),
            ));
        }
    }

    let mut seen_codes: HashMap<&str, TermSlot> = HashMap::new();
    for (slot, course) in plan.occurrences() {
        if let Some(units) = course.units {
            if !units.is_finite() || units < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidUnits,
                    format!("Course '{}' in {} has invalid units {}", course.code, slot, units),
                ));
            }
        }

        if let Some(first) = seen_codes.get(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!(
                    "Course '{}' is scheduled in both {} and {}",
                    course.code, first, slot
                ),
            ));
        } else {
            seen_codes.insert(&course.code, slot);
        }

        for id in course.categories() {
            if !ge_catalog.contains(id) && !transfer_catalog.contains(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCategory,
                    format!("Course '{}' references unknown category '{}'", course.code, id),
                ));
            }
        }

        if course
            .prerequisites
            .iter()
            .chain(&course.corequisites)
            .any(|r| *r == course.code)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfRequisite,
                format!("Course '{}' lists itself as a requisite", course.code),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(plan) {
        errors.push(cycle_err);
    }

    tracing::debug!(errors = errors.len(), "validated plan structure");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph of scheduled courses using DFS.
///
/// Self-edges are skipped; they are reported as [`ValidationErrorKind::SelfRequisite`].
fn detect_cycles(plan: &SchedulePlan) -> Option<ValidationError> {
    // prerequisite code → dependent codes
    let mut adj: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut all_codes: BTreeSet<&str> = BTreeSet::new();

    for course in plan.courses() {
        all_codes.insert(&course.code);
        for pre in &course.prerequisites {
            if *pre != course.code {
                adj.entry(pre.as_str()).or_default().push(course.code.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_codes {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisites detected involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &BTreeMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true;
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

/// A mismatch between a plan and the student's stated preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreferenceViolation {
    /// An intersession the student excluded has courses.
    ExcludedIntersession { slot: TermSlot, course_count: usize },
    /// The plan does not span the requested number of years.
    YearCount { expected: u32, actual: usize },
    /// The first year is not numbered 1.
    FirstYear { found: u32 },
    /// The first year has courses before the requested starting term.
    BeforeStartTerm { slot: TermSlot, start_term: Term },
}

/// Compares a plan against the preferences it was generated from.
pub fn check_preferences(plan: &SchedulePlan, prefs: &PlanPreferences) -> Vec<PreferenceViolation> {
    let mut violations = Vec::new();

    if plan.year_count() != prefs.years as usize {
        violations.push(PreferenceViolation::YearCount {
            expected: prefs.years,
            actual: plan.year_count(),
        });
    }

    if let Some(first) = plan.years.iter().map(|y| y.year).min() {
        if first != 1 {
            violations.push(PreferenceViolation::FirstYear { found: first });
        }
    }

    for (slot, courses) in plan.terms() {
        if courses.is_empty() {
            continue;
        }
        let excluded = match slot.term {
            Term::WinterIntersession => !prefs.include_winter,
            Term::SummerIntersession => !prefs.include_summer,
            _ => false,
        };
        if excluded {
            violations.push(PreferenceViolation::ExcludedIntersession {
                slot,
                course_count: courses.len(),
            });
        }
        if slot.year == 1 && slot.term < prefs.start_term {
            violations.push(PreferenceViolation::BeforeStartTerm {
                slot,
                start_term: prefs.start_term,
            });
        }
    }

    violations
}
