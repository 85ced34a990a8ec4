//! Schedule plan model.
//!
//! A plan is an ordered sequence of academic years, each with exactly four
//! term slots. Plans are produced wholesale by an external generation step
//! and are only read by this crate.
//!
//! # Wire Shape
//!
//! ```json
//! [
//!   {
//!     "year": 1,
//!     "semesters": {
//!       "Fall": [ { "code": "CIS-5", "name": "...", "units": 4 } ],
//!       "Winter Intersession": [],
//!       "Spring": [],
//!       "Summer Intersession": []
//!     }
//!   }
//! ]
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};

use super::{Course, Term, TermSlot};

/// The four term slots of one academic year.
///
/// A slot missing from the input deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semesters {
    /// Fall term courses.
    #[serde(rename = "Fall", default)]
    pub fall: Vec<Course>,
    /// Winter intersession courses.
    #[serde(rename = "Winter Intersession", default)]
    pub winter_intersession: Vec<Course>,
    /// Spring term courses.
    #[serde(rename = "Spring", default)]
    pub spring: Vec<Course>,
    /// Summer intersession courses.
    #[serde(rename = "Summer Intersession", default)]
    pub summer_intersession: Vec<Course>,
}

impl Semesters {
    /// Courses scheduled in the given slot.
    pub fn get(&self, term: Term) -> &[Course] {
        match term {
            Term::Fall => &self.fall,
            Term::WinterIntersession => &self.winter_intersession,
            Term::Spring => &self.spring,
            Term::SummerIntersession => &self.summer_intersession,
        }
    }

    /// Mutable access to a slot (used when building plans).
    pub fn get_mut(&mut self, term: Term) -> &mut Vec<Course> {
        match term {
            Term::Fall => &mut self.fall,
            Term::WinterIntersession => &mut self.winter_intersession,
            Term::Spring => &mut self.spring,
            Term::SummerIntersession => &mut self.summer_intersession,
        }
    }

    /// All four slots in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Term, &[Course])> + '_ {
        Term::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, courses)| courses.is_empty())
    }
}

/// One academic year of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYear {
    /// Year number (1-based). Integral floats such as `1.0` are accepted.
    #[serde(deserialize_with = "deserialize_year")]
    pub year: u32,
    /// Term slots.
    #[serde(default)]
    pub semesters: Semesters,
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
        Ok(n as u32)
    } else {
        Err(de::Error::custom(format!(
            "year must be a non-negative integer, got {n}"
        )))
    }
}

impl AcademicYear {
    /// Creates a year with four empty slots.
    pub fn new(year: u32) -> Self {
        Self {
            year,
            semesters: Semesters::default(),
        }
    }

    /// Adds a course to a slot.
    pub fn with_course(mut self, term: Term, course: Course) -> Self {
        self.semesters.get_mut(term).push(course);
        self
    }

    /// Courses scheduled in the given slot of this year.
    pub fn courses_in(&self, term: Term) -> &[Course] {
        self.semesters.get(term)
    }
}

/// A complete multi-year plan.
///
/// Serialized as a bare JSON array of years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchedulePlan {
    /// Academic years, expected in ascending `year` order.
    pub years: Vec<AcademicYear>,
}

impl SchedulePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a year.
    pub fn add_year(&mut self, year: AcademicYear) {
        self.years.push(year);
    }

    /// Builder-style variant of [`add_year`](Self::add_year).
    pub fn with_year(mut self, year: AcademicYear) -> Self {
        self.years.push(year);
        self
    }

    /// Whether the plan has no years.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of years.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Every `(slot, courses)` pair, year by year in plan order.
    pub fn terms(&self) -> impl Iterator<Item = (TermSlot, &[Course])> + '_ {
        self.years.iter().flat_map(|y| {
            y.semesters
                .iter()
                .map(move |(term, courses)| (TermSlot::new(y.year, term), courses))
        })
    }

    /// Every scheduled course with the slot it occupies.
    pub fn occurrences(&self) -> impl Iterator<Item = (TermSlot, &Course)> + '_ {
        self.terms()
            .flat_map(|(slot, courses)| courses.iter().map(move |c| (slot, c)))
    }

    /// Every scheduled course.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.occurrences().map(|(_, c)| c)
    }

    /// Total number of scheduled course occurrences.
    pub fn course_count(&self) -> usize {
        self.courses().count()
    }

    /// Earliest slot in which a course code is scheduled.
    pub fn earliest_slot(&self, code: &str) -> Option<TermSlot> {
        self.occurrences()
            .filter(|(_, c)| c.code == code)
            .map(|(slot, _)| slot)
            .min()
    }

    /// Whether a course code appears anywhere in the plan.
    pub fn contains_course(&self, code: &str) -> bool {
        self.courses().any(|c| c.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SchedulePlan {
        SchedulePlan::new()
            .with_year(
                AcademicYear::new(1)
                    .with_course(Term::Fall, Course::new("CIS-5", "Programming Concepts").with_units(4.0))
                    .with_course(Term::Fall, Course::new("MAT-1A", "Calculus I").with_units(4.0))
                    .with_course(Term::Spring, Course::new("CIS-17A", "C++ I").with_units(4.0)),
            )
            .with_year(
                AcademicYear::new(2)
                    .with_course(Term::WinterIntersession, Course::new("HIS-6", "US History").with_units(3.0)),
            )
    }

    #[test]
    fn test_terms_cover_four_slots_per_year() {
        let plan = sample_plan();
        let slots: Vec<TermSlot> = plan.terms().map(|(s, _)| s).collect();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0], TermSlot::new(1, Term::Fall));
        assert_eq!(slots[5], TermSlot::new(2, Term::WinterIntersession));
    }

    #[test]
    fn test_occurrences() {
        let plan = sample_plan();
        assert_eq!(plan.course_count(), 4);
        let (slot, course) = plan.occurrences().last().unwrap();
        assert_eq!(course.code, "HIS-6");
        assert_eq!(slot, TermSlot::new(2, Term::WinterIntersession));
    }

    #[test]
    fn test_earliest_slot() {
        let mut plan = sample_plan();
        plan.years[1]
            .semesters
            .get_mut(Term::Fall)
            .push(Course::new("CIS-5", "Programming Concepts"));

        assert_eq!(plan.earliest_slot("CIS-5"), Some(TermSlot::new(1, Term::Fall)));
        assert_eq!(plan.earliest_slot("CIS-17A"), Some(TermSlot::new(1, Term::Spring)));
        assert_eq!(plan.earliest_slot("PHY-4A"), None);
        assert!(plan.contains_course("HIS-6"));
    }

    #[test]
    fn test_empty_plan() {
        let plan = SchedulePlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.course_count(), 0);
        assert_eq!(plan.terms().count(), 0);
    }

    #[test]
    fn test_plan_wire_shape() {
        let json = r#"[
            {
                "year": 1,
                "semesters": {
                    "Fall": [{"code": "CIS-5", "name": "Programming Concepts", "units": 4, "description": "Intro"}],
                    "Winter Intersession": [],
                    "Spring": [{"code": "CIS-17A", "name": "C++ I", "units": 4, "description": "C++", "prerequisites": ["CIS-5"]}]
                }
            }
        ]"#;
        let plan: SchedulePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.year_count(), 1);
        assert!(plan.years[0].courses_in(Term::SummerIntersession).is_empty());
        assert_eq!(plan.years[0].courses_in(Term::Spring)[0].prerequisites, vec!["CIS-5"]);

        let out = serde_json::to_value(&plan).unwrap();
        assert!(out.is_array());
        assert!(out[0]["semesters"]["Summer Intersession"].is_array());
    }

    #[test]
    fn test_year_accepts_integral_float() {
        let year: AcademicYear = serde_json::from_str(r#"{"year": 2.0}"#).unwrap();
        assert_eq!(year.year, 2);

        assert!(serde_json::from_str::<AcademicYear>(r#"{"year": 1.5}"#).is_err());
        assert!(serde_json::from_str::<AcademicYear>(r#"{"year": -1}"#).is_err());
        assert!(serde_json::from_str::<AcademicYear>(r#"{"year": "1"}"#).is_err());
    }

    #[test]
    fn test_semesters_is_empty() {
        assert!(Semesters::default().is_empty());
        assert!(!sample_plan().years[0].semesters.is_empty());
    }
}
