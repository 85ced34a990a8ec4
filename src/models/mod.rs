//! Academic plan domain models.
//!
//! Provides the data types for multi-year course plans and the static
//! reference data they are checked against.
//!
//! # Domain Mappings
//!
//! | u-pathway | Scheduling | Registrar |
//! |-----------|------------|-----------|
//! | Course | Activity | Section enrollment |
//! | TermSlot | Time bucket | Term code |
//! | SchedulePlan | Schedule | Education plan |
//! | RequirementCatalog | Constraint set | GE pattern |

mod agreement;
mod course;
mod plan;
mod program;
mod requirement;
mod term;

pub use agreement::{TransferAgreement, TransferAgreements};
pub use course::Course;
pub use plan::{AcademicYear, SchedulePlan, Semesters};
pub use program::{
    areas_of_study, find_major, find_university, transfer_universities, AreaOfStudy, ProgramOption,
};
pub use requirement::{RequirementCatalog, RequirementCategory};
pub use term::{Term, TermSlot, UnknownTerm};
