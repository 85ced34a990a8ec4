//! Academic pathway planning for the U-Engine ecosystem.
//!
//! Models multi-year course plans (years → four term slots → courses) and
//! checks them against requirement catalogs, unit loads and requisite
//! ordering. Plans are produced elsewhere; everything here is a pure,
//! synchronous pass over borrowed input.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Term`, `TermSlot`, `AcademicYear`,
//!   `SchedulePlan`, `RequirementCatalog`, `TransferAgreement`, majors and universities
//! - **`fulfillment`**: Distinct requirement categories satisfied by a plan
//! - **`units`**: Unit sums per term and the regular-term unit band
//! - **`validation`**: Requisite ordering, structural integrity, preferences
//! - **`articulation`**: Progress against a transfer agreement
//! - **`parse`**: Producer JSON output → `SchedulePlan`
//! - **`config`**: TOML planner configuration
//! - **`summary`**: All of the above in one report
//!
//! # Example
//!
//! ```
//! use u_pathway::models::{AcademicYear, Course, RequirementCatalog, SchedulePlan, Term};
//! use u_pathway::fulfillment::compute_fulfillment;
//! use u_pathway::validation::validate_ordering;
//!
//! let plan = SchedulePlan::new().with_year(
//!     AcademicYear::new(1)
//!         .with_course(Term::Fall, Course::new("CIS-5", "Programming Concepts").with_units(4.0))
//!         .with_course(
//!             Term::Spring,
//!             Course::new("CIS-17A", "C++ I")
//!                 .with_units(4.0)
//!                 .with_prerequisite("CIS-5")
//!                 .with_ge_category("RCCD GE Area 2"),
//!         ),
//! );
//!
//! let ge = RequirementCatalog::general_education();
//! let transfer = RequirementCatalog::transfer();
//! let f = compute_fulfillment(&plan, &ge, &transfer);
//! assert_eq!((f.ge_fulfilled, f.ge_total), (1, 8));
//! assert_eq!(validate_ordering(&plan).count(), 0);
//! ```

pub mod articulation;
pub mod config;
pub mod fulfillment;
pub mod models;
pub mod parse;
pub mod summary;
pub mod units;
pub mod validation;
