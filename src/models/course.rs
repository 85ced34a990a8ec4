//! Course model.
//!
//! A course is the smallest schedulable unit of a plan. It carries its
//! credit units, the codes of courses it depends on, and the requirement
//! categories it satisfies.
//!
//! Optional list fields may be absent in producer output; they deserialize
//! as empty. Absent units deserialize as `None` and count as zero wherever
//! units are summed.

use serde::{Deserialize, Serialize};

/// A catalog course placed in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Short identifier, unique per catalog (e.g., "CIS-5").
    pub code: String,
    /// Display title.
    pub name: String,
    /// Credit units. `None` = not provided (counts as 0).
    #[serde(default)]
    pub units: Option<f64>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Codes that must be scheduled in a strictly earlier term.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Codes that must be scheduled in the same or an earlier term.
    #[serde(default)]
    pub corequisites: Vec<String>,
    /// General-education category ids satisfied by this course.
    #[serde(default)]
    pub ge_category: Vec<String>,
    /// Transfer category ids satisfied by this course.
    #[serde(default)]
    pub transfer_category: Vec<String>,
}

impl Course {
    /// Creates a course with no units and no requirements.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            units: None,
            description: String::new(),
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            ge_category: Vec::new(),
            transfer_category: Vec::new(),
        }
    }

    /// Sets the credit units.
    pub fn with_units(mut self, units: f64) -> Self {
        self.units = Some(units);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a prerequisite course code.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.push(code.into());
        self
    }

    /// Adds a corequisite course code.
    pub fn with_corequisite(mut self, code: impl Into<String>) -> Self {
        self.corequisites.push(code.into());
        self
    }

    /// Adds a general-education category id.
    pub fn with_ge_category(mut self, id: impl Into<String>) -> Self {
        self.ge_category.push(id.into());
        self
    }

    /// Adds a transfer category id.
    pub fn with_transfer_category(mut self, id: impl Into<String>) -> Self {
        self.transfer_category.push(id.into());
        self
    }

    /// Units with absent values treated as zero.
    #[inline]
    pub fn units_or_zero(&self) -> f64 {
        self.units.unwrap_or(0.0)
    }

    /// All category ids (GE and transfer) this course satisfies.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.ge_category
            .iter()
            .chain(&self.transfer_category)
            .map(String::as_str)
    }
}
