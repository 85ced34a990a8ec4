//! Transfer articulation agreements.
//!
//! An agreement lists the course codes a receiving university expects for
//! a given major: required courses and optional electives. Agreements are
//! keyed by university and major identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Course lists a university expects for one major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAgreement {
    /// Codes that must be completed.
    #[serde(default)]
    pub required: Vec<String>,
    /// Codes that count as recommended electives.
    #[serde(default)]
    pub electives: Vec<String>,
}

impl TransferAgreement {
    /// Creates an agreement from code lists.
    pub fn new(required: &[&str], electives: &[&str]) -> Self {
        Self {
            required: required.iter().map(|s| s.to_string()).collect(),
            electives: electives.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Agreements indexed by university, then major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferAgreements {
    by_university: BTreeMap<String, BTreeMap<String, TransferAgreement>>,
}

impl TransferAgreements {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agreement, replacing any existing one.
    pub fn insert(
        &mut self,
        university: impl Into<String>,
        major: impl Into<String>,
        agreement: TransferAgreement,
    ) {
        self.by_university
            .entry(university.into())
            .or_default()
            .insert(major.into(), agreement);
    }

    /// Looks up the agreement for a university and major.
    pub fn get(&self, university: &str, major: &str) -> Option<&TransferAgreement> {
        self.by_university.get(university)?.get(major)
    }

    /// Number of registered agreements.
    pub fn len(&self) -> usize {
        self.by_university.values().map(BTreeMap::len).sum()
    }

    /// Whether no agreements are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Agreements published by the district's partner universities.
    pub fn builtin() -> Self {
        let mut agreements = Self::new();
        agreements.insert(
            "ucr",
            "computer-science-adt",
            TransferAgreement::new(
                &["CIS-5", "CIS-17A", "CIS-17B", "CIS-17C", "MAT-1A", "MAT-1B", "MAT-1C", "PHY-4A"],
                &["PHY-4B", "PHY-4C"],
            ),
        );
        agreements.insert(
            "csusb",
            "computer-science-adt",
            TransferAgreement::new(
                &["CIS-5", "CIS-7", "CIS-17A", "CIS-11", "MAT-1A", "MAT-1B"],
                &["PHY-4A", "PHY-4B"],
            ),
        );
        agreements.insert(
            "csuf",
            "business-admin-adt",
            TransferAgreement::new(
                &["ACC-1A", "ACC-1B", "BUS-18A", "BUS-24", "ECO-7", "ECO-8", "MAT-12", "CIS-1A"],
                &[],
            ),
        );
        agreements
    }
}
