//! Requirement category catalogs.
//!
//! A catalog is static reference data: a fixed, ordered list of category
//! ids with display names. Plans reference categories by id; they cannot
//! introduce new ones.
//!
//! Two catalogs ship built in:
//!
//! | Catalog | Contents |
//! |---------|----------|
//! | General education | RCCD GE areas 1A through 7 |
//! | Transfer | CSU GE areas A1 through F, IGETC areas 1A through 7 |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single requirement category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementCategory {
    /// Opaque identifier matched exactly against course category lists.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl RequirementCategory {
    /// Creates a category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An immutable, ordered catalog of requirement categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementCatalog {
    categories: Vec<RequirementCategory>,
}

const GE_CATEGORIES: &[(&str, &str)] = &[
    ("RCCD GE Area 1A", "Area 1A: English Composition"),
    ("RCCD GE Area 1B", "Area 1B: Oral/Critical Thinking"),
    ("RCCD GE Area 2", "Area 2: Mathematical Concepts"),
    ("RCCD GE Area 3", "Area 3: Arts & Humanities"),
    ("RCCD GE Area 4", "Area 4: Social & Behavioral Sciences"),
    ("RCCD GE Area 5", "Area 5: Natural Sciences"),
    ("RCCD GE Area 6", "Area 6: Ethnic Studies"),
    ("RCCD GE Area 7", "Area 7: Lifelong Learning"),
];

const TRANSFER_CATEGORIES: &[(&str, &str)] = &[
    ("CSU GE Area A1", "CSU A1: Oral Communication"),
    ("CSU GE Area A2", "CSU A2: Written Communication"),
    ("CSU GE Area A3", "CSU A3: Critical Thinking"),
    ("CSU GE Area B1", "CSU B1: Physical Science"),
    ("CSU GE Area B2", "CSU B2: Life Science"),
    ("CSU GE Area B3", "CSU B3: Lab Activity"),
    ("CSU GE Area B4", "CSU B4: Mathematics"),
    ("CSU GE Area C1", "CSU C1: Arts"),
    ("CSU GE Area C2", "CSU C2: Humanities"),
    ("CSU GE Area D", "CSU D: Social Sciences"),
    ("CSU GE Area E", "CSU E: Lifelong Learning"),
    ("CSU GE Area F", "CSU F: Ethnic Studies"),
    ("IGETC Area 1A", "IGETC 1A: English Composition"),
    ("IGETC Area 1B", "IGETC 1B: Critical Thinking"),
    ("IGETC Area 1C", "IGETC 1C: Oral Communication"),
    ("IGETC Area 2A", "IGETC 2A: Mathematics"),
    ("IGETC Area 3A", "IGETC 3A: Arts"),
    ("IGETC Area 3B", "IGETC 3B: Humanities"),
    ("IGETC Area 4", "IGETC 4: Social & Behavioral Sci"),
    ("IGETC Area 5A", "IGETC 5A: Physical Science"),
    ("IGETC Area 5B", "IGETC 5B: Biological Science"),
    ("IGETC Area 5C", "IGETC 5C: Lab Activity"),
    ("IGETC Area 6A", "IGETC 6A: Language Other Than English"),
    ("IGETC Area 7", "IGETC 7: Ethnic Studies"),
];

impl RequirementCatalog {
    /// Creates a catalog from categories, preserving order.
    pub fn new(categories: Vec<RequirementCategory>) -> Self {
        Self { categories }
    }

    fn from_table(table: &[(&str, &str)]) -> Self {
        Self::new(
            table
                .iter()
                .map(|(id, name)| RequirementCategory::new(*id, *name))
                .collect(),
        )
    }

    /// Built-in general-education catalog.
    pub fn general_education() -> Self {
        Self::from_table(GE_CATEGORIES)
    }

    /// Built-in transfer catalog (CSU GE and IGETC).
    pub fn transfer() -> Self {
        Self::from_table(TRANSFER_CATEGORIES)
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[RequirementCategory] {
        &self.categories
    }

    /// Iterates categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RequirementCategory> + '_ {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Whether the catalog has a category with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Looks up a category by id.
    pub fn get(&self, id: &str) -> Option<&RequirementCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// First id that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.categories
            .iter()
            .map(|c| c.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    /// Ids present in both catalogs.
    pub fn overlap<'a>(&'a self, other: &RequirementCatalog) -> Vec<&'a str> {
        self.categories
            .iter()
            .filter(|c| other.contains(&c.id))
            .map(|c| c.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_sizes() {
        assert_eq!(RequirementCatalog::general_education().len(), 8);
        assert_eq!(RequirementCatalog::transfer().len(), 24);
    }

    #[test]
    fn test_builtin_catalogs_are_disjoint_and_unique() {
        let ge = RequirementCatalog::general_education();
        let tr = RequirementCatalog::transfer();
        assert!(ge.overlap(&tr).is_empty());
        assert!(ge.first_duplicate().is_none());
        assert!(tr.first_duplicate().is_none());
    }

    #[test]
    fn test_lookup() {
        let ge = RequirementCatalog::general_education();
        assert!(ge.contains("RCCD GE Area 1A"));
        assert!(!ge.contains("rccd ge area 1a"));
        assert_eq!(
            ge.get("RCCD GE Area 2").map(|c| c.name.as_str()),
            Some("Area 2: Mathematical Concepts")
        );
    }

    #[test]
    fn test_duplicate_detection() {
        let cat = RequirementCatalog::new(vec![
            RequirementCategory::new("X", "X"),
            RequirementCategory::new("Y", "Y"),
            RequirementCategory::new("X", "X again"),
        ]);
        assert_eq!(cat.first_duplicate(), Some("X"));
    }

    #[test]
    fn test_catalog_serde_is_array() {
        let cat = RequirementCatalog::new(vec![RequirementCategory::new("X", "Ex")]);
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, r#"[{"id":"X","name":"Ex"}]"#);
    }
}
