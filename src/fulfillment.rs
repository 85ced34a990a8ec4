//! Requirement fulfillment.
//!
//! Counts how many categories of each requirement catalog are satisfied by
//! the courses of a plan.
//!
//! # Rule
//!
//! A category is fulfilled if **any** course anywhere in the plan lists its
//! id in `ge_category` or `transfer_category`. Both lists feed one combined
//! set, so a GE id listed under `transfer_category` still counts for the GE
//! catalog. No partial credit and no double counting within a catalog. If
//! the two catalogs share an id, it is counted once in each.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{RequirementCatalog, SchedulePlan};

/// Fulfilled and total category counts for both catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fulfillment {
    /// General-education categories satisfied by the plan.
    pub ge_fulfilled: usize,
    /// Transfer categories satisfied by the plan.
    pub transfer_fulfilled: usize,
    /// Size of the general-education catalog.
    pub ge_total: usize,
    /// Size of the transfer catalog.
    pub transfer_total: usize,
}

impl Fulfillment {
    /// Fraction of GE categories fulfilled (0.0..1.0, 0.0 for an empty catalog).
    pub fn ge_ratio(&self) -> f64 {
        ratio(self.ge_fulfilled, self.ge_total)
    }

    /// Fraction of transfer categories fulfilled (0.0..1.0, 0.0 for an empty catalog).
    pub fn transfer_ratio(&self) -> f64 {
        ratio(self.transfer_fulfilled, self.transfer_total)
    }

    /// GE categories not yet fulfilled.
    pub fn ge_remaining(&self) -> usize {
        self.ge_total.saturating_sub(self.ge_fulfilled)
    }

    /// Transfer categories not yet fulfilled.
    pub fn transfer_remaining(&self) -> usize {
        self.transfer_total.saturating_sub(self.transfer_fulfilled)
    }

    /// Whether every category of both catalogs is fulfilled.
    pub fn is_complete(&self) -> bool {
        self.ge_fulfilled == self.ge_total && self.transfer_fulfilled == self.transfer_total
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Union of every category id listed by any course in the plan.
pub fn fulfilled_categories(plan: &SchedulePlan) -> BTreeSet<&str> {
    plan.courses().flat_map(|c| c.categories()).collect()
}

/// Counts fulfilled categories in each catalog.
///
/// Never fails. An empty plan fulfills nothing; totals are the catalog
/// lengths regardless of the plan.
pub fn compute_fulfillment(
    plan: &SchedulePlan,
    ge_catalog: &RequirementCatalog,
    transfer_catalog: &RequirementCatalog,
) -> Fulfillment {
    let fulfilled = fulfilled_categories(plan);
    let count_in = |catalog: &RequirementCatalog| {
        catalog
            .iter()
            .filter(|cat| fulfilled.contains(cat.id.as_str()))
            .count()
    };

    let result = Fulfillment {
        ge_fulfilled: count_in(ge_catalog),
        transfer_fulfilled: count_in(transfer_catalog),
        ge_total: ge_catalog.len(),
        transfer_total: transfer_catalog.len(),
    };

    tracing::debug!(
        distinct_ids = fulfilled.len(),
        ge_fulfilled = result.ge_fulfilled,
        ge_total = result.ge_total,
        transfer_fulfilled = result.transfer_fulfilled,
        transfer_total = result.transfer_total,
        "computed requirement fulfillment"
    );

    result
}

/// One row of a requirements checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    /// Category id.
    pub id: String,
    /// Category display name.
    pub name: String,
    /// Whether any course in the plan satisfies the category.
    pub fulfilled: bool,
    /// Codes of courses satisfying the category, in plan order, deduplicated.
    pub satisfied_by: Vec<String>,
}

/// Per-category checklist for one catalog, in catalog order.
pub fn requirement_checklist(
    plan: &SchedulePlan,
    catalog: &RequirementCatalog,
) -> Vec<ChecklistEntry> {
    let mut satisfiers: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for course in plan.courses() {
        for id in course.categories() {
            let codes = satisfiers.entry(id).or_default();
            if !codes.contains(&course.code.as_str()) {
                codes.push(&course.code);
            }
        }
    }

    catalog
        .iter()
        .map(|cat| {
            let satisfied_by: Vec<String> = satisfiers
                .get(cat.id.as_str())
                .map(|codes| codes.iter().map(|c| c.to_string()).collect())
                .unwrap_or_default();
            ChecklistEntry {
                id: cat.id.clone(),
                name: cat.name.clone(),
                fulfilled: !satisfied_by.is_empty(),
                satisfied_by,
            }
        })
        .collect()
}
