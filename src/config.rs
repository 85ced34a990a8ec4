//! Planner configuration.
//!
//! A TOML document supplying the unit band, the student's plan preferences,
//! the requirement catalogs and the transfer agreements. Every section is
//! optional; missing sections fall back to the built-in defaults.
//!
//! ```toml
//! [units]
//! min = 12
//! max = 16
//!
//! [preferences]
//! years = 2
//! start_term = "Fall"
//! include_winter = true
//! include_summer = false
//! major = "computer-science-adt"
//! transfer_university = "ucr"
//!
//! [[ge_categories]]
//! id = "RCCD GE Area 1A"
//! name = "Area 1A: English Composition"
//!
//! [agreements.ucr.computer-science-adt]
//! required = ["CIS-5", "MAT-1A"]
//! electives = ["PHY-4B"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{
    find_major, find_university, RequirementCatalog, Term, TransferAgreement, TransferAgreements,
};
use crate::units::UnitBand;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("invalid unit band [{min}, {max}] (expected 0 <= min <= max)")]
    InvalidUnitBand { min: f64, max: f64 },

    #[error("{0} catalog must contain at least one category")]
    EmptyCatalog(&'static str),

    #[error("duplicate category id {id:?} in {catalog} catalog")]
    DuplicateCategory { catalog: &'static str, id: String },

    #[error("plan duration must be at least one year, got {0}")]
    InvalidYears(u32),
}

/// What the student asked the plan to look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPreferences {
    /// Number of academic years the plan should span.
    pub years: u32,
    /// First term of year 1.
    pub start_term: Term,
    /// Whether Winter Intersession may hold courses.
    pub include_winter: bool,
    /// Whether Summer Intersession may hold courses.
    pub include_summer: bool,
    /// Intended major, as a value from [`crate::models::areas_of_study`].
    pub major: Option<String>,
    /// Target university, as a value from [`crate::models::transfer_universities`].
    pub transfer_university: Option<String>,
}

impl Default for PlanPreferences {
    fn default() -> Self {
        Self {
            years: 2,
            start_term: Term::Fall,
            include_winter: true,
            include_summer: true,
            major: None,
            transfer_university: None,
        }
    }
}

/// Full planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Unit band for regular terms.
    pub units: UnitBand,
    /// Student preferences.
    pub preferences: PlanPreferences,
    /// General-education catalog.
    pub ge_categories: RequirementCatalog,
    /// Transfer catalog.
    pub transfer_categories: RequirementCatalog,
    /// Articulation agreements by university and major.
    pub agreements: TransferAgreements,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            units: UnitBand::default(),
            preferences: PlanPreferences::default(),
            ge_categories: RequirementCatalog::general_education(),
            transfer_categories: RequirementCatalog::transfer(),
            agreements: TransferAgreements::builtin(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading planner config");
        Self::from_toml_str(&content)
    }

    /// Agreement for the preferred university and major, if both are set
    /// and an agreement exists for the pair.
    pub fn selected_agreement(&self) -> Option<&TransferAgreement> {
        let university = self.preferences.transfer_university.as_deref()?;
        let major = self.preferences.major.as_deref()?;
        self.agreements.get(university, major)
    }

    /// Checks the band, the catalogs and the preferences.
    ///
    /// Unknown university or major identifiers are logged, not rejected,
    /// so custom agreements can use their own keys.
    ///
    /// Catalogs sharing ids are accepted: a shared id is counted once in
    /// each catalog when computing fulfillment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.units.validate()?;

        if self.preferences.years == 0 {
            return Err(ConfigError::InvalidYears(0));
        }

        for (label, catalog) in [
            ("general-education", &self.ge_categories),
            ("transfer", &self.transfer_categories),
        ] {
            if catalog.is_empty() {
                return Err(ConfigError::EmptyCatalog(label));
            }
            if let Some(id) = catalog.first_duplicate() {
                return Err(ConfigError::DuplicateCategory {
                    catalog: label,
                    id: id.to_string(),
                });
            }
        }

        let shared = self.ge_categories.overlap(&self.transfer_categories);
        if !shared.is_empty() {
            tracing::warn!(
                shared = ?shared,
                "requirement catalogs share category ids; each is counted once per catalog"
            );
        }

        let university = self.preferences.transfer_university.as_deref();
        let major = self.preferences.major.as_deref();
        if let Some(u) = university.filter(|u| find_university(u).is_none()) {
            tracing::warn!(university = u, "unknown transfer university");
        }
        if let Some(m) = major.filter(|m| find_major(m).is_none()) {
            tracing::warn!(major = m, "unknown major");
        }
        if let (Some(u), Some(m)) = (university, major) {
            if u != "none" && self.selected_agreement().is_none() {
                tracing::warn!(university = u, major = m, "no transfer agreement for preferred pair");
            }
        }

        Ok(())
    }
}
