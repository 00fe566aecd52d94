//! Assessment profile configuration.
//!
//! The impact dimensions an organization assesses are configuration, not
//! code: the engine scans whatever dimension set the profile names. The
//! reference profile carries the five dimensions the assessment templates
//! ship with, and organizations override the set per deployment via a
//! TOML profile file.
//!
//! Validation is fail-closed: an empty or duplicated dimension set is
//! rejected at parse time rather than producing silently-wrong
//! completeness reports later.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matrix::ImpactType;

/// Dimension names used when a deployment does not override the set.
const REFERENCE_IMPACT_TYPES: [&str; 5] = [
    "Financial",
    "Operational",
    "Legal/Regulatory",
    "Reputational",
    "Customer",
];

/// Errors from profile loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error reading the profile file.
    #[error("failed to read assessment profile: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("failed to parse assessment profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error.
    #[error("assessment profile validation failed: {0}")]
    Validation(String),
}

/// The organization's assessment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    /// Impact dimensions scored by this organization's assessments.
    #[serde(default = "reference_impact_types")]
    pub impact_types: Vec<ImpactType>,
}

impl AssessmentProfile {
    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML is invalid
    /// - The impact-type set is empty
    /// - The impact-type set contains duplicates
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validates the profile.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.impact_types.is_empty() {
            return Err(ConfigError::Validation(
                "impact_types must name at least one dimension".to_string(),
            ));
        }

        let mut seen = std::collections::BTreeSet::new();
        for impact_type in &self.impact_types {
            if !seen.insert(impact_type) {
                return Err(ConfigError::Validation(format!(
                    "duplicate impact type '{impact_type}'"
                )));
            }
        }

        Ok(())
    }
}

impl Default for AssessmentProfile {
    fn default() -> Self {
        Self {
            impact_types: reference_impact_types(),
        }
    }
}

fn reference_impact_types() -> Vec<ImpactType> {
    REFERENCE_IMPACT_TYPES
        .iter()
        .copied()
        .map(ImpactType::new)
        .collect()
}
