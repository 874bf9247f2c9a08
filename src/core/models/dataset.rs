//! Dataset model and file loading

use super::Competency;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// An ordered collection of competencies
///
/// The dataset is the single input of the whole pipeline. Competency order is
/// significant: it determines node index assignment and skill first-seen
/// ordering. The dataset is never mutated after loading; everything else is
/// derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Competencies in declaration order
    #[serde(default, rename = "competency")]
    competencies: Vec<Competency>,
}

impl Dataset {
    /// Create a new empty dataset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            competencies: Vec::new(),
        }
    }

    /// Add a competency, preserving declaration order
    pub fn add_competency(&mut self, competency: Competency) {
        self.competencies.push(competency);
    }

    /// Get all competencies in declaration order
    #[must_use]
    pub fn competencies(&self) -> &[Competency] {
        &self.competencies
    }

    /// Get a competency by name
    #[must_use]
    pub fn get_competency(&self, name: &str) -> Option<&Competency> {
        self.competencies.iter().find(|c| c.name == name)
    }

    /// Get the number of competencies
    #[must_use]
    pub const fn competency_count(&self) -> usize {
        self.competencies.len()
    }

    /// Check whether the dataset has no competencies
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.competencies.is_empty()
    }

    /// Parse a dataset from a TOML string (`[[competency]]` tables)
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse a dataset from a JSON string (array of competency objects)
    ///
    /// Both `main_skills`/`other_skills` and the camelCase spellings
    /// `mainSkills`/`otherSkills` are accepted.
    ///
    /// # Errors
    /// Returns an error if the JSON cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_json_str(json_str: &str) -> Result<Self, serde_json::Error> {
        let competencies: Vec<Competency> = serde_json::from_str(json_str)?;
        Ok(Self { competencies })
    }

    /// Load a dataset from a file, choosing the format by extension
    ///
    /// `.toml` files are parsed as `[[competency]]` tables and `.json` files
    /// as an array of competency objects.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "toml" => Ok(Self::from_toml_str(&content)?),
            "json" => Ok(Self::from_json_str(&content)?),
            _ => Err(format!(
                "Unsupported dataset format '{extension}'. Use: toml or json"
            )
            .into()),
        }
    }

    /// Get the total number of declared skill relations across all competencies
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.competencies.iter().map(Competency::relation_count).sum()
    }
}
