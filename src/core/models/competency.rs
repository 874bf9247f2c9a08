//! Competency model

use serde::{Deserialize, Serialize};

/// Represents a competency and the skills associated with it
///
/// A competency carries two skill lists: "main" skills strongly associated
/// with it and "other" skills weakly associated with it. Skill names are plain
/// strings; the skills themselves only exist through these lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    /// Competency name (e.g., "Backend development"), unique across a dataset
    pub name: String,

    /// Strongly associated skill names
    #[serde(default, alias = "mainSkills")]
    pub main_skills: Vec<String>,

    /// Weakly associated skill names
    #[serde(default, alias = "otherSkills")]
    pub other_skills: Vec<String>,
}

impl Competency {
    /// Create a new competency with empty skill lists
    ///
    /// # Arguments
    /// * `name` - Competency name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            main_skills: Vec::new(),
            other_skills: Vec::new(),
        }
    }

    /// Add a main skill by name
    pub fn add_main_skill(&mut self, skill: String) {
        if !self.main_skills.contains(&skill) {
            self.main_skills.push(skill);
        }
    }

    /// Add an other skill by name
    pub fn add_other_skill(&mut self, skill: String) {
        if !self.other_skills.contains(&skill) {
            self.other_skills.push(skill);
        }
    }

    /// Iterate over all skill names, main skills before other skills
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.main_skills
            .iter()
            .chain(self.other_skills.iter())
            .map(String::as_str)
    }

    /// Check whether a skill appears on either list
    #[must_use]
    pub fn mentions(&self, skill: &str) -> bool {
        self.main_skills.iter().any(|s| s == skill)
            || self.other_skills.iter().any(|s| s == skill)
    }

    /// Get the total number of declared skill relations
    #[must_use]
    pub const fn relation_count(&self) -> usize {
        self.main_skills.len() + self.other_skills.len()
    }
}
