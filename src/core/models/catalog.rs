//! Flattened skill catalog

use super::Dataset;
use std::collections::HashMap;

/// Flattened view of a dataset: competency names, deduplicated skill names,
/// and a skill name → ring position lookup
///
/// Skills are interned in first-seen order, scanning competencies in
/// declaration order and each competency's main skills before its other
/// skills. The combined node list places competencies at indices `[0, C)` and
/// skills at `[C, C+S)`; those ranges never overlap.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    /// Competency names in declaration order
    competencies: Vec<String>,

    /// Deduplicated skill names in first-seen order
    skills: Vec<String>,

    /// Maps skill name -> position within the skill ring
    skill_index: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Flatten a dataset into a catalog
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut catalog = Self {
            competencies: Vec::with_capacity(dataset.competency_count()),
            skills: Vec::new(),
            skill_index: HashMap::new(),
        };

        for competency in dataset.competencies() {
            catalog.competencies.push(competency.name.clone());
            for skill in competency.skills() {
                catalog.intern_skill(skill);
            }
        }

        catalog
    }

    /// Record a skill the first time it is seen
    fn intern_skill(&mut self, name: &str) {
        if !self.skill_index.contains_key(name) {
            self.skill_index
                .insert(name.to_string(), self.skills.len());
            self.skills.push(name.to_string());
        }
    }

    /// Get competency names in ring order
    #[must_use]
    pub fn competencies(&self) -> &[String] {
        &self.competencies
    }

    /// Get skill names in ring order
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Get the number of competencies
    #[must_use]
    pub const fn competency_count(&self) -> usize {
        self.competencies.len()
    }

    /// Get the number of distinct skills
    #[must_use]
    pub const fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Get the total number of graph nodes (competencies plus skills)
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.competencies.len() + self.skills.len()
    }

    /// Get a skill's position within the skill ring
    #[must_use]
    pub fn skill_position(&self, name: &str) -> Option<usize> {
        self.skill_index.get(name).copied()
    }

    /// Get a skill's index within the combined node list
    ///
    /// Skill nodes follow the competency nodes, so this is the ring position
    /// offset by the competency count.
    #[must_use]
    pub fn skill_node_index(&self, name: &str) -> Option<usize> {
        self.skill_position(name)
            .map(|position| self.competencies.len() + position)
    }

    /// Get a competency's position within the competency ring
    ///
    /// Competency nodes lead the combined node list, so this is also the
    /// combined node index.
    #[must_use]
    pub fn competency_position(&self, name: &str) -> Option<usize> {
        self.competencies.iter().position(|c| c == name)
    }

    /// Check whether a name refers to a competency
    #[must_use]
    pub fn contains_competency(&self, name: &str) -> bool {
        self.competencies.iter().any(|c| c == name)
    }

    /// Check whether a name refers to a skill
    #[must_use]
    pub fn contains_skill(&self, name: &str) -> bool {
        self.skill_index.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Competency;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::new();

        let mut design = Competency::new("Interface design".to_string());
        design.add_main_skill("Figma".to_string());
        design.add_main_skill("Prototyping".to_string());
        design.add_other_skill("HTML".to_string());
        dataset.add_competency(design);

        let mut frontend = Competency::new("Frontend development".to_string());
        frontend.add_main_skill("HTML".to_string());
        frontend.add_main_skill("TypeScript".to_string());
        frontend.add_other_skill("Figma".to_string());
        dataset.add_competency(frontend);

        dataset
    }

    #[test]
    fn test_skills_deduplicated_first_seen() {
        let catalog = SkillCatalog::from_dataset(&sample_dataset());

        // "HTML" first appears as an other skill of "Interface design";
        // "Figma" as its first main skill.
        assert_eq!(
            catalog.skills(),
            &["Figma", "Prototyping", "HTML", "TypeScript"]
        );
    }

    #[test]
    fn test_main_skills_interned_before_other_skills() {
        let catalog = SkillCatalog::from_dataset(&sample_dataset());

        assert_eq!(catalog.skill_position("Figma"), Some(0));
        assert_eq!(catalog.skill_position("HTML"), Some(2));
    }

    #[test]
    fn test_node_index_ranges() {
        let catalog = SkillCatalog::from_dataset(&sample_dataset());

        assert_eq!(catalog.competency_count(), 2);
        assert_eq!(catalog.skill_count(), 4);
        assert_eq!(catalog.node_count(), 6);

        assert_eq!(catalog.competency_position("Interface design"), Some(0));
        assert_eq!(catalog.competency_position("Frontend development"), Some(1));

        // Skill node indices start where competency indices end
        assert_eq!(catalog.skill_node_index("Figma"), Some(2));
        assert_eq!(catalog.skill_node_index("TypeScript"), Some(5));
    }

    #[test]
    fn test_missing_lookups() {
        let catalog = SkillCatalog::from_dataset(&sample_dataset());

        assert_eq!(catalog.skill_position("Rust"), None);
        assert_eq!(catalog.skill_node_index("Rust"), None);
        assert_eq!(catalog.competency_position("Gardening"), None);
    }

    #[test]
    fn test_category_membership() {
        let catalog = SkillCatalog::from_dataset(&sample_dataset());

        assert!(catalog.contains_competency("Interface design"));
        assert!(!catalog.contains_competency("Figma"));
        assert!(catalog.contains_skill("Figma"));
        assert!(!catalog.contains_skill("Interface design"));
    }

    #[test]
    fn test_empty_dataset() {
        let catalog = SkillCatalog::from_dataset(&Dataset::new());

        assert_eq!(catalog.competency_count(), 0);
        assert_eq!(catalog.skill_count(), 0);
        assert_eq!(catalog.node_count(), 0);
    }
}
