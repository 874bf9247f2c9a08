//! Bidirectional competency/skill relation index

use super::Dataset;
use std::collections::HashMap;

/// Strength of a competency→skill relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Skill from the competency's main list
    Main,
    /// Skill from the competency's other list
    Other,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Prebuilt index of competency↔skill relations
///
/// Uses two association lists:
/// - `by_competency`: maps each competency to its declared skill relations
/// - `by_skill`: maps each skill to the competencies declaring it (reverse map)
///
/// This bidirectional structure makes highlight derivation a pair of lookups
/// instead of a rescan of the whole dataset. Entries keep declaration order:
/// competencies in dataset order, and each competency's main relations before
/// its other relations. One entry is kept per declaration; nothing is
/// deduplicated here.
#[derive(Debug, Clone, Default)]
pub struct RelationMap {
    /// Maps competency name -> (skill name, kind) in declaration order
    by_competency: HashMap<String, Vec<(String, RelationKind)>>,

    /// Maps skill name -> (competency name, kind) in declaration order
    by_skill: HashMap<String, Vec<(String, RelationKind)>>,

    /// Competency names in declaration order (for ordered traversal)
    competencies: Vec<String>,
}

impl RelationMap {
    /// Create a new empty relation map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a dataset
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut map = Self::new();

        for competency in dataset.competencies() {
            map.add_competency(competency.name.clone());
            for skill in &competency.main_skills {
                map.add_relation(&competency.name, skill, RelationKind::Main);
            }
            for skill in &competency.other_skills {
                map.add_relation(&competency.name, skill, RelationKind::Other);
            }
        }

        map
    }

    /// Add a competency to the index
    pub fn add_competency(&mut self, name: String) {
        if !self.competencies.contains(&name) {
            self.competencies.push(name.clone());
            self.by_competency.entry(name).or_default();
        }
    }

    /// Add a relation between a competency and a skill
    pub fn add_relation(&mut self, competency: &str, skill: &str, kind: RelationKind) {
        self.add_competency(competency.to_string());

        if let Some(relations) = self.by_competency.get_mut(competency) {
            relations.push((skill.to_string(), kind));
        }

        self.by_skill
            .entry(skill.to_string())
            .or_default()
            .push((competency.to_string(), kind));
    }

    /// Get all skill relations declared by a competency
    ///
    /// # Returns
    /// A reference to the (skill, kind) list, or None if the competency is unknown
    #[must_use]
    pub fn skills_of(&self, competency: &str) -> Option<&Vec<(String, RelationKind)>> {
        self.by_competency.get(competency)
    }

    /// Get all competencies declaring a given skill
    ///
    /// # Returns
    /// A reference to the (competency, kind) list, or None if the skill is unknown
    #[must_use]
    pub fn competencies_of(&self, skill: &str) -> Option<&Vec<(String, RelationKind)>> {
        self.by_skill.get(skill)
    }

    /// Check whether a competency declares a given skill (either list)
    #[must_use]
    pub fn relates(&self, competency: &str, skill: &str) -> bool {
        self.by_competency
            .get(competency)
            .is_some_and(|relations| relations.iter().any(|(s, _)| s == skill))
    }

    /// Get the number of indexed competencies
    #[must_use]
    pub const fn competency_count(&self) -> usize {
        self.competencies.len()
    }

    /// Get the total number of indexed relations
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.by_competency.values().map(Vec::len).sum()
    }
}

impl std::fmt::Display for RelationMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Relation map ({} competencies):", self.competencies.len())?;
        writeln!(f)?;

        for competency in &self.competencies {
            if let Some(relations) = self.by_competency.get(competency) {
                if relations.is_empty() {
                    writeln!(f, "  {competency} → (no skills)")?;
                } else {
                    let relations_str = relations
                        .iter()
                        .map(|(skill, kind)| format!("{skill} ({kind})"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(f, "  {competency} → {relations_str}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Competency;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::new();

        let mut management = Competency::new("Project management".to_string());
        management.add_main_skill("Planning".to_string());
        management.add_other_skill("Reporting".to_string());
        dataset.add_competency(management);

        let mut analysis = Competency::new("Business analysis".to_string());
        analysis.add_main_skill("Reporting".to_string());
        dataset.add_competency(analysis);

        dataset
    }

    #[test]
    fn test_build_from_dataset() {
        let map = RelationMap::from_dataset(&sample_dataset());

        assert_eq!(map.competency_count(), 2);
        assert_eq!(map.relation_count(), 3);
    }

    #[test]
    fn test_skills_of() {
        let map = RelationMap::from_dataset(&sample_dataset());

        let relations = map.skills_of("Project management").unwrap();
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0], ("Planning".to_string(), RelationKind::Main));
        assert_eq!(relations[1], ("Reporting".to_string(), RelationKind::Other));

        assert!(map.skills_of("Unknown").is_none());
    }

    #[test]
    fn test_competencies_of_keeps_declaration_order() {
        let map = RelationMap::from_dataset(&sample_dataset());

        let relations = map.competencies_of("Reporting").unwrap();
        assert_eq!(relations.len(), 2);
        assert_eq!(
            relations[0],
            ("Project management".to_string(), RelationKind::Other)
        );
        assert_eq!(
            relations[1],
            ("Business analysis".to_string(), RelationKind::Main)
        );
    }

    #[test]
    fn test_relates() {
        let map = RelationMap::from_dataset(&sample_dataset());

        assert!(map.relates("Project management", "Planning"));
        assert!(map.relates("Project management", "Reporting"));
        assert!(!map.relates("Business analysis", "Planning"));
    }

    #[test]
    fn test_display() {
        let map = RelationMap::from_dataset(&sample_dataset());

        let display = format!("{map}");
        assert!(display.contains("Relation map"));
        assert!(display.contains("Project management → Planning (main), Reporting (other)"));
    }

    #[test]
    fn test_competency_without_skills() {
        let mut dataset = Dataset::new();
        dataset.add_competency(Competency::new("Empty".to_string()));
        let map = RelationMap::from_dataset(&dataset);

        let display = format!("{map}");
        assert!(display.contains("Empty → (no skills)"));
        assert_eq!(map.skills_of("Empty").map(Vec::len), Some(0));
    }
}
