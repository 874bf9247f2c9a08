//! Data models for `skillgraph`

pub mod catalog;
pub mod competency;
pub mod dataset;
pub mod relations;

pub use catalog::SkillCatalog;
pub use competency::Competency;
pub use dataset::Dataset;
pub use relations::{RelationKind, RelationMap};
