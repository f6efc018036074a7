//! Course model

use serde::{Deserialize, Serialize};

/// A named bundle referencing subsets of problems, topics, and contests
///
/// All references are loose identifier strings; deleting the referenced
/// record leaves the entry dangling rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Problem ids used by this course
    #[serde(default)]
    pub problems: Vec<String>,

    /// Topic names used by this course
    #[serde(default)]
    pub topics: Vec<String>,

    /// Contest names used by this course
    #[serde(default)]
    pub contests: Vec<String>,
}
