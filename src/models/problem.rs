//! Problem model

use serde::{Deserialize, Serialize};

use crate::constants::INTRODUCTORY_TAG;

/// A practice problem linked to zero or more topics and at most one contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Unique problem identifier
    pub id: String,

    /// Link to the problem statement
    pub url: String,

    /// Loose reference to a contest name; never validated against the
    /// contest collection
    #[serde(default)]
    pub contest: Option<String>,

    /// Loose, ordered references to topic names; dangling entries are
    /// tolerated everywhere
    #[serde(default)]
    pub topics: Vec<String>,

    /// Optional solution file, relative to the files directory
    #[serde(default)]
    pub solution_path: Option<String>,

    /// Free-form tag; [`INTRODUCTORY_TAG`] has sorting significance
    #[serde(default)]
    pub tag: String,
}

impl Problem {
    /// Whether this problem sorts to the front of its display group
    pub fn is_introductory(&self) -> bool {
        self.tag.trim().eq_ignore_ascii_case(INTRODUCTORY_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem_with_tag(tag: &str) -> Problem {
        Problem {
            id: "p1".to_string(),
            url: "https://example.com/p1".to_string(),
            contest: None,
            topics: Vec::new(),
            solution_path: None,
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_is_introductory() {
        assert!(problem_with_tag("introductorio").is_introductory());
        assert!(problem_with_tag("Introductorio").is_introductory());
        assert!(problem_with_tag("  INTRODUCTORIO  ").is_introductory());
        assert!(!problem_with_tag("intro").is_introductory());
        assert!(!problem_with_tag("").is_introductory());
    }
}
