//! Contest and contest category models

use serde::{Deserialize, Serialize};

use crate::constants::UNCATEGORIZED;

/// A competitive event, optionally year- and category-tagged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    /// Unique contest name
    pub name: String,

    /// Edition year, if known
    #[serde(default)]
    pub year: Option<i64>,

    /// Category label; blank or absent displays as [`UNCATEGORIZED`]
    #[serde(default)]
    pub category: Option<String>,
}

impl Contest {
    /// The category label this contest displays under
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }
}

/// A rankable contest category
///
/// The stored category set is reconciled on every read so it always covers
/// the labels appearing on contests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestCategory {
    /// Unique category name
    pub name: String,

    /// Display rank; lower ranks sort first
    pub rank: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_falls_back_to_sentinel() {
        let mut contest = Contest {
            name: "Regional".to_string(),
            year: Some(2024),
            category: None,
        };
        assert_eq!(contest.category_label(), UNCATEGORIZED);

        contest.category = Some("  ".to_string());
        assert_eq!(contest.category_label(), UNCATEGORIZED);

        contest.category = Some("ICPC".to_string());
        assert_eq!(contest.category_label(), "ICPC");
    }
}
