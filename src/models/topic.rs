//! Topic model

use serde::{Deserialize, Serialize};

/// A study topic with a manually ranked display position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic name
    pub name: String,

    /// Optional grouping category for the topic forms
    #[serde(default)]
    pub category: Option<String>,

    /// Display rank; lower ranks sort first
    pub rank: i64,

    /// Optional reference-material file, relative to the files directory
    #[serde(default)]
    pub resource_path: Option<String>,
}
