//! Contest request DTOs

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    /// Edition year; a non-numeric value degrades to absent instead of
    /// failing the request
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i64>,

    /// Category label; blank means uncategorized
    pub category: Option<String>,
}

/// Update contest request
///
/// An absent `name`/`category` keeps the stored value; `year` is always
/// replaced since a malformed value is indistinguishable from an absent one.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i64>,

    pub category: Option<String>,
}

/// Accept a year as a JSON number or numeric string; anything else becomes
/// `None`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearInput {
        Int(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<YearInput>::deserialize(deserializer)? {
        Some(YearInput::Int(year)) => Some(year),
        Some(YearInput::Text(s)) => s.trim().parse().ok(),
        Some(YearInput::Other(_)) | None => None,
    })
}
