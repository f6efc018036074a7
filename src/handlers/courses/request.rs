//! Course request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// Create course request
///
/// New courses start with empty reference lists; use the assignments
/// endpoint to fill them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    #[serde(default)]
    pub description: String,
}

/// Update course request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,
}

/// Replace a course's reference lists.
///
/// References are loose identifiers; they are not checked against the
/// other collections.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceAssignmentsRequest {
    #[serde(default)]
    pub problems: Vec<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub contests: Vec<String>,
}
