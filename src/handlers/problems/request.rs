//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PATH_LENGTH, MAX_TAG_LENGTH, MAX_URL_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub id: String,

    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: String,

    /// Loose reference to a contest name
    pub contest: Option<String>,

    /// Loose, ordered references to topic names
    #[serde(default)]
    pub topics: Vec<String>,

    /// Solution file, relative to the files directory
    #[validate(length(max = MAX_PATH_LENGTH))]
    pub solution_path: Option<String>,

    #[validate(length(max = MAX_TAG_LENGTH))]
    #[serde(default)]
    pub tag: String,
}

/// Update problem request
///
/// Absent fields keep their stored value; blank `contest`/`solution_path`
/// clear it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: Option<String>,

    pub contest: Option<String>,

    pub topics: Option<Vec<String>>,

    #[validate(length(max = MAX_PATH_LENGTH))]
    pub solution_path: Option<String>,

    #[validate(length(max = MAX_TAG_LENGTH))]
    pub tag: Option<String>,
}
