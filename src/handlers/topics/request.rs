//! Topic request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PATH_LENGTH};

/// Create topic request
///
/// The display rank is assigned by the service (one past the current
/// maximum), never by the client.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    /// Grouping category; blank means none
    pub category: Option<String>,

    /// Reference-material file, relative to the files directory
    #[validate(length(max = MAX_PATH_LENGTH))]
    pub resource_path: Option<String>,
}

/// Update topic request
///
/// Absent fields keep their stored value; blank `category`/`resource_path`
/// clear it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    pub category: Option<String>,

    #[validate(length(max = MAX_PATH_LENGTH))]
    pub resource_path: Option<String>,
}
