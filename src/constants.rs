//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default directory for the JSON catalog documents
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default base directory for topic resources and problem solutions
pub const DEFAULT_FILES_DIR: &str = ".";

/// Catalog document file names
pub mod documents {
    pub const TOPICS: &str = "topics.json";
    pub const CONTESTS: &str = "contests.json";
    pub const CONTEST_CATEGORIES: &str = "contest_categories.json";
    pub const PROBLEMS: &str = "problems.json";
    pub const COURSES: &str = "courses.json";
}

// =============================================================================
// CATALOG SENTINELS
// =============================================================================

/// Display category for contests that carry no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group name for problems with no topic references
pub const NO_PRINCIPAL_TOPIC: &str = "No principal topic";

/// Tag value that sorts a problem to the front of its group
/// (compared trimmed, case-insensitive)
pub const INTRODUCTORY_TAG: &str = "introductorio";

/// Rank assigned to topic references that no longer resolve
pub const UNKNOWN_TOPIC_RANK: i64 = -1;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length for entity names and problem identifiers
pub const MAX_NAME_LENGTH: u64 = 256;

/// Maximum course description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum problem URL length
pub const MAX_URL_LENGTH: u64 = 2048;

/// Maximum problem tag length
pub const MAX_TAG_LENGTH: u64 = 64;

/// Maximum length for stored resource/solution file paths
pub const MAX_PATH_LENGTH: u64 = 1024;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
