//! Input validation utilities

use crate::constants::{MAX_NAME_LENGTH, MAX_PATH_LENGTH};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize an entity name or problem identifier
pub fn normalize_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Name cannot be empty");
    }
    if sanitized.len() > MAX_NAME_LENGTH as usize {
        return Err("Name must be at most 256 characters");
    }
    Ok(sanitized)
}

/// Sanitize an optional field; blank input clears the value
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_string)
        .filter(|s| !s.is_empty())
}

/// Validate a stored resource/solution path.
///
/// Paths are kept relative to the configured files directory and may not
/// escape it.
pub fn validate_relative_path(path: &str) -> Result<(), &'static str> {
    if path.len() > MAX_PATH_LENGTH as usize {
        return Err("Path must be at most 1024 characters");
    }

    let parsed = std::path::Path::new(path);
    if parsed.is_absolute() {
        return Err("Path must be relative to the files directory");
    }
    if parsed
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err("Path may not contain '..' components");
    }

    Ok(())
}
