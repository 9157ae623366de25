//! Note field constants and validation functions.
//!
//! Validation runs in the handler layer before any repository call, so a
//! rejected request never touches the store.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of note content in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: must be non-empty (after trimming) and within the
/// length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content: must be non-empty (after trimming) and within the
/// length limit.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Content must not be empty".to_string());
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}
