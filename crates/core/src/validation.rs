//! Input rules for project, log and reward text fields.
//!
//! Used by the API handlers before anything reaches the database.

use crate::error::CoreError;

/// Maximum length of a project title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of any free-text body (description, log, reward).
pub const MAX_TEXT_LEN: usize = 10_000;

/// Validate a project title: required, non-blank, bounded.
///
/// Returns the trimmed title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a project description. Empty is allowed.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    check_length("Description", description)
}

/// Validate a required free-text field such as log content or a reward
/// description. `field` names the field in the error message.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_length(field, value)
}

fn check_length(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(validate_title("  Ship it  ").unwrap(), "Ship it");
    }

    #[test]
    fn blank_title_rejected() {
        let err = validate_title("   ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == "Title is required"));
    }

    #[test]
    fn overlong_title_rejected() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_title(&title).is_err());
        assert!(validate_title(&title[..MAX_TITLE_LEN]).is_ok());
    }

    #[test]
    fn empty_description_allowed() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn required_text_names_the_field() {
        let err = validate_required_text("Content", "\n").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == "Content is required"));
        assert!(validate_required_text("Content", "made progress").is_ok());
    }
}
