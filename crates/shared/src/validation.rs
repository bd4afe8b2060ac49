//! Common validation utilities.

use validator::ValidationError;

/// Validates that a required text field contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}
