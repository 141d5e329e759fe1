//! Shared field validators.

use crate::error::ValidationError;

/// Trim a text field, rejecting empty-after-trim values
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Reject zero for counts that must be strictly positive
pub fn positive(field: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::new(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Reject values above an inclusive upper bound
pub fn at_most(field: &'static str, value: u32, max: u32) -> Result<u32, ValidationError> {
    if value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between 0 and {}, got {}", max, value),
        ));
    }
    Ok(value)
}

/// Match `input` case-insensitively against a fixed set of spellings
pub(crate) fn canonical<T: Copy>(
    field: &'static str,
    input: &str,
    choices: &[(&str, T)],
) -> Result<T, ValidationError> {
    let wanted = required_text(field, input)?;
    choices
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(&wanted))
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let allowed: Vec<&str> = choices.iter().map(|(s, _)| *s).collect();
            ValidationError::new(
                field,
                format!("{:?} is not one of {}", wanted, allowed.join(", ")),
            )
        })
}
