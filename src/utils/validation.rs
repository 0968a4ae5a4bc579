use crate::utils::error::{FlippError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FlippError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Case-insensitive membership check against a fixed set of accepted values.
/// Surrounding whitespace is ignored.
pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let trimmed = value.trim();
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(trimmed)) {
        return Ok(());
    }
    Err(FlippError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Value must be one of: {}", allowed.join(", ")),
    })
}
