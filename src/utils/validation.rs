use crate::utils::error::{HarnessError, Result};

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 25;
pub const DAY_PLACEHOLDER: &str = "{day}";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_day(field_name: &str, day: u8) -> Result<()> {
    validate_range(field_name, day, FIRST_DAY, LAST_DAY)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// File name patterns must carry exactly one `{day}` placeholder.
pub fn validate_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_path(field_name, pattern)?;

    match pattern.matches(DAY_PLACEHOLDER).count() {
        1 => {}
        0 => {
            return Err(HarnessError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: pattern.to_string(),
                reason: format!("Pattern must contain {}", DAY_PLACEHOLDER),
            })
        }
        _ => {
            return Err(HarnessError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: pattern.to_string(),
                reason: format!("Pattern must contain {} only once", DAY_PLACEHOLDER),
            })
        }
    }

    if pattern.contains('/') || pattern.contains('\\') {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern is a file name; put directories in the dir setting".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| HarnessError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
