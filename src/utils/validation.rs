use crate::utils::error::{Result, SwimError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SwimError::ValidationError {
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
        return Err(SwimError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("breed", "Mallard").is_ok());
        assert!(validate_non_empty_string("breed", "").is_err());
        assert!(validate_non_empty_string("breed", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("repeat", 1usize, 1, 1000).is_ok());
        assert!(validate_range("repeat", 1000usize, 1, 1000).is_ok());
        assert!(validate_range("repeat", 0usize, 1, 1000).is_err());
        assert!(validate_range("repeat", 1001usize, 1, 1000).is_err());
    }
}
