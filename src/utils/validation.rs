use crate::domain::model::PatternKind;
use crate::utils::error::{PatternError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatternError::InvalidConfigValueError {
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
        return Err(PatternError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Every name must parse as a [`PatternKind`]; duplicates are rejected.
pub fn validate_pattern_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = Vec::with_capacity(names.len());
    for name in names {
        let kind: PatternKind = name.parse()?;
        if seen.contains(&kind) {
            return Err(PatternError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Pattern listed more than once".to_string(),
            });
        }
        seen.push(kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("proxy.max_allowed_requests", 2, 1).is_ok());
        assert!(validate_positive_number("proxy.max_allowed_requests", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("port", 8080u32, 1, 65535).is_ok());
        assert!(validate_range("port", 0u32, 1, 65535).is_err());
    }

    #[test]
    fn test_validate_pattern_names() {
        let names = vec!["proxy".to_string(), "memento".to_string()];
        assert!(validate_pattern_names("catalog.patterns", &names).is_ok());

        let unknown = vec!["bridge".to_string()];
        assert!(matches!(
            validate_pattern_names("catalog.patterns", &unknown),
            Err(PatternError::UnknownPattern { .. })
        ));

        let duplicated = vec!["proxy".to_string(), "proxy".to_string()];
        assert!(validate_pattern_names("catalog.patterns", &duplicated).is_err());
    }
}
