use crate::utils::error::{Result, ValidatorError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidatorError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ValidatorError::config(field_name, "At least one entry is required"));
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(ValidatorError::config(
                field_name,
                format!("Duplicate name: {}", name),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("batch.name", "numbers").is_ok());
        assert!(validate_non_empty_string("batch.name", "").is_err());
        assert!(validate_non_empty_string("batch.name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("checks", &[1]).is_ok());
        assert!(validate_non_empty_list::<i32>("checks", &[]).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("checks", ["a", "b", "c"]).is_ok());

        let err = validate_unique_names("checks", ["a", "b", "a"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate name: a"));
    }
}
