//! API handlers
//!
//! Author: hephaex@gmail.com

pub mod health;
pub mod parse;
pub mod spellcheck;
pub mod word;

use crate::error::AppError;

/// Value of a required query parameter; absent or blank values are rejected
pub(crate) fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::missing_param(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(Some("dog".into()), "word").unwrap(), "dog");
        assert!(required(Some("  ".into()), "word").is_err());
        assert!(required(None, "word").is_err());
    }
}
