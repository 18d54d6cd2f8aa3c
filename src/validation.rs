use std::num::NonZeroUsize;

use crate::error::{MktError, MktResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> MktResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(MktError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a count is positive (> 0).
pub fn positive(value: usize, field: &str) -> MktResult<usize> {
    if value == 0 {
        Err(MktError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Like `positive`, for sizes the caller keeps as `NonZeroUsize`.
pub fn non_zero(value: usize, field: &str) -> MktResult<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| MktError::NonPositive {
        field: field.to_string(),
    })
}

/// Validates an optional positive count (None is valid, Some(n) must be positive).
pub fn optional_positive(value: Option<usize>, field: &str) -> MktResult<Option<usize>> {
    match value {
        None => Ok(None),
        Some(n) => positive(n, field).map(Some),
    }
}

/// Loose email check: non-blank with something on both sides of a single '@'.
pub fn email(value: &str, field: &str) -> MktResult<String> {
    let trimmed = non_blank(value, field)?;
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(trimmed)
        }
        _ => Err(MktError::InvalidField {
            field: field.to_string(),
            reason: format!("'{}' is not an email address", trimmed),
        }),
    }
}

/// Parses a positive count from user or environment input.
pub fn parse_positive(value: &str, field: &str) -> MktResult<usize> {
    let n: usize = value.trim().parse().map_err(|_| MktError::InvalidField {
        field: field.to_string(),
        reason: format!("'{}' is not a number", value.trim()),
    })?;
    positive(n, field)
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
