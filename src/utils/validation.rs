//! Input validation and parsing utilities
//!
//! Host-side checks for the values the pagination engine takes on trust:
//! page sizes, item totals, page-button counts, plus parsers for the string
//! forms used by `config set`.

use crate::error::{PaginationError, UtilsError};

/// Page size must be at least 1
pub fn validate_page_size(page_size: i64) -> crate::Result<()> {
    if page_size < 1 {
        return Err(PaginationError::InvalidPageSize { value: page_size }.into());
    }
    Ok(())
}

/// Total item count cannot be negative
pub fn validate_total_items(total_items: i64) -> crate::Result<()> {
    if total_items < 0 {
        return Err(PaginationError::InvalidTotalItems { value: total_items }.into());
    }
    Ok(())
}

/// At least one page button must be shown
pub fn validate_max_page_buttons(max_page_buttons: i64) -> crate::Result<()> {
    if max_page_buttons < 1 {
        return Err(PaginationError::InvalidMaxPageButtons {
            value: max_page_buttons,
        }
        .into());
    }
    Ok(())
}

/// Parse a comma-separated page size list such as `"10, 20, 50"`.
///
/// The result is sorted and deduplicated.
pub fn parse_page_size_options(raw: &str) -> crate::Result<Vec<i64>> {
    let mut sizes = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let size: i64 = part.parse().map_err(|_| UtilsError::InputProcessing {
            message: format!("'{}' is not a page size", part),
        })?;
        validate_page_size(size)?;
        sizes.push(size);
    }

    if sizes.is_empty() {
        return Err(UtilsError::Validation {
            message: "page size list cannot be empty".to_string(),
        }
        .into());
    }

    sizes.sort_unstable();
    sizes.dedup();
    Ok(sizes)
}

/// Parse a boolean flag value (`true/false`, `yes/no`, `on/off`, `1/0`).
pub fn parse_bool(raw: &str) -> crate::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(UtilsError::InputProcessing {
            message: format!("'{}' is not a boolean", other),
        }
        .into()),
    }
}
