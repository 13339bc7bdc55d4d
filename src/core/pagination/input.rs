//! Host-owned pagination inputs.

use crate::error::PaginationError;
use serde::{Deserialize, Serialize};

/// Number of page buttons exposed when the host does not say otherwise.
pub const DEFAULT_MAX_PAGE_BUTTONS: i64 = 5;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// The four values a host feeds into the engine.
///
/// `current_page` may hold any integer: out-of-range pages are tolerated by
/// the arithmetic. `page_size >= 1`, `total_items >= 0` and
/// `max_page_buttons >= 1` are preconditions; [`PaginationInput::new`] and
/// [`PaginationInput::validate`] check them, direct field writes do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInput {
    pub current_page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub max_page_buttons: i64,
}

impl PaginationInput {
    /// Create a validated input with the default page-button count.
    pub fn new(current_page: i64, page_size: i64, total_items: i64) -> Result<Self, PaginationError> {
        let input = Self {
            current_page,
            page_size,
            total_items,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
        };
        input.validate()?;
        Ok(input)
    }

    /// Replace the page-button count, rejecting values below 1.
    pub fn with_max_page_buttons(mut self, max_page_buttons: i64) -> Result<Self, PaginationError> {
        self.max_page_buttons = max_page_buttons;
        self.validate()?;
        Ok(self)
    }

    /// Check the caller-side preconditions.
    ///
    /// `current_page` is deliberately not checked.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size < 1 {
            return Err(PaginationError::InvalidPageSize {
                value: self.page_size,
            });
        }
        if self.total_items < 0 {
            return Err(PaginationError::InvalidTotalItems {
                value: self.total_items,
            });
        }
        if self.max_page_buttons < 1 {
            return Err(PaginationError::InvalidMaxPageButtons {
                value: self.max_page_buttons,
            });
        }
        Ok(())
    }
}

impl Default for PaginationInput {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
        }
    }
}
