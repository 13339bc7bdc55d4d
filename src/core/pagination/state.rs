//! Derived pagination state.

use super::input::PaginationInput;
use super::window::visible_page_numbers;
use serde::{Deserialize, Serialize};

/// Everything a consumer reads from the engine.
///
/// Always produced by [`compute_state`]; never edited in place, so it cannot
/// drift from the input it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    /// 1-based first item on the current page, `None` when there are no items.
    pub start_item: Option<i64>,
    /// 1-based last item on the current page, `None` when there are no items.
    pub end_item: Option<i64>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub visible_page_numbers: Vec<i64>,
}

impl PaginationState {
    /// True when the current page falls inside `[1, total_pages]`.
    pub fn is_current_page_in_range(&self) -> bool {
        (1..=self.total_pages).contains(&self.current_page)
    }

    /// Number of items the current page actually shows.
    pub fn item_count_on_page(&self) -> i64 {
        match (self.start_item, self.end_item) {
            (Some(start), Some(end)) => end.saturating_sub(start.max(1)).saturating_add(1).max(0),
            _ => 0,
        }
    }
}

/// Page count for `total_items` split into pages of `page_size`.
///
/// Never less than 1: an empty list is one empty page.
///
/// # Panics
///
/// Panics when `page_size` is 0 and there are items to split; callers
/// validate it first.
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items <= 0 {
        return 1;
    }
    total_items / page_size + i64::from(total_items % page_size != 0)
}

/// Recompute the derived state from the current input.
///
/// Pure and deterministic. Out-of-range `current_page` values produce
/// out-of-range item bounds instead of an error; bounds saturate at the
/// `i64` limits for extreme pages.
///
/// # Panics
///
/// Panics when `input.page_size` is 0 and `input.total_items` is positive
/// (see [`PaginationInput::validate`]).
pub fn compute_state(input: &PaginationInput) -> PaginationState {
    let PaginationInput {
        current_page,
        page_size,
        total_items,
        max_page_buttons,
    } = *input;

    let total_pages = total_pages(total_items, page_size);

    let (start_item, end_item) = if total_items == 0 {
        (None, None)
    } else {
        (
            Some(
                current_page
                    .saturating_sub(1)
                    .saturating_mul(page_size)
                    .saturating_add(1),
            ),
            Some(current_page.saturating_mul(page_size).min(total_items)),
        )
    };

    PaginationState {
        current_page,
        page_size,
        total_items,
        total_pages,
        start_item,
        end_item,
        has_previous_page: current_page > 1,
        has_next_page: current_page < total_pages,
        visible_page_numbers: visible_page_numbers(current_page, total_pages, max_page_buttons),
    }
}

/// The part of `items` that `state` points at.
///
/// This is caller-side extraction for hosts that hold the whole collection;
/// the engine itself never touches items. Absent or out-of-range bounds give
/// an empty slice.
pub fn page_slice<'a, T>(items: &'a [T], state: &PaginationState) -> &'a [T] {
    let (Some(start_item), Some(end_item)) = (state.start_item, state.end_item) else {
        return &[];
    };
    let start = usize::try_from(start_item.saturating_sub(1)).unwrap_or(0).min(items.len());
    let end = usize::try_from(end_item).unwrap_or(0).min(items.len());
    if start >= end {
        return &[];
    }
    &items[start..end]
}
