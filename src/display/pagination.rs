//! Text rendering of pagination state: range summary, page bar and page size
//! selector. Everything here reads a [`PaginationState`] and never changes it.

use super::options::ListDisplayOptions;
use crate::core::pagination::PaginationState;

const PREVIOUS_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";

/// Generate pagination information string
///
/// `"Showing 21-25 of 25 items (Page 3 of 3)"`, or `empty_message` when there
/// are no items at all. A page outside the range says so rather than printing
/// an inverted range.
pub fn pagination_info(state: &PaginationState, empty_message: &str) -> String {
    let (Some(start_item), Some(end_item)) = (state.start_item, state.end_item) else {
        return empty_message.to_string();
    };

    if !state.is_current_page_in_range() {
        return format!(
            "Page {} is out of range ({} items, {} pages)",
            state.current_page, state.total_items, state.total_pages
        );
    }

    format!(
        "Showing {}-{} of {} items (Page {} of {})",
        start_item, end_item, state.total_items, state.current_page, state.total_pages
    )
}

/// Previous/next controls around either the visible page window or a
/// "Page X of Y" label. Unavailable controls are wrapped in parentheses.
pub fn render_page_bar(state: &PaginationState, options: &ListDisplayOptions) -> String {
    let previous = control(PREVIOUS_LABEL, state.has_previous_page);
    let next = control(NEXT_LABEL, state.has_next_page);

    let middle = if options.show_page_numbers && !state.visible_page_numbers.is_empty() {
        state
            .visible_page_numbers
            .iter()
            .map(|&page| {
                if page == state.current_page {
                    format!("[{}]", page)
                } else {
                    page.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        format!("Page {} of {}", state.current_page, state.total_pages)
    };

    format!("{}  {}  {}", previous, middle, next)
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("({})", label)
    }
}

/// `"Per page: 10 [20] 50 100"`. A current size missing from the offered
/// list is shown in its sorted position.
pub fn render_page_size_selector(page_size_options: &[i64], current: i64) -> String {
    let mut sizes = page_size_options.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
    }
    sizes.sort_unstable();
    sizes.dedup();

    let rendered = sizes
        .iter()
        .map(|&size| {
            if size == current {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("Per page: {}", rendered)
}
