//! Sliding page-button window.

/// Contiguous run of page numbers to expose as buttons.
///
/// The window holds `min(max_page_buttons, total_pages)` pages, is centered
/// on `current_page` when possible, and slides (rather than truncates) near
/// either end so it always stays inside `[1, total_pages]`. Out-of-range
/// `current_page` values are pulled to the nearest edge.
pub fn visible_page_numbers(current_page: i64, total_pages: i64, max_page_buttons: i64) -> Vec<i64> {
    let window = max_page_buttons.min(total_pages).max(0);
    let half = window / 2;

    // Last start that still fits the whole window inside [1, total_pages]
    let last_start = total_pages.saturating_sub(window).saturating_add(1);
    let start = current_page
        .saturating_sub(half)
        .min(last_start)
        .max(1);

    (0..window).map(|offset| start + offset).collect()
}
