pub mod options;
pub mod pagination;
pub mod table;

pub use crate::core::pagination::page_slice;
pub use options::{ListDisplayOptions, ListLayout};
pub use pagination::{pagination_info, render_page_bar, render_page_size_selector};
pub use table::{render_pokemon_table, render_state_table};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::{PaginationInput, compute_state};

    #[test]
    fn test_rendered_page_matches_sliced_items() {
        let names: Vec<String> = (1..=25).map(|n| format!("item-{}", n)).collect();
        let state = compute_state(&PaginationInput {
            current_page: 3,
            page_size: 10,
            total_items: names.len() as i64,
            max_page_buttons: 5,
        });

        let slice = page_slice(&names, &state);
        assert_eq!(slice.len() as i64, state.item_count_on_page());
        assert_eq!(slice.first().map(String::as_str), Some("item-21"));
        assert_eq!(
            pagination_info(&state, "empty"),
            "Showing 21-25 of 25 items (Page 3 of 3)"
        );
    }
}
