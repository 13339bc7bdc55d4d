use super::options::{ListDisplayOptions, ListLayout};
use crate::core::models::PokemonSummary;
use crate::core::pagination::PaginationState;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn set_header(table: &mut Table, headers: &[&str], use_colors: bool) {
    if use_colors {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    } else {
        table.set_header(headers.to_vec());
    }
}

fn pokedex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Render one page of Pokémon in the configured layout
///
/// An empty page renders as `options.empty_message`.
pub fn render_pokemon_table(items: &[PokemonSummary], options: &ListDisplayOptions) -> String {
    if items.is_empty() {
        return options.empty_message.clone();
    }

    match options.layout {
        ListLayout::List => render_list(items, !options.no_color),
        ListLayout::Grid => render_grid(items, options.grid_columns.max(1)),
    }
}

fn render_list(items: &[PokemonSummary], use_colors: bool) -> String {
    let mut table = new_table();
    set_header(&mut table, &["#", "Name", "Types"], use_colors);

    for pokemon in items {
        table.add_row(vec![
            Cell::new(pokedex_number(pokemon.id)),
            Cell::new(&pokemon.name),
            Cell::new(pokemon.type_names().join(", ")),
        ]);
    }

    table.to_string()
}

fn render_grid(items: &[PokemonSummary], columns: usize) -> String {
    let mut table = new_table();

    for chunk in items.chunks(columns) {
        let mut row: Vec<Cell> = chunk
            .iter()
            .map(|p| Cell::new(format!("{} {}", pokedex_number(p.id), p.name)))
            .collect();
        // Pad the last row so every row has the same width
        row.resize_with(columns, || Cell::new(""));
        table.add_row(row);
    }

    table.to_string()
}

/// Two-column table of every field in a pagination state
pub fn render_state_table(state: &PaginationState, no_color: bool) -> String {
    let optional = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    let mut table = new_table();
    set_header(&mut table, &["Field", "Value"], !no_color);

    let rows = [
        ("currentPage", state.current_page.to_string()),
        ("pageSize", state.page_size.to_string()),
        ("totalItems", state.total_items.to_string()),
        ("totalPages", state.total_pages.to_string()),
        ("startItem", optional(state.start_item)),
        ("endItem", optional(state.end_item)),
        ("hasPreviousPage", state.has_previous_page.to_string()),
        ("hasNextPage", state.has_next_page.to_string()),
        (
            "visiblePageNumbers",
            state
                .visible_page_numbers
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }

    table.to_string()
}
