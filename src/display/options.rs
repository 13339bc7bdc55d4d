use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a page of Pokémon is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// One row per Pokémon with number, name and types
    #[default]
    List,
    /// Names laid out across a fixed number of columns
    Grid,
}

impl fmt::Display for ListLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListLayout::List => write!(f, "list"),
            ListLayout::Grid => write!(f, "grid"),
        }
    }
}

impl FromStr for ListLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(ListLayout::List),
            "grid" => Ok(ListLayout::Grid),
            other => Err(format!("unknown layout '{}', expected list or grid", other)),
        }
    }
}

/// Options for rendering a paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct ListDisplayOptions {
    /// Show the sliding window of page numbers
    pub show_page_numbers: bool,
    /// Show the page size selector under the list
    pub show_page_size_selector: bool,
    /// Page sizes offered by the selector
    pub page_size_options: Vec<i64>,
    pub layout: ListLayout,
    /// Shown instead of a range when there is nothing to list
    pub empty_message: String,
    /// Disable the use of colors
    pub no_color: bool,
    /// Cells per row in grid layout
    pub grid_columns: usize,
}

impl Default for ListDisplayOptions {
    fn default() -> Self {
        Self {
            show_page_numbers: true,
            show_page_size_selector: true,
            page_size_options: vec![10, 20, 50, 100],
            layout: ListLayout::List,
            empty_message: "No items found".to_string(),
            no_color: false,
            grid_columns: 4,
        }
    }
}

impl ListDisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = show;
        self
    }

    pub fn with_page_size_selector(mut self, show: bool) -> Self {
        self.show_page_size_selector = show;
        self
    }

    pub fn with_page_size_options(mut self, options: Vec<i64>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn with_layout(mut self, layout: ListLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set color disable
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Grid column count, at least 1
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns.max(1);
        self
    }

    /// Apply environment overrides on top of these options
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            self.no_color = true;
        }
        self
    }
}
