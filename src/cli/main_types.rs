use crate::display::options::ListLayout;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "poke-pager")]
#[command(about = "Paginate and browse a Pokémon catalog from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, env = "POKE_PAGER_CONFIG_DIR")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the pagination state for one input
    State {
        /// Requested page (1-based; out-of-range values are reported as-is)
        #[arg(long, allow_negative_numbers = true)]
        page: i64,
        /// Items per page
        #[arg(long, allow_negative_numbers = true)]
        page_size: i64,
        /// Total number of items
        #[arg(long, allow_negative_numbers = true)]
        total: i64,
        /// Maximum number of page buttons in the window
        #[arg(long, allow_negative_numbers = true)]
        max_buttons: Option<i64>,
        /// Clamp the requested page into range first
        #[arg(long)]
        clamp: bool,
        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the catalog one page at a time
    Browse {
        /// Page to show
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
        /// Items per page (defaults to the configured page size)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Type filter, repeatable
        #[arg(long = "type", action = clap::ArgAction::Append)]
        types: Vec<String>,
        /// JSON dataset to browse instead of the builtin one
        #[arg(long)]
        data: Option<String>,
        /// List or grid layout
        #[arg(long)]
        layout: Option<ListLayout>,
        /// Print the page and its pagination state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one Pokémon by Pokédex number or name
    Show {
        /// Pokédex number or name
        pokemon: String,
        /// JSON dataset to search instead of the builtin one
        #[arg(long)]
        data: Option<String>,
        /// Print the Pokémon as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
