use super::Result;
use crate::core::pagination::PagePolicy;
use crate::display::options::{ListDisplayOptions, ListLayout};
use crate::error::{CliError, ConfigError, StorageError};
use crate::utils::validation::{
    parse_bool, parse_page_size_options, validate_max_page_buttons, validate_page_size,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "page_size",
    "page_size_options",
    "max_page_buttons",
    "page_policy",
    "show_page_numbers",
    "show_page_size_selector",
    "layout",
    "empty_message",
    "no_color",
    "dataset_path",
];

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    // Plain values come before the tables in the TOML output
    pub dataset_path: Option<String>,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PaginationSettings {
    pub page_size: i64,
    pub page_size_options: Vec<i64>,
    pub max_page_buttons: i64,
    pub page_policy: PagePolicy,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
            max_page_buttons: 5,
            page_policy: PagePolicy::Tolerant,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_page_numbers: bool,
    pub show_page_size_selector: bool,
    pub layout: ListLayout,
    pub empty_message: String,
    pub no_color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_page_numbers: true,
            show_page_size_selector: true,
            layout: ListLayout::List,
            empty_message: "No Pokémon found matching your criteria".to_string(),
            no_color: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: e.to_string(),
            })?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string_pretty(self).map_err(|e| StorageError::ConfigSaveFailed {
                message: e.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        log::debug!("saved config to {}", config_path.display());
        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = config_dir.join("poke-pager");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Render options built from the `[display]` and `[pagination]` tables
    pub fn display_options(&self) -> ListDisplayOptions {
        ListDisplayOptions::new()
            .with_page_numbers(self.display.show_page_numbers)
            .with_page_size_selector(self.display.show_page_size_selector)
            .with_page_size_options(self.pagination.page_size_options.clone())
            .with_layout(self.display.layout)
            .with_empty_message(self.display.empty_message.clone())
            .with_no_color(self.display.no_color)
    }

    /// Check values that a hand-edited file could get wrong.
    pub fn validate(&self) -> crate::Result<()> {
        validate_page_size(self.pagination.page_size)?;
        validate_max_page_buttons(self.pagination.max_page_buttons)?;
        if self.pagination.page_size_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "page_size_options".to_string(),
                value: "[]".to_string(),
                reason: "at least one page size must be offered".to_string(),
            }
            .into());
        }
        for size in &self.pagination.page_size_options {
            validate_page_size(*size)?;
        }
        Ok(())
    }

    /// Apply a `config set <key> <value>` pair.
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            "page_size" => {
                let size: i64 = value
                    .parse()
                    .map_err(|_| invalid("expected an integer".to_string()))?;
                validate_page_size(size)?;
                self.pagination.page_size = size;
            }
            "page_size_options" => {
                self.pagination.page_size_options = parse_page_size_options(value)?;
            }
            "max_page_buttons" => {
                let buttons: i64 = value
                    .parse()
                    .map_err(|_| invalid("expected an integer".to_string()))?;
                validate_max_page_buttons(buttons)?;
                self.pagination.max_page_buttons = buttons;
            }
            "page_policy" => {
                self.pagination.page_policy = value.parse().map_err(invalid)?;
            }
            "show_page_numbers" => {
                self.display.show_page_numbers = parse_bool(value)?;
            }
            "show_page_size_selector" => {
                self.display.show_page_size_selector = parse_bool(value)?;
            }
            "layout" => {
                self.display.layout = value.parse().map_err(invalid)?;
            }
            "empty_message" => {
                self.display.empty_message = value.to_string();
            }
            "no_color" => {
                self.display.no_color = parse_bool(value)?;
            }
            "dataset_path" => {
                self.dataset_path = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => {
                return Err(CliError::UnknownConfigKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
