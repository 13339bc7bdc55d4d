use crate::cli::main_types::{Commands, ConfigCommands};
use crate::core::catalog::CatalogBrowser;
use crate::core::models::PokemonSummary;
use crate::core::pagination::{PagePolicy, PaginationInput, PaginationState, Paginator};
use crate::core::repository::{InMemoryPokemonRepository, PokemonRepository};
use crate::display::options::ListLayout;
use crate::display::{
    pagination_info, render_page_bar, render_page_size_selector, render_pokemon_table,
    render_state_table,
};
use crate::error::{AppError, CliError, DisplayError};
use crate::storage::config::{CONFIG_KEYS, Config};
use crate::storage::dataset;
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::{
    validate_max_page_buttons, validate_page_size, validate_total_items,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Arguments of the `browse` command
#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    pub page: i64,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub types: Vec<String>,
    pub data: Option<String>,
    pub layout: Option<ListLayout>,
    pub json: bool,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            logger: VerboseLogger::new(verbose),
        }
    }

    fn log_verbose(&self, msg: &str) {
        self.logger.log(msg);
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::State {
                page,
                page_size,
                total,
                max_buttons,
                clamp,
                json,
            } => self.handle_state_command(page, page_size, total, max_buttons, clamp, json),
            Commands::Browse {
                page,
                page_size,
                search,
                types,
                data,
                layout,
                json,
            } => {
                let request = BrowseRequest {
                    page,
                    page_size,
                    search,
                    types,
                    data,
                    layout,
                    json,
                };
                let output = self.handle_browse_command(request).await?;
                println!("{}", output);
                Ok(())
            }
            Commands::Show { pokemon, data, json } => {
                let output = self.handle_show_command(&pokemon, data, json).await?;
                println!("{}", output);
                Ok(())
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn repository(&self, data: Option<String>) -> Result<InMemoryPokemonRepository, AppError> {
        let data_path = data.or_else(|| self.config.dataset_path.clone());
        let pokemon = dataset::load_or_builtin(data_path.as_deref().map(Path::new))?;
        self.log_verbose(&format!(
            "Loaded {} pokemon from {}",
            pokemon.len(),
            data_path.as_deref().unwrap_or("builtin dataset")
        ));
        Ok(InMemoryPokemonRepository::new(pokemon))
    }

    fn page_policy(&self, clamp: bool) -> PagePolicy {
        if clamp {
            PagePolicy::Clamp
        } else {
            self.config.pagination.page_policy
        }
    }

    fn handle_state_command(
        &self,
        page: i64,
        page_size: i64,
        total: i64,
        max_buttons: Option<i64>,
        clamp: bool,
        json: bool,
    ) -> Result<(), AppError> {
        let max_buttons = max_buttons.unwrap_or(self.config.pagination.max_page_buttons);
        validate_page_size(page_size)?;
        validate_total_items(total)?;
        validate_max_page_buttons(max_buttons)?;

        let policy = self.page_policy(clamp);
        self.log_verbose(&format!(
            "Computing state - page: {}, page_size: {}, total: {}, max_buttons: {}, policy: {}",
            page, page_size, total, max_buttons, policy
        ));

        let input = PaginationInput::new(1, page_size, total)?.with_max_page_buttons(max_buttons)?;
        let mut paginator = Paginator::new(input)?.with_policy(policy);
        let stored = paginator.go_to_page(page);
        if stored != page {
            self.log_verbose(&format!("Requested page {} clamped to {}", page, stored));
        }
        let state = paginator.state();

        if json {
            println!("{}", to_json(state)?);
            return Ok(());
        }

        let options = self.config.display_options().with_env_overrides();
        println!("{}", render_state_table(state, options.no_color));
        println!("{}", pagination_info(state, &options.empty_message));
        println!("{}", render_page_bar(state, &options));
        Ok(())
    }

    /// Run the catalog workflow for one request and render the resulting
    /// page.
    pub async fn handle_browse_command(&self, request: BrowseRequest) -> Result<String, AppError> {
        let page_size = request
            .page_size
            .unwrap_or(self.config.pagination.page_size);
        validate_page_size(page_size)?;

        let repository = self.repository(request.data.clone())?;
        let input = PaginationInput::new(1, page_size, 0)?
            .with_max_page_buttons(self.config.pagination.max_page_buttons)?;
        let mut browser = CatalogBrowser::with_input(repository, input)?
            .with_policy(self.config.pagination.page_policy);

        // Filters reset to page 1, so they go first
        match &request.search {
            Some(term) => {
                browser.on_search(term).await?;
            }
            None => {
                browser.load().await?;
            }
        }
        if !request.types.is_empty() {
            browser.on_type_filter(request.types.clone()).await?;
        }
        if request.page != browser.state().current_page {
            browser.on_page_change(request.page).await?;
        }

        let state = browser.state();
        let items = browser.page().map(|p| p.items.as_slice()).unwrap_or(&[]);

        if request.json {
            #[derive(Serialize)]
            struct BrowseOutput<'a> {
                items: &'a [PokemonSummary],
                pagination: &'a PaginationState,
            }
            return to_json(&BrowseOutput {
                items,
                pagination: state,
            });
        }

        let mut options = self.config.display_options().with_env_overrides();
        if let Some(layout) = request.layout {
            options = options.with_layout(layout);
        }

        let mut sections = vec![
            render_pokemon_table(items, &options),
            pagination_info(state, &options.empty_message),
            render_page_bar(state, &options),
        ];
        if options.show_page_size_selector {
            sections.push(render_page_size_selector(
                &options.page_size_options,
                state.page_size,
            ));
        }
        Ok(sections.join("\n"))
    }

    /// Look a Pokémon up by number when the argument parses as one, by name
    /// otherwise.
    pub async fn handle_show_command(
        &self,
        pokemon: &str,
        data: Option<String>,
        json: bool,
    ) -> Result<String, AppError> {
        let query = pokemon.trim();
        if query.is_empty() {
            return Err(CliError::InvalidArguments(
                "expected a Pokédex number or name".to_string(),
            )
            .into());
        }

        let repository = self.repository(data)?;
        let found = match query.trim_start_matches('#').parse::<u32>() {
            Ok(id) => repository.get_pokemon_by_id(id).await?,
            Err(_) => repository.get_pokemon_by_name(query).await?,
        };

        if json {
            return to_json(&found);
        }

        let options = self.config.display_options().with_env_overrides();
        Ok(render_pokemon_table(std::slice::from_ref(&found), &options))
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");

                let config = &self.config;
                println!("Current Configuration:");
                println!("=====================");
                println!(
                    "Dataset: {}",
                    config.dataset_path.as_deref().unwrap_or("(builtin)")
                );

                println!("\nPagination:");
                println!("  page_size: {}", config.pagination.page_size);
                println!(
                    "  page_size_options: {}",
                    config
                        .pagination
                        .page_size_options
                        .iter()
                        .map(i64::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!("  max_page_buttons: {}", config.pagination.max_page_buttons);
                println!("  page_policy: {}", config.pagination.page_policy);

                println!("\nDisplay:");
                println!("  show_page_numbers: {}", config.display.show_page_numbers);
                println!(
                    "  show_page_size_selector: {}",
                    config.display.show_page_size_selector
                );
                println!("  layout: {}", config.display.layout);
                println!("  empty_message: {}", config.display.empty_message);
                println!("  no_color: {}", config.display.no_color);

                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));

                let mut config = self.config.clone();
                config.set_value(&key, &value).inspect_err(|_| {
                    self.log_verbose(&format!("Known keys: {}", CONFIG_KEYS.join(", ")));
                })?;
                config.validate()?;
                config.save(self.config_path.clone())?;

                println!("✅ Set {} to: {}", key, value);
                Ok(())
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Display(DisplayError::Serialization(e.to_string())))
}
