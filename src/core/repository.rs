//! Repository port for catalog data and an in-memory adapter.
//!
//! The catalog only needs `total_count` and one page of items per query, so
//! the port speaks in [`PaginationParams`] and [`PokemonPage`].

use crate::core::models::{PaginationParams, PokemonFilter, PokemonPage, PokemonSummary};
use crate::core::pagination::{
    DEFAULT_MAX_PAGE_BUTTONS, PaginationInput, compute_state, page_slice,
};
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Source of catalog pages
#[async_trait]
pub trait PokemonRepository {
    /// One page of Pokémon matching `filter`.
    async fn get_pokemon_list(
        &self,
        pagination: PaginationParams,
        filter: &PokemonFilter,
    ) -> Result<PokemonPage, RepositoryError>;

    async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonSummary, RepositoryError>;

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonSummary, RepositoryError>;
}

/// Repository over a fixed list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPokemonRepository {
    pokemon: Vec<PokemonSummary>,
}

impl InMemoryPokemonRepository {
    pub fn new(mut pokemon: Vec<PokemonSummary>) -> Self {
        pokemon.sort_by_key(|p| p.id);
        Self { pokemon }
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn get_pokemon_list(
        &self,
        pagination: PaginationParams,
        filter: &PokemonFilter,
    ) -> Result<PokemonPage, RepositoryError> {
        if pagination.page_size < 1 {
            return Err(RepositoryError::Unavailable {
                message: format!("invalid page size {}", pagination.page_size),
            });
        }

        let matching: Vec<&PokemonSummary> =
            self.pokemon.iter().filter(|p| filter.matches(p)).collect();
        let total_count = matching.len() as i64;

        let state = compute_state(&PaginationInput {
            current_page: pagination.page,
            page_size: pagination.page_size,
            total_items: total_count,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
        });
        // Pages outside the result set come back empty
        let items: Vec<PokemonSummary> = page_slice(&matching, &state)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        log::debug!(
            "in-memory query page {} size {} filter {:?}: {} of {} items",
            pagination.page,
            pagination.page_size,
            filter,
            items.len(),
            total_count
        );

        Ok(PokemonPage {
            items,
            total_count,
            current_page: pagination.page,
            page_size: pagination.page_size,
            total_pages: state.total_pages,
        })
    }

    async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonSummary, RepositoryError> {
        self.pokemon
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonSummary, RepositoryError> {
        self.pokemon
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .ok_or_else(|| RepositoryError::NameNotFound {
                name: name.to_string(),
            })
    }
}
