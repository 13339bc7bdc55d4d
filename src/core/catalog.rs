//! Catalog browsing workflow.
//!
//! [`CatalogBrowser`] is the host of a [`Paginator`]: it applies the user's
//! intents, listens for the resulting [`PaginationEvent`]s and re-queries the
//! repository for each one. A new search or type filter takes a separate
//! path that resets to page 1 before the query runs.

use crate::Result;
use crate::core::models::{PaginationParams, PokemonFilter, PokemonPage};
use crate::core::pagination::{
    PagePolicy, PaginationEvent, PaginationInput, PaginationState, Paginator,
};
use crate::core::repository::PokemonRepository;
use crate::error::RepositoryError;

pub const DEFAULT_CATALOG_PAGE_SIZE: i64 = 20;

pub struct CatalogBrowser<R> {
    repository: R,
    paginator: Paginator<Vec<PaginationEvent>>,
    filter: PokemonFilter,
    page: Option<PokemonPage>,
}

impl<R: PokemonRepository> CatalogBrowser<R> {
    /// Browser on page 1 with the default catalog page size.
    pub fn new(repository: R) -> Result<Self> {
        let input = PaginationInput {
            page_size: DEFAULT_CATALOG_PAGE_SIZE,
            ..PaginationInput::default()
        };
        Self::with_input(repository, input)
    }

    /// Browser starting from an explicit input.
    pub fn with_input(repository: R, input: PaginationInput) -> Result<Self> {
        Ok(Self {
            repository,
            paginator: Paginator::with_sink(input, Vec::new())?,
            filter: PokemonFilter::default(),
            page: None,
        })
    }

    pub fn with_policy(mut self, policy: PagePolicy) -> Self {
        self.paginator = self.paginator.with_policy(policy);
        self
    }

    pub fn state(&self) -> &PaginationState {
        self.paginator.state()
    }

    pub fn filter(&self) -> &PokemonFilter {
        &self.filter
    }

    /// Last page fetched, if any.
    pub fn page(&self) -> Option<&PokemonPage> {
        self.page.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch the page the paginator currently points at and feed the result
    /// count back into it.
    pub async fn load(&mut self) -> Result<&PokemonPage> {
        self.refresh().await?;
        self.loaded_page()
    }

    async fn refresh(&mut self) -> Result<()> {
        let params = PaginationParams {
            page: self.paginator.current_page(),
            page_size: self.paginator.page_size(),
        };
        log::debug!(
            "loading catalog page {} (size {}) with filter {:?}",
            params.page,
            params.page_size,
            self.filter
        );

        let page = self
            .repository
            .get_pokemon_list(params, &self.filter)
            .await?;
        self.paginator.set_total_items(page.total_count)?;
        self.page = Some(page);
        Ok(())
    }

    fn loaded_page(&self) -> Result<&PokemonPage> {
        self.page.as_ref().ok_or_else(|| {
            RepositoryError::Unavailable {
                message: "no catalog page loaded".to_string(),
            }
            .into()
        })
    }

    /// Apply a new search term: back to page 1, then query.
    pub async fn on_search(&mut self, term: &str) -> Result<&PokemonPage> {
        log::info!("catalog search: '{}'", term);
        self.paginator.reset_to_first_page();
        self.filter.search = Some(term.to_string());
        self.load().await
    }

    /// Apply a new type filter: back to page 1, then query.
    pub async fn on_type_filter(&mut self, types: Vec<String>) -> Result<&PokemonPage> {
        log::info!("catalog type filter: {:?}", types);
        self.paginator.reset_to_first_page();
        self.filter.types = types;
        self.load().await
    }

    /// "Go to page N" from the page buttons.
    pub async fn on_page_change(&mut self, page: i64) -> Result<&PokemonPage> {
        self.paginator.go_to_page(page);
        self.process_events().await
    }

    /// "Change page size to S" from the page-size selector. Keeps the page.
    pub async fn on_page_size_change(&mut self, page_size: i64) -> Result<&PokemonPage> {
        self.paginator.change_page_size(page_size)?;
        self.process_events().await
    }

    pub async fn on_next_page(&mut self) -> Result<&PokemonPage> {
        self.paginator.next_page();
        self.process_events().await
    }

    pub async fn on_previous_page(&mut self) -> Result<&PokemonPage> {
        self.paginator.previous_page();
        self.process_events().await
    }

    /// Refetch once per pending event. An intent that raised nothing (next
    /// on the last page) keeps the cached page.
    async fn process_events(&mut self) -> Result<&PokemonPage> {
        let events: Vec<PaginationEvent> = self.paginator.sink_mut().drain(..).collect();
        for event in &events {
            log::debug!("catalog reacting to {:?}", event);
            self.refresh().await?;
        }
        if self.page.is_none() {
            self.refresh().await?;
        }
        self.loaded_page()
    }
}
