//! Host-side pagination wrapper: owns the input, keeps the derived state in
//! step with it, and turns navigation intents into events.

use super::events::{PageEventSink, PaginationEvent};
use super::input::PaginationInput;
use super::state::{PaginationState, compute_state};
use crate::error::PaginationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What "go to page N" does with an `N` outside `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePolicy {
    /// Store `N` as requested and let the derived values show the empty result.
    #[default]
    Tolerant,
    /// Pull `N` into `[1, total_pages]` before storing it.
    Clamp,
}

impl fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagePolicy::Tolerant => write!(f, "tolerant"),
            PagePolicy::Clamp => write!(f, "clamp"),
        }
    }
}

impl FromStr for PagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerant" => Ok(PagePolicy::Tolerant),
            "clamp" => Ok(PagePolicy::Clamp),
            other => Err(format!(
                "unknown page policy '{}', expected 'tolerant' or 'clamp'",
                other
            )),
        }
    }
}

/// Pagination host
///
/// Every mutation recomputes [`PaginationState`] before returning, so two
/// sequential calls never expose a half-updated state. Plain setters change
/// inputs silently; the intent methods (`go_to_page`, `change_page_size` and
/// the helpers built on them) also notify the sink.
#[derive(Debug)]
pub struct Paginator<S = ()> {
    input: PaginationInput,
    state: PaginationState,
    policy: PagePolicy,
    sink: S,
}

impl Paginator<()> {
    /// Create a paginator that discards its events.
    pub fn new(input: PaginationInput) -> Result<Self, PaginationError> {
        Self::with_sink(input, ())
    }
}

impl Default for Paginator<()> {
    fn default() -> Self {
        let input = PaginationInput::default();
        Self {
            state: compute_state(&input),
            input,
            policy: PagePolicy::default(),
            sink: (),
        }
    }
}

impl<S: PageEventSink> Paginator<S> {
    /// Create a paginator that hands its events to `sink`.
    pub fn with_sink(input: PaginationInput, sink: S) -> Result<Self, PaginationError> {
        input.validate()?;
        Ok(Self {
            state: compute_state(&input),
            input,
            policy: PagePolicy::default(),
            sink,
        })
    }

    pub fn with_policy(mut self, policy: PagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn input(&self) -> &PaginationInput {
        &self.input
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    pub fn current_page(&self) -> i64 {
        self.input.current_page
    }

    pub fn page_size(&self) -> i64 {
        self.input.page_size
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn recompute(&mut self) {
        self.state = compute_state(&self.input);
        log::trace!(
            "pagination recomputed: page {}/{} items {:?}-{:?} of {}",
            self.state.current_page,
            self.state.total_pages,
            self.state.start_item,
            self.state.end_item,
            self.state.total_items
        );
    }

    // Input mutations

    /// Replace every input at once.
    pub fn set_input(&mut self, input: PaginationInput) -> Result<(), PaginationError> {
        input.validate()?;
        self.input = input;
        self.recompute();
        Ok(())
    }

    pub fn set_current_page(&mut self, page: i64) {
        self.input.current_page = page;
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: i64) -> Result<(), PaginationError> {
        if page_size < 1 {
            return Err(PaginationError::InvalidPageSize { value: page_size });
        }
        self.input.page_size = page_size;
        self.recompute();
        Ok(())
    }

    pub fn set_total_items(&mut self, total_items: i64) -> Result<(), PaginationError> {
        if total_items < 0 {
            return Err(PaginationError::InvalidTotalItems { value: total_items });
        }
        self.input.total_items = total_items;
        self.recompute();
        Ok(())
    }

    pub fn set_max_page_buttons(&mut self, max_page_buttons: i64) -> Result<(), PaginationError> {
        if max_page_buttons < 1 {
            return Err(PaginationError::InvalidMaxPageButtons {
                value: max_page_buttons,
            });
        }
        self.input.max_page_buttons = max_page_buttons;
        self.recompute();
        Ok(())
    }

    /// Move back to page 1 without raising an event.
    ///
    /// Used when a new search or filter replaces the result set, so a stale
    /// high page number cannot land on an empty page.
    pub fn reset_to_first_page(&mut self) {
        log::debug!("resetting pagination to page 1");
        self.set_current_page(1);
    }

    // Intents

    /// Apply "go to page N" and raise exactly one `PageChange`.
    ///
    /// Returns the page actually stored, which differs from `page` only under
    /// [`PagePolicy::Clamp`].
    pub fn go_to_page(&mut self, page: i64) -> i64 {
        let target = match self.policy {
            PagePolicy::Tolerant => page,
            PagePolicy::Clamp => page.clamp(1, self.state.total_pages),
        };
        if target != page {
            log::debug!("page {} clamped to {}", page, target);
        }

        self.set_current_page(target);
        log::debug!("go to page {} (page size {})", target, self.input.page_size);
        self.sink.emit(PaginationEvent::PageChange {
            page: target,
            page_size: self.input.page_size,
        });
        target
    }

    /// Apply "change page size to S" and raise one `PageSizeChange`.
    ///
    /// The current page is left as it is.
    pub fn change_page_size(&mut self, page_size: i64) -> Result<(), PaginationError> {
        self.set_page_size(page_size)?;
        log::debug!("page size changed to {}", page_size);
        self.sink.emit(PaginationEvent::PageSizeChange { page_size });
        Ok(())
    }

    /// Go to the next page. Returns false, and raises nothing, on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.state.has_next_page {
            return false;
        }
        self.go_to_page(self.input.current_page + 1);
        true
    }

    /// Go to the previous page. Returns false, and raises nothing, on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.state.has_previous_page {
            return false;
        }
        self.go_to_page(self.input.current_page - 1);
        true
    }

    pub fn first_page(&mut self) -> i64 {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> i64 {
        self.go_to_page(self.state.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(current_page: i64, page_size: i64, total_items: i64) -> Paginator<Vec<PaginationEvent>> {
        let input = PaginationInput::new(current_page, page_size, total_items).expect("valid input");
        Paginator::with_sink(input, Vec::new()).expect("valid paginator")
    }

    #[test]
    fn test_default_paginator() {
        let paginator = Paginator::default();
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.state().total_pages, 1);
        assert_eq!(paginator.policy(), PagePolicy::Tolerant);
    }

    #[test]
    fn test_setters_recompute_without_events() {
        let mut paginator = recording(1, 10, 25);
        assert_eq!(paginator.state().total_pages, 3);

        paginator.set_total_items(100).expect("valid total");
        assert_eq!(paginator.state().total_pages, 10);

        paginator.set_current_page(5);
        assert_eq!(paginator.state().visible_page_numbers, vec![3, 4, 5, 6, 7]);

        paginator.set_max_page_buttons(3).expect("valid buttons");
        assert_eq!(paginator.state().visible_page_numbers, vec![4, 5, 6]);

        paginator.set_page_size(25).expect("valid size");
        assert_eq!(paginator.state().total_pages, 4);

        assert!(paginator.sink().is_empty());
    }

    #[test]
    fn test_setters_reject_invalid_values() {
        let mut paginator = recording(1, 10, 25);
        assert!(paginator.set_page_size(0).is_err());
        assert!(paginator.set_total_items(-1).is_err());
        assert!(paginator.set_max_page_buttons(0).is_err());
        assert!(paginator.change_page_size(-5).is_err());

        // Rejected values leave the previous state intact
        assert_eq!(paginator.page_size(), 10);
        assert_eq!(paginator.state().total_items, 25);
        assert!(paginator.sink().is_empty());
    }

    #[test]
    fn test_go_to_page_fires_once() {
        let mut paginator = recording(1, 10, 25);
        assert_eq!(paginator.go_to_page(2), 2);
        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.state().start_item, Some(11));
        assert_eq!(
            paginator.sink(),
            &vec![PaginationEvent::PageChange {
                page: 2,
                page_size: 10
            }]
        );
    }

    #[test]
    fn test_tolerant_policy_keeps_out_of_range_page() {
        let mut paginator = recording(1, 10, 25);
        assert_eq!(paginator.go_to_page(9), 9);
        assert_eq!(paginator.state().current_page, 9);
        assert_eq!(paginator.state().item_count_on_page(), 0);
        assert!(!paginator.state().has_next_page);

        assert_eq!(paginator.go_to_page(0), 0);
        assert!(!paginator.state().has_previous_page);
        assert_eq!(paginator.sink().len(), 2);
    }

    #[test]
    fn test_extreme_pages_are_tolerated() {
        let mut paginator = recording(1, 10, 25);
        assert_eq!(paginator.go_to_page(i64::MAX), i64::MAX);
        assert_eq!(paginator.state().start_item, Some(i64::MAX));
        assert!(!paginator.next_page());
        assert!(paginator.previous_page());
        assert_eq!(paginator.current_page(), i64::MAX - 1);

        assert_eq!(paginator.go_to_page(i64::MIN), i64::MIN);
        assert_eq!(paginator.state().item_count_on_page(), 0);
        assert!(!paginator.previous_page());
        assert!(paginator.next_page());
        assert_eq!(paginator.current_page(), i64::MIN + 1);
        assert_eq!(paginator.sink().len(), 4);

        let mut clamped = recording(1, 10, 25).with_policy(PagePolicy::Clamp);
        assert_eq!(clamped.go_to_page(i64::MAX), 3);
        assert_eq!(clamped.go_to_page(i64::MIN), 1);
    }

    #[test]
    fn test_clamp_policy_pulls_page_into_range() {
        let mut paginator = recording(1, 10, 25).with_policy(PagePolicy::Clamp);
        assert_eq!(paginator.go_to_page(99), 3);
        assert_eq!(paginator.state().end_item, Some(25));
        assert_eq!(paginator.go_to_page(-4), 1);
        assert_eq!(
            paginator.into_sink(),
            vec![
                PaginationEvent::PageChange {
                    page: 3,
                    page_size: 10
                },
                PaginationEvent::PageChange {
                    page: 1,
                    page_size: 10
                },
            ]
        );
    }

    #[test]
    fn test_change_page_size_keeps_current_page() {
        let mut paginator = recording(3, 10, 100);
        paginator.change_page_size(20).expect("valid size");
        assert_eq!(paginator.current_page(), 3);
        assert_eq!(paginator.state().total_pages, 5);
        assert_eq!(paginator.state().start_item, Some(41));
        assert_eq!(
            paginator.sink(),
            &vec![PaginationEvent::PageSizeChange { page_size: 20 }]
        );
    }

    #[test]
    fn test_reset_to_first_page_is_silent() {
        let mut paginator = recording(3, 10, 100);
        paginator.reset_to_first_page();
        assert_eq!(paginator.current_page(), 1);
        assert!(!paginator.state().has_previous_page);
        assert!(paginator.sink().is_empty());
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        let mut paginator = recording(1, 10, 25);
        assert!(!paginator.previous_page());
        assert!(paginator.next_page());
        assert!(paginator.next_page());
        assert!(!paginator.next_page());
        assert_eq!(paginator.current_page(), 3);
        assert!(paginator.previous_page());
        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.sink().len(), 3);
    }

    #[test]
    fn test_first_and_last_page() {
        let mut paginator = recording(4, 10, 100);
        assert_eq!(paginator.last_page(), 10);
        assert_eq!(paginator.state().visible_page_numbers, vec![6, 7, 8, 9, 10]);
        assert_eq!(paginator.first_page(), 1);
        assert_eq!(paginator.state().visible_page_numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_set_input_replaces_everything() {
        let mut paginator = recording(1, 10, 25);
        let input = PaginationInput::new(2, 5, 12)
            .and_then(|input| input.with_max_page_buttons(2))
            .expect("valid input");
        paginator.set_input(input).expect("valid input");
        assert_eq!(paginator.input(), &input);
        assert_eq!(paginator.state().total_pages, 3);
        assert_eq!(paginator.state().visible_page_numbers, vec![1, 2]);
    }

    #[test]
    fn test_page_policy_parse_and_display() {
        assert_eq!("clamp".parse::<PagePolicy>(), Ok(PagePolicy::Clamp));
        assert_eq!(" Tolerant ".parse::<PagePolicy>(), Ok(PagePolicy::Tolerant));
        assert!("strict".parse::<PagePolicy>().is_err());
        assert_eq!(PagePolicy::Clamp.to_string(), "clamp");
    }
}
