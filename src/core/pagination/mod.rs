//! Pagination engine
//!
//! Derives page counts, item ranges, navigation availability and the
//! visible page-button window from `(current_page, page_size, total_items)`.
//!
//! # Overview
//!
//! The engine is a plain value ([`PaginationInput`]) plus a pure
//! recomputation ([`compute_state`]). [`Paginator`] is the host-facing
//! wrapper: it owns the input, recomputes after every mutation, and hands
//! [`PaginationEvent`]s to a [`PageEventSink`] when a navigation intent is
//! applied.

mod events;
mod input;
mod paginator;
mod state;
mod window;

pub use events::{EventCallback, PageEventSink, PaginationEvent};
pub use input::{DEFAULT_MAX_PAGE_BUTTONS, PaginationInput};
pub use paginator::{PagePolicy, Paginator};
pub use state::{PaginationState, compute_state, page_slice, total_pages};
pub use window::visible_page_numbers;
