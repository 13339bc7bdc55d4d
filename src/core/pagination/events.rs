//! Outbound notifications raised when a navigation intent is applied.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// Notification handed to the host's sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaginationEvent {
    /// The current page changed through a "go to page" intent.
    #[serde(rename_all = "camelCase")]
    PageChange { page: i64, page_size: i64 },
    /// The page size changed through a "change page size" intent.
    #[serde(rename_all = "camelCase")]
    PageSizeChange { page_size: i64 },
}

/// Receiver for [`PaginationEvent`]s.
pub trait PageEventSink {
    fn emit(&mut self, event: PaginationEvent);
}

/// Discards every event.
impl PageEventSink for () {
    fn emit(&mut self, _event: PaginationEvent) {}
}

/// Records events in order.
impl PageEventSink for Vec<PaginationEvent> {
    fn emit(&mut self, event: PaginationEvent) {
        self.push(event);
    }
}

/// Forwards events onto a channel. A closed channel only logs.
impl PageEventSink for UnboundedSender<PaginationEvent> {
    fn emit(&mut self, event: PaginationEvent) {
        if self.send(event).is_err() {
            log::warn!("pagination event dropped, receiver closed: {:?}", event);
        }
    }
}

/// Adapts a closure into a sink.
pub struct EventCallback<F>(pub F);

impl<F> PageEventSink for EventCallback<F>
where
    F: FnMut(PaginationEvent),
{
    fn emit(&mut self, event: PaginationEvent) {
        (self.0)(event);
    }
}

impl<F> std::fmt::Debug for EventCallback<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EventCallback")
    }
}
