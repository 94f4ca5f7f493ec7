//! Seam between the extraction run loop and the browser.
//!
//! The run loop in [`crate::extract`] only talks to this trait, so its
//! contracts (result bounds, skip policy, scroll termination, guaranteed
//! release) are tested against a scripted fake while [`crate::chrome`]
//! provides the production implementation.

use async_trait::async_trait;

use crate::error::ScraperError;

/// Detail-panel fields read for each opened entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Phone,
    Address,
    Website,
    Category,
}

/// One browser session positioned on a map-search results feed.
///
/// A session is exclusively owned by the run that created it and must be
/// released through [`ResultsFeed::close`] exactly once, on every exit path.
#[async_trait]
pub trait ResultsFeed: Send {
    /// Navigates to the results view for `query` and waits for the
    /// scrollable results panel.
    ///
    /// # Errors
    ///
    /// [`ScraperError::PanelNotFound`] when the panel never appears within
    /// the configured deadline; other variants for navigation failures.
    async fn open(&mut self, query: &str) -> Result<(), ScraperError>;

    /// Current scroll height of the results panel.
    async fn feed_height(&mut self) -> Result<i64, ScraperError>;

    /// Scrolls the results panel to its bottom and lets it settle.
    async fn scroll_feed(&mut self) -> Result<(), ScraperError>;

    /// Number of result-entry links materialized so far.
    async fn entry_count(&mut self) -> Result<usize, ScraperError>;

    /// Opens the entry at `index` and lets its detail panel settle.
    async fn open_entry(&mut self, index: usize) -> Result<(), ScraperError>;

    /// Best-effort read of one detail field. `None` when the element is
    /// absent or unreadable; never an error.
    async fn read_field(&mut self, field: LeadField) -> Option<String>;

    /// Releases the underlying browser session. Idempotent; never fails.
    async fn close(&mut self);
}
