//! The extraction run loop.
//!
//! Failure containment follows one policy throughout: best effort per
//! field, never abort the batch for one bad field, never abort the run for
//! one bad entry. The worst outcome of a run is an empty result sequence.

use leadscout_core::{field_or_unavailable, AppConfig, Lead};
use tracing::{debug, info, warn};

use crate::contact::ContactCrawler;
use crate::error::ScraperError;
use crate::feed::{LeadField, ResultsFeed};

/// Parameters of one extraction run. `max_results` is expected to be
/// pre-clamped by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub keyword: String,
    pub location: String,
    pub max_results: usize,
}

impl ExtractRequest {
    /// The search query loaded into the results view.
    #[must_use]
    pub fn query(&self) -> String {
        format!("{} in {}", self.keyword, self.location)
    }
}

/// Drives one [`ResultsFeed`] session through a complete extraction run.
pub struct Extractor {
    max_scroll_attempts: u32,
    contact: Option<ContactCrawler>,
}

impl Extractor {
    /// Builds an extractor from configuration. The contact-info crawler is
    /// only constructed when that mode is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the crawler's HTTP client cannot
    /// be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let contact = if config.contact_info {
            Some(ContactCrawler::new(
                config.contact_timeout_secs,
                &config.user_agent,
            )?)
        } else {
            None
        };
        Ok(Self {
            max_scroll_attempts: config.max_scroll_attempts,
            contact,
        })
    }

    /// Runs one extraction and releases the feed session on every exit
    /// path: normal completion, panel-not-found, and errors partway
    /// through entry processing.
    ///
    /// Run-level failures are logged and converted into an empty result
    /// sequence; they never propagate.
    pub async fn run<F: ResultsFeed>(&self, feed: &mut F, request: &ExtractRequest) -> Vec<Lead> {
        let outcome = self.drive(feed, request).await;
        feed.close().await;
        match outcome {
            Ok(leads) => {
                info!(
                    keyword = %request.keyword,
                    location = %request.location,
                    count = leads.len(),
                    "extraction run complete"
                );
                leads
            }
            Err(err) => {
                warn!(error = %err, "extraction run failed; returning no results");
                Vec::new()
            }
        }
    }

    async fn drive<F: ResultsFeed>(
        &self,
        feed: &mut F,
        request: &ExtractRequest,
    ) -> Result<Vec<Lead>, ScraperError> {
        match feed.open(&request.query()).await {
            Ok(()) => {}
            Err(ScraperError::PanelNotFound { timeout_secs }) => {
                warn!(timeout_secs, "no results panel; returning empty sequence");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        }

        self.scroll_until_stable(feed).await?;

        let available = feed.entry_count().await?;
        let target = available.min(request.max_results);
        debug!(available, target, "result entries materialized");

        let mut leads = Vec::with_capacity(target);
        for index in 0..target {
            match self.extract_entry(feed, request, index).await {
                Ok(Some(lead)) => leads.push(lead),
                Ok(None) => debug!(index, "entry has no readable name; skipped"),
                Err(err) => warn!(index, error = %err, "entry failed; skipped"),
            }
        }
        Ok(leads)
    }

    /// Scrolls the feed until its height stops growing, or until the
    /// attempt bound is hit on panels that never stabilize.
    async fn scroll_until_stable<F: ResultsFeed>(
        &self,
        feed: &mut F,
    ) -> Result<(), ScraperError> {
        let mut last_height = feed.feed_height().await?;
        let mut attempts = 0u32;
        while attempts < self.max_scroll_attempts {
            feed.scroll_feed().await?;
            attempts += 1;
            let height = feed.feed_height().await?;
            if height <= last_height {
                break;
            }
            last_height = height;
        }
        debug!(attempts, height = last_height, "results feed settled");
        Ok(())
    }

    /// Processes a single entry. `Ok(None)` means the entry had no readable
    /// name and is skipped; field-level failures resolve to the sentinel
    /// and never surface here.
    async fn extract_entry<F: ResultsFeed>(
        &self,
        feed: &mut F,
        request: &ExtractRequest,
        index: usize,
    ) -> Result<Option<Lead>, ScraperError> {
        feed.open_entry(index).await?;

        let Some(name) = feed
            .read_field(LeadField::Name)
            .await
            .filter(|n| !n.trim().is_empty())
        else {
            return Ok(None);
        };

        let mut lead = Lead::named(name.trim());
        lead.phone = field_or_unavailable(feed.read_field(LeadField::Phone).await);
        lead.address = field_or_unavailable(feed.read_field(LeadField::Address).await);
        lead.website = field_or_unavailable(feed.read_field(LeadField::Website).await);
        lead.category = match feed.read_field(LeadField::Category).await {
            Some(c) if !c.trim().is_empty() => c.trim().to_owned(),
            _ => request.keyword.clone(),
        };

        if let Some(crawler) = &self.contact {
            if lead.has_website() {
                let info = crawler.fetch_contact_info(&lead.website).await;
                lead.email = info.email;
                lead.social_links = info.social_links;
            }
        }

        Ok(Some(lead))
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
