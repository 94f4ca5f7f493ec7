//! Chromium-backed [`ResultsFeed`] over the DevTools protocol.
//!
//! Selectors target the public maps results view. The page is third-party
//! and unstable, so every field read maps any element or protocol failure
//! to `None`; only navigation and feed-level operations surface errors.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use leadscout_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::error::ScraperError;
use crate::feed::{LeadField, ResultsFeed};

const SEARCH_URL_BASE: &str = "https://www.google.com/maps/search/";

/// Scrollable results container.
const FEED: &str = "div[role='feed']";
/// Result-entry links inside the feed.
const ENTRY_LINK: &str = "div[role='feed'] a[href*='/maps/place/']";
/// Detail-panel title.
const NAME: &str = "h1.DUwDvf";
/// Detail-panel action buttons carry stable data-item-id values even when
/// the obfuscated class names rotate.
const PHONE: &str = "button[data-item-id^='phone:tel:']";
const ADDRESS: &str = "button[data-item-id='address']";
const WEBSITE: &str = "a[data-item-id='authority']";
const CATEGORY: &str = "button.DkEaL";

pub struct ChromeFeed {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
    settle_delay: Duration,
    poll_interval: Duration,
    panel_timeout: Duration,
    closed: bool,
}

impl ChromeFeed {
    /// Launches a headless browser session using the configured executable.
    ///
    /// # Errors
    ///
    /// [`ScraperError::BrowserLaunch`] when the launch configuration is
    /// rejected, [`ScraperError::Cdp`] when the browser fails to start or
    /// the initial page cannot be created.
    pub async fn launch(config: &AppConfig) -> Result<Self, ScraperError> {
        let browser_config = BrowserConfig::builder()
            .chrome_executable(&config.browser_path)
            .no_sandbox()
            .window_size(1280, 1024)
            .build()
            .map_err(|reason| ScraperError::BrowserLaunch {
                path: config.browser_path.display().to_string(),
                reason,
            })?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        // The CDP event loop must be polled for the life of the session.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        debug!(browser_path = %config.browser_path.display(), "browser session started");

        Ok(Self {
            browser,
            handler_task,
            page,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            panel_timeout: Duration::from_secs(config.panel_timeout_secs),
            closed: false,
        })
    }

    /// Polls for `selector` until it appears or `timeout` elapses.
    async fn wait_for(
        &self,
        selector: &'static str,
        timeout: Duration,
    ) -> Result<(), ScraperError> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ScraperError::ElementTimeout {
                    selector,
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
            sleep(self.poll_interval).await;
        }
    }

    async fn inner_text(&self, selector: &str) -> Option<String> {
        let element = self.page.find_element(selector).await.ok()?;
        element.inner_text().await.ok()?
    }

    async fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let element = self.page.find_element(selector).await.ok()?;
        element.attribute(name).await.ok()?
    }
}

#[async_trait]
impl ResultsFeed for ChromeFeed {
    async fn open(&mut self, query: &str) -> Result<(), ScraperError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        let url = format!("{SEARCH_URL_BASE}{encoded}");
        debug!(%url, "loading results view");
        self.page.goto(url).await?;

        self.wait_for(FEED, self.panel_timeout)
            .await
            .map_err(|_| ScraperError::PanelNotFound {
                timeout_secs: self.panel_timeout.as_secs(),
            })
    }

    async fn feed_height(&mut self) -> Result<i64, ScraperError> {
        let result = self
            .page
            .evaluate(format!(
                "document.querySelector(\"{FEED}\")?.scrollHeight ?? 0"
            ))
            .await?;
        result
            .into_value::<i64>()
            .map_err(|e| ScraperError::Evaluation {
                reason: e.to_string(),
            })
    }

    async fn scroll_feed(&mut self) -> Result<(), ScraperError> {
        self.page
            .evaluate(format!(
                "{{ const feed = document.querySelector(\"{FEED}\"); \
                 if (feed) feed.scrollTo(0, feed.scrollHeight); }}"
            ))
            .await?;
        sleep(self.settle_delay).await;
        Ok(())
    }

    async fn entry_count(&mut self) -> Result<usize, ScraperError> {
        Ok(self.page.find_elements(ENTRY_LINK).await?.len())
    }

    async fn open_entry(&mut self, index: usize) -> Result<(), ScraperError> {
        // Re-query on every open: clicking an entry rewrites the detail
        // panel and can invalidate previously-resolved element handles.
        let links = self.page.find_elements(ENTRY_LINK).await?;
        let link = links
            .into_iter()
            .nth(index)
            .ok_or(ScraperError::EntryMissing { index })?;
        link.click().await?;
        sleep(self.settle_delay).await;
        Ok(())
    }

    async fn read_field(&mut self, field: LeadField) -> Option<String> {
        match field {
            LeadField::Name => self.inner_text(NAME).await,
            LeadField::Phone => self.inner_text(PHONE).await,
            LeadField::Address => self.inner_text(ADDRESS).await,
            LeadField::Website => self.attribute(WEBSITE, "href").await,
            LeadField::Category => self.inner_text(CATEGORY).await,
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.browser.close().await {
            warn!(error = %err, "browser did not close cleanly");
        }
        if let Err(err) = self.browser.wait().await {
            debug!(error = %err, "browser wait failed");
        }
        self.handler_task.abort();
        debug!("browser session released");
    }
}
