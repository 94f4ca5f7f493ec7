//! Companion page crawl: visit a business website and pull out an email
//! address and social-media profile links.
//!
//! Everything here is best-effort. Network failures, non-2xx statuses,
//! unparseable bodies, and empty inputs all resolve to the sentinel for
//! both fields; nothing propagates to the extraction run.

use std::sync::OnceLock;
use std::time::Duration;

use leadscout_core::{field_or_unavailable, UNAVAILABLE};
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::ScraperError;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Domains whose addresses are never a business contact: documentation
/// placeholders, platform infrastructure that leaks into page text, and the
/// social networks themselves.
const EMAIL_DOMAIN_DENYLIST: &[&str] = &[
    "example.com",
    "example.org",
    "sentry.io",
    "wixpress.com",
    "godaddy.com",
    "schema.org",
    "facebook.com",
    "instagram.com",
    "linkedin.com",
    "twitter.com",
    "youtube.com",
];

/// Platform domain substring → display name.
const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("linkedin.com", "LinkedIn"),
    ("twitter.com", "Twitter"),
    ("youtube.com", "YouTube"),
];

const MAX_SOCIAL_LINKS: usize = 3;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Contact details pulled from one page. Both fields carry the sentinel
/// when nothing usable was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub social_links: String,
}

impl ContactInfo {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            email: UNAVAILABLE.to_owned(),
            social_links: UNAVAILABLE.to_owned(),
        }
    }
}

/// HTTP crawler for business websites.
pub struct ContactCrawler {
    client: reqwest::Client,
}

impl ContactCrawler {
    /// Builds the crawler with the configured fetch timeout and a
    /// browser-like `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and extracts contact details. Never fails: any
    /// problem resolves both fields to the sentinel.
    pub async fn fetch_contact_info(&self, url: &str) -> ContactInfo {
        let url = url.trim();
        if url.is_empty() || url == UNAVAILABLE {
            return ContactInfo::unavailable();
        }
        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else {
            format!("https://{url}")
        };

        match self.fetch_page(&url).await {
            Ok(body) => extract_contact_info(&body),
            Err(err) => {
                debug!(%url, error = %err, "contact crawl failed");
                ContactInfo::unavailable()
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Parses a fetched page body into contact details.
pub(crate) fn extract_contact_info(html: &str) -> ContactInfo {
    let document = Html::parse_document(html);
    ContactInfo {
        email: field_or_unavailable(find_email(&document)),
        social_links: field_or_unavailable(find_social_links(&document)),
    }
}

/// First email in the page text whose domain survives the denylist.
fn find_email(document: &Html) -> Option<String> {
    let text: String = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    email_regex()
        .find_iter(&text)
        .map(|m| m.as_str())
        .find(|candidate| !is_denylisted(candidate))
        .map(str::to_owned)
}

fn is_denylisted(email: &str) -> bool {
    let domain = email
        .rsplit('@')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    EMAIL_DOMAIN_DENYLIST
        .iter()
        .any(|denied| domain == *denied || domain.ends_with(&format!(".{denied}")))
}

/// Up to [`MAX_SOCIAL_LINKS`] platform profile links found in the page's
/// anchors, rendered as `"Platform: URL | ..."`. Duplicate hrefs (the same
/// link repeated in a nav and a footer) count once.
fn find_social_links(document: &Html) -> Option<String> {
    let selector = Selector::parse("a[href]").expect("anchor selector parses");
    let mut found: Vec<(&str, String)> = Vec::new();

    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(platform) = platform_for(href) else {
            continue;
        };
        if found.iter().any(|(_, seen)| seen == href) {
            continue;
        }
        found.push((platform, href.to_owned()));
        if found.len() == MAX_SOCIAL_LINKS {
            break;
        }
    }

    if found.is_empty() {
        None
    } else {
        Some(
            found
                .iter()
                .map(|(platform, href)| format!("{platform}: {href}"))
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }
}

fn platform_for(href: &str) -> Option<&'static str> {
    SOCIAL_PLATFORMS
        .iter()
        .find(|(domain, _)| href.contains(domain))
        .map(|(_, name)| *name)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
