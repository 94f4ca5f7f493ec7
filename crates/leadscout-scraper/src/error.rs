use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to launch browser at {path}: {reason}")]
    BrowserLaunch { path: String, reason: String },

    #[error("browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("results panel did not appear within {timeout_secs}s")]
    PanelNotFound { timeout_secs: u64 },

    #[error("element \"{selector}\" did not appear within {timeout_ms}ms")]
    ElementTimeout {
        selector: &'static str,
        timeout_ms: u64,
    },

    #[error("script evaluation failed: {reason}")]
    Evaluation { reason: String },

    #[error("no result entry at index {index}")]
    EntryMissing { index: usize },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
