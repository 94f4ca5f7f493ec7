use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration, loaded from environment variables.
///
/// Every knob has a default; no variable is required. See
/// [`crate::config::load_app_config`] for the loading entry point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,

    /// Path to the browser executable launched for extraction runs.
    pub browser_path: PathBuf,

    /// Fixed settle delay after a scroll or an entry click, in milliseconds.
    /// The results feed gives no completion signal to wait on, so this stays
    /// a fixed pause rather than a condition wait.
    pub settle_delay_ms: u64,

    /// Poll interval for element-presence waits, in milliseconds.
    pub poll_interval_ms: u64,

    /// Deadline for the results panel to appear before the run is declared
    /// a "no results" run, in seconds.
    pub panel_timeout_secs: u64,

    /// Upper bound on feed scroll attempts per run.
    pub max_scroll_attempts: u32,

    /// Ceiling applied to the requested result count.
    pub max_results_ceiling: usize,

    /// Request timeout for the contact-info page crawl, in seconds.
    pub contact_timeout_secs: u64,

    /// `User-Agent` sent by the contact-info crawler.
    pub user_agent: String,

    /// Time-to-live for the cached result sequence, in seconds.
    pub cache_ttl_secs: u64,

    /// Whether extraction runs crawl each business website for an email
    /// address and social profiles.
    pub contact_info: bool,
}
