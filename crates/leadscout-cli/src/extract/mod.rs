//! The `extract` command: validate inputs, drive one extraction run,
//! render the result table, write the CSV export.

mod report;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use leadscout_core::{export, AppConfig, ExtractionSession};
use leadscout_scraper::{CacheKey, ChromeFeed, ExtractRequest, Extractor, ResultCache};
use tracing::{info, warn};

/// Floor of the result-count clamp; below this a run is all browser
/// startup overhead for no usable table.
const MIN_RESULTS: usize = 3;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Search keyword, e.g. "training institute".
    #[arg(long, env = "LEADSCOUT_KEYWORD")]
    keyword: String,

    /// Location, e.g. "Kochi".
    #[arg(long, env = "LEADSCOUT_LOCATION")]
    location: String,

    /// Number of leads to extract. Clamped to the configured ceiling;
    /// each entry costs several seconds of settle waits.
    #[arg(long, default_value_t = 10)]
    max_results: usize,

    /// Crawl each business website for an email address and social
    /// profiles.
    #[arg(long)]
    contact_info: bool,

    /// Directory the CSV export is written into.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Skip writing the CSV export.
    #[arg(long)]
    no_export: bool,
}

pub async fn run(config: &AppConfig, args: ExtractArgs) -> anyhow::Result<()> {
    let keyword = args.keyword.trim().to_owned();
    let location = args.location.trim().to_owned();
    anyhow::ensure!(!keyword.is_empty(), "keyword must not be empty");
    anyhow::ensure!(!location.is_empty(), "location must not be empty");

    let mut config = config.clone();
    config.contact_info = config.contact_info || args.contact_info;

    let max_results = clamp_max_results(args.max_results, config.max_results_ceiling);
    if max_results != args.max_results {
        warn!(
            requested = args.max_results,
            clamped = max_results,
            "result count clamped"
        );
    }

    let request = ExtractRequest {
        keyword: keyword.clone(),
        location: location.clone(),
        max_results,
    };

    let mut cache = ResultCache::new(Duration::from_secs(config.cache_ttl_secs));
    // An explicit run always wants fresh data.
    cache.invalidate();

    let extractor = Extractor::new(&config)?;
    let leads = match ChromeFeed::launch(&config).await {
        Ok(mut feed) => extractor.run(&mut feed, &request).await,
        Err(err) => {
            warn!(error = %err, "browser session could not start; returning no results");
            Vec::new()
        }
    };

    cache.store(
        CacheKey {
            keyword: keyword.clone(),
            location: location.clone(),
            max_results,
        },
        leads.clone(),
    );

    let mut session = ExtractionSession::new();
    session.replace(&keyword, &location, leads);

    report::render(&session);

    if !args.no_export && !session.is_empty() {
        let path = export::write_export(
            &args.out,
            session.keyword(),
            session.location(),
            session.results(),
        )
        .with_context(|| format!("writing CSV export into {}", args.out.display()))?;
        info!(path = %path.display(), "export written");
        println!("\nExport written to {}", path.display());
    }

    Ok(())
}

fn clamp_max_results(requested: usize, ceiling: usize) -> usize {
    requested.clamp(MIN_RESULTS, ceiling.max(MIN_RESULTS))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
