pub mod cache;
pub mod chrome;
pub mod contact;
pub mod error;
pub mod extract;
pub mod feed;

pub use cache::{CacheKey, ResultCache};
pub use chrome::ChromeFeed;
pub use contact::{ContactCrawler, ContactInfo};
pub use error::ScraperError;
pub use extract::{ExtractRequest, Extractor};
pub use feed::{LeadField, ResultsFeed};
