//! The lead record produced by an extraction run.
//!
//! ## Field policy
//!
//! Every field is always present. A field whose value could not be read
//! from the source page carries the exact [`UNAVAILABLE`] sentinel rather
//! than an empty string or an absent value, so downstream rendering and
//! export never have to distinguish "missing" from "empty". The only
//! exception is `name`: a record without a readable name is never built
//! at all; the extraction loop skips that entry.

use serde::{Deserialize, Serialize};

/// Placeholder value for a field that could not be determined.
pub const UNAVAILABLE: &str = "unavailable";

/// One extracted business record.
///
/// Records are immutable after construction and carry no identity beyond
/// their position in the run's output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub category: String,
    pub website: String,
    pub social_links: String,
}

impl Lead {
    /// Builds a record with the given name and every other field set to
    /// the sentinel. The extraction loop fills fields in as reads succeed.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: UNAVAILABLE.to_owned(),
            phone: UNAVAILABLE.to_owned(),
            address: UNAVAILABLE.to_owned(),
            category: UNAVAILABLE.to_owned(),
            website: UNAVAILABLE.to_owned(),
            social_links: UNAVAILABLE.to_owned(),
        }
    }

    #[must_use]
    pub fn has_email(&self) -> bool {
        self.email != UNAVAILABLE
    }

    #[must_use]
    pub fn has_phone(&self) -> bool {
        self.phone != UNAVAILABLE
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website != UNAVAILABLE
    }
}

/// Normalizes a best-effort field read into a lead field value.
///
/// `None`, and values that are empty after trimming, become the sentinel;
/// everything else is kept trimmed.
#[must_use]
pub fn field_or_unavailable(value: Option<String>) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                UNAVAILABLE.to_owned()
            } else {
                trimmed.to_owned()
            }
        }
        None => UNAVAILABLE.to_owned(),
    }
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
