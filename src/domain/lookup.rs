//! Lookups over normalized overviews — case-insensitive name search and id resolution.
//!
//! All lookups are linear scans returning the first match in source order.
//! Overviews hold tens to a few hundred lines and are usually consumed once,
//! so no index is kept. A miss is `None`, never an error.

use crate::domain::currency::{CurrencyLine, CurrencyOverview};
use crate::domain::item::{ItemLine, ItemOverview};

/// Case-insensitive (Unicode lowercase) exact name comparison.
pub(crate) struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            needle: name.to_lowercase(),
        }
    }

    /// Both sides go through `str::to_lowercase`, so context-sensitive
    /// mappings (word-final Σ → ς) agree.
    pub(crate) fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.needle
    }
}

pub fn find_currency_line_by_name<'a>(
    overview: &'a CurrencyOverview,
    name: &str,
) -> Option<&'a CurrencyLine> {
    overview.find_line(name)
}

pub fn find_item_line_by_name<'a>(overview: &'a ItemOverview, name: &str) -> Option<&'a ItemLine> {
    overview.find_line(name)
}

/// Name → catalog entry → id. See [`CurrencyOverview::resolve_id`].
pub fn resolve_currency_id(overview: &CurrencyOverview, name: &str) -> Option<i64> {
    overview.resolve_id(name)
}

pub fn resolve_item_id(overview: &ItemOverview, name: &str) -> Option<i64> {
    overview.resolve_id(name)
}
