//! Catalog filter criteria.

use crate::catalog::TravelPackage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters a customer can apply to the catalog.
///
/// Every predicate defaults to true when its criterion is unset; the
/// overall match is the AND of all four.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title or description.
    pub destination: Option<String>,
    /// Maximum per-person price in minor units, inclusive.
    pub max_price: Option<i64>,
    /// Earliest acceptable departure date.
    pub earliest_departure: Option<NaiveDate>,
    /// Selected tags; a package matches if it carries at least one.
    pub tags: Vec<String>,
}

impl FilterCriteria {
    /// Create empty criteria (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination search text. Blank input leaves the
    /// criterion unset.
    pub fn with_destination(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.destination = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Set the maximum price in minor units.
    pub fn with_max_price(mut self, max_minor: i64) -> Self {
        self.max_price = Some(max_minor);
        self
    }

    /// Set the earliest acceptable departure date.
    pub fn with_earliest_departure(mut self, date: NaiveDate) -> Self {
        self.earliest_departure = Some(date);
        self
    }

    /// Add a tag to the selected set.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether no filter has been applied at all.
    ///
    /// The engine bypasses the predicate entirely in this state, which
    /// keeps "no filters applied" distinguishable from "filters applied
    /// but nothing matches" for empty-state messaging.
    pub fn is_unfiltered(&self) -> bool {
        self.destination.is_none()
            && self.max_price.is_none()
            && self.earliest_departure.is_none()
            && self.tags.is_empty()
    }

    /// Whether a package satisfies every applied criterion.
    pub fn matches(&self, pkg: &TravelPackage) -> bool {
        self.destination_matches(pkg)
            && self.price_matches(pkg)
            && self.date_matches(pkg)
            && self.tags_match(pkg)
    }

    fn destination_matches(&self, pkg: &TravelPackage) -> bool {
        let Some(needle) = &self.destination else {
            return true;
        };
        let needle = needle.to_lowercase();
        pkg.title.to_lowercase().contains(&needle)
            || pkg
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn price_matches(&self, pkg: &TravelPackage) -> bool {
        match self.max_price {
            Some(max) => pkg.price.amount_minor <= max,
            None => true,
        }
    }

    fn date_matches(&self, pkg: &TravelPackage) -> bool {
        match self.earliest_departure {
            Some(date) => pkg.availability.has_open_date_from(date),
            None => true,
        }
    }

    fn tags_match(&self, pkg: &TravelPackage) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        self.tags
            .iter()
            .any(|t| pkg.tags.iter().any(|pt| pt.eq_ignore_ascii_case(t)))
    }
}
