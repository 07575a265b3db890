//! Catalog sort keys.

use crate::catalog::TravelPackage;
use serde::{Deserialize, Serialize};

/// Sort options for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Featured order: ranking weight, highest first.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Latest open departure date, most distant first; packages with
    /// no open departure sort last.
    DepartureDesc,
}

impl SortKey {
    /// Parse a query-string value, falling back to the featured order.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "departure-desc" => SortKey::DepartureDesc,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DepartureDesc => "departure-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::DepartureDesc => "Latest Departures",
        }
    }

    /// All keys in menu order.
    pub fn all() -> [SortKey; 4] {
        [
            SortKey::Featured,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::DepartureDesc,
        ]
    }

    /// Stable-sort a package list in place by this key.
    pub(crate) fn sort(&self, packages: &mut [TravelPackage]) {
        match self {
            SortKey::Featured => packages.sort_by(|a, b| b.ranking.cmp(&a.ranking)),
            SortKey::PriceAsc => {
                packages.sort_by(|a, b| a.price.amount_minor.cmp(&b.price.amount_minor))
            }
            SortKey::PriceDesc => {
                packages.sort_by(|a, b| b.price.amount_minor.cmp(&a.price.amount_minor))
            }
            // Option ordering treats None as the lowest value, so
            // unscheduled packages land at the end of the descending order.
            SortKey::DepartureDesc => packages.sort_by(|a, b| {
                b.availability
                    .latest_open_date()
                    .cmp(&a.availability.latest_open_date())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("garbage"), SortKey::Featured);
    }
}
