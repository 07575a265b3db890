//! Browse module.
//!
//! Filtering, sorting, and pagination over the catalog snapshot. The
//! snapshot is fetched once per view and held immutably; every user
//! interaction recomputes the visible page with the pure functions
//! here.

mod criteria;
mod results;
mod sort;

pub use criteria::FilterCriteria;
pub use results::{paginate, BrowsePage, Pagination, DEFAULT_PAGE_SIZE};
pub use sort::SortKey;

use crate::catalog::TravelPackage;

/// Filter and order a package list.
///
/// When no filter has been applied the predicate is bypassed entirely
/// and the full list is returned in sort order. Sorting is stable and
/// the input is never mutated.
pub fn apply(packages: &[TravelPackage], criteria: &FilterCriteria, sort: SortKey) -> Vec<TravelPackage> {
    let mut matched: Vec<TravelPackage> = if criteria.is_unfiltered() {
        packages.to_vec()
    } else {
        packages
            .iter()
            .filter(|pkg| criteria.matches(pkg))
            .cloned()
            .collect()
    };
    sort.sort(&mut matched);
    matched
}

/// One recomputed view of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResults {
    /// The visible page of packages.
    pub items: Vec<TravelPackage>,
    /// Pagination info for the full matched list.
    pub pagination: Pagination,
    /// Whether any filter was applied; lets the empty state say
    /// "nothing matches your filters" instead of "no trips yet".
    pub filtered: bool,
}

/// The catalog store: an immutable package snapshot plus the transient
/// browse state (criteria, sort key, page).
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    packages: Vec<TravelPackage>,
    criteria: FilterCriteria,
    sort: SortKey,
    page: i64,
    per_page: i64,
}

impl CatalogBrowser {
    /// Create a browser over a fetched snapshot.
    pub fn new(packages: Vec<TravelPackage>) -> Self {
        Self {
            packages,
            criteria: FilterCriteria::new(),
            sort: SortKey::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size.
    pub fn with_page_size(mut self, per_page: i64) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// The full unfiltered snapshot.
    pub fn packages(&self) -> &[TravelPackage] {
        &self.packages
    }

    /// Current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current sort key.
    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Current page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Replace the filter criteria. Resets to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Change the sort key. Resets to page 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Jump to a page; out-of-range values clamp when the view is
    /// computed. The caller is expected to scroll the list container
    /// back into view after a page change.
    pub fn goto_page(&mut self, page: i64) {
        self.page = page;
    }

    /// Clear all filters and return to page 1.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
        self.page = 1;
    }

    /// Compute the currently visible page.
    pub fn browse(&self) -> BrowseResults {
        let matched = apply(&self.packages, &self.criteria, self.sort);
        let page = paginate(&matched, self.page, self.per_page);
        BrowseResults {
            items: page.items,
            pagination: page.pagination,
            filtered: !self.criteria.is_unfiltered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Availability;
    use crate::money::{Currency, Money};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn pkg(title: &str, price_minor: i64, ranking: i32) -> TravelPackage {
        TravelPackage::new(title, Money::new(price_minor, Currency::INR)).with_ranking(ranking)
    }

    fn fixture() -> Vec<TravelPackage> {
        let mut scheduled = Availability::new();
        scheduled.set(date("2025-06-01"), 3);
        vec![
            pkg("Ladakh Overland", 10_000, 5).with_availability(scheduled),
            pkg("Goa Getaway", 5_000, 9),
            pkg("Spiti Valley Circuit", 10_001, 1),
        ]
    }

    #[test]
    fn test_apply_is_idempotent() {
        let packages = fixture();
        let criteria = FilterCriteria::new().with_max_price(10_000);
        let once = apply(&packages, &criteria, SortKey::PriceAsc);
        let twice = apply(&once, &criteria, SortKey::PriceAsc);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_max_price_boundary() {
        let packages = fixture();
        let criteria = FilterCriteria::new().with_max_price(10_000);
        let matched = apply(&packages, &criteria, SortKey::Featured);
        let titles: Vec<&str> = matched.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Goa Getaway", "Ladakh Overland"]);
    }

    #[test]
    fn test_price_asc_reversed_equals_desc() {
        let packages = fixture();
        let criteria = FilterCriteria::new();
        let mut asc = apply(&packages, &criteria, SortKey::PriceAsc);
        asc.reverse();
        let desc = apply(&packages, &criteria, SortKey::PriceDesc);
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_departure_desc_puts_unscheduled_last() {
        let packages = fixture();
        let ordered = apply(&packages, &FilterCriteria::new(), SortKey::DepartureDesc);
        assert_eq!(ordered[0].title, "Ladakh Overland");
        // The two unscheduled packages keep their input order (stable sort).
        assert_eq!(ordered[1].title, "Goa Getaway");
        assert_eq!(ordered[2].title, "Spiti Valley Circuit");
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let packages = fixture();
        let before = packages.clone();
        let _ = apply(&packages, &FilterCriteria::new(), SortKey::PriceAsc);
        assert_eq!(packages, before);
    }

    #[test]
    fn test_browser_resets_page_on_filter_change() {
        let mut browser = CatalogBrowser::new(fixture()).with_page_size(1);
        browser.goto_page(3);
        assert_eq!(browser.browse().pagination.page, 3);

        browser.set_criteria(FilterCriteria::new().with_max_price(10_000));
        assert_eq!(browser.page(), 1);

        browser.goto_page(2);
        browser.set_sort(SortKey::PriceDesc);
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn test_browser_distinguishes_empty_states() {
        let mut browser = CatalogBrowser::new(fixture());
        let unfiltered = browser.browse();
        assert!(!unfiltered.filtered);
        assert_eq!(unfiltered.items.len(), 3);

        browser.set_criteria(FilterCriteria::new().with_destination("atlantis"));
        let filtered = browser.browse();
        assert!(filtered.filtered);
        assert!(filtered.items.is_empty());
        assert_eq!(filtered.pagination.total_pages, 0);
    }

    #[test]
    fn test_clear_filters_resets_criteria_and_page() {
        let mut browser = CatalogBrowser::new(fixture()).with_page_size(1);
        browser.set_criteria(FilterCriteria::new().with_max_price(10_000));
        browser.goto_page(2);
        browser.clear_filters();
        assert!(browser.criteria().is_unfiltered());
        assert_eq!(browser.page(), 1);
        assert_eq!(browser.browse().pagination.total, 3);
    }
}
