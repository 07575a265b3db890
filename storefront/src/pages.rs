//! Full page assembly.

use chrono::NaiveDate;
use roam_data::{AgencyRecord, PackageRecord, SiteConfig};
use roam_travel::browse::CatalogBrowser;

use crate::data::CatalogSnapshot;
use crate::query::BrowseParams;
use crate::sections;
use crate::shell;

/// The catalog page for a parsed query string.
pub fn catalog_page(snapshot: &CatalogSnapshot, params: &BrowseParams, today: NaiveDate) -> String {
    let mut browser = CatalogBrowser::new(snapshot.packages.clone());
    browser.set_criteria(params.criteria.clone());
    browser.set_sort(params.sort);
    browser.goto_page(params.page);
    let results = browser.browse();

    let body = format!(
        "{}\n{}\n{}\n{}",
        sections::render_filters(&params.criteria, params.sort, &snapshot.tags),
        sections::render_results_header(&results),
        sections::render_results(&results, &snapshot.agencies, today),
        sections::render_pagination(&results.pagination, params),
    );
    shell::render_page("Group trips - Roam", &snapshot.config, &body)
}

/// The package detail page; None when the id is unknown.
pub fn detail_page(snapshot: &CatalogSnapshot, id: &str, today: NaiveDate) -> Option<String> {
    let pkg = snapshot.package(id)?;
    let agency = snapshot.agencies.resolve(pkg.agency_id.as_ref());
    let body = sections::render_detail(pkg, agency, &snapshot.config, today);
    let title = format!("{} - Roam", pkg.title);
    Some(shell::render_page(&title, &snapshot.config, &body))
}

/// 404 page.
pub fn not_found_page(config: &SiteConfig) -> String {
    shell::render_page(
        "Not found - Roam",
        config,
        r#"<section class="fetch-error"><h2>That trip doesn't exist</h2>
<p>It may have been removed.</p><a class="btn" href="/packages">Browse trips</a></section>"#,
    )
}

/// Static error page for a failed fetch, with a manual retry action.
pub fn error_page(message: &str, retry_href: &str) -> String {
    shell::render_page(
        "Something went wrong - Roam",
        &SiteConfig::default(),
        &shell::render_fetch_error(message, retry_href),
    )
}

/// The admin panel page.
pub fn admin_page(
    packages: &[PackageRecord],
    agencies: &[AgencyRecord],
    config: &SiteConfig,
    notice: Option<&str>,
) -> String {
    let body = sections::render_admin(packages, agencies, notice);
    shell::render_page("Admin - Roam", config, &body)
}

/// The admin sign-in page.
pub fn admin_signin_page(config: &SiteConfig, error: Option<&str>) -> String {
    shell::render_page("Admin sign in - Roam", config, &sections::render_admin_signin(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::assemble;
    use roam_data::PackageRecord;

    fn snapshot() -> CatalogSnapshot {
        let records: Vec<PackageRecord> = serde_json::from_str(
            r#"[
              {"id": "pkg-1", "title": "Spiti Valley Circuit", "price": 1899900,
               "availability": {"2025-06-01": 3}},
              {"id": "pkg-2", "title": "Goa Getaway", "price": 799900}
            ]"#,
        )
        .unwrap();
        assemble(records, vec![], SiteConfig::default(), vec!["trekking".to_string()])
    }

    fn today() -> NaiveDate {
        "2025-02-01".parse().unwrap()
    }

    #[test]
    fn test_catalog_page_renders_cards() {
        let html = catalog_page(&snapshot(), &BrowseParams::from_query_string(""), today());
        assert!(html.contains("Spiti Valley Circuit"));
        assert!(html.contains("Goa Getaway"));
        assert!(html.contains("Coming soon"));
        assert!(html.contains("Showing 1&ndash;2 of 2 trips"));
    }

    #[test]
    fn test_catalog_page_filtered_empty_state() {
        let html = catalog_page(
            &snapshot(),
            &BrowseParams::from_query_string("destination=atlantis"),
            today(),
        );
        assert!(html.contains("No trips match your filters"));
    }

    #[test]
    fn test_detail_page_lookup() {
        assert!(detail_page(&snapshot(), "pkg-1", today())
            .unwrap()
            .contains("wa.me"));
        assert!(detail_page(&snapshot(), "missing", today()).is_none());
    }
}
