//! Catalog grid sections.

use chrono::NaiveDate;
use roam_travel::browse::BrowseResults;
use roam_travel::catalog::{AgencyDirectory, DepartureStatus, TravelPackage};

use crate::sections::escape_html;

/// Header line above the grid, e.g. "Showing 13-24 of 40 trips".
pub fn render_results_header(results: &BrowseResults) -> String {
    let p = &results.pagination;
    if p.total == 0 {
        return String::new();
    }
    format!(
        r#"<div class="results-header"><span>Showing {}&ndash;{} of {} trips</span></div>"#,
        p.start_item(),
        p.end_item(),
        p.total
    )
}

/// The card grid, with distinct empty states for "no filters applied"
/// and "filters matched nothing".
pub fn render_results(
    results: &BrowseResults,
    agencies: &AgencyDirectory,
    today: NaiveDate,
) -> String {
    if results.items.is_empty() {
        return if results.filtered {
            r#"<div class="empty-state" id="trip-list">
    <p>No trips match your filters.</p>
    <a href="/packages">Clear filters</a>
</div>"#
                .to_string()
        } else {
            r#"<div class="empty-state" id="trip-list"><p>No trips are live yet. Check back soon!</p></div>"#
                .to_string()
        };
    }

    let cards: Vec<String> = results
        .items
        .iter()
        .map(|pkg| render_package_card(pkg, agencies, today))
        .collect();
    format!(
        r#"<div class="trip-grid" id="trip-list">
{}
</div>"#,
        cards.join("\n")
    )
}

/// One package card.
pub fn render_package_card(
    pkg: &TravelPackage,
    agencies: &AgencyDirectory,
    today: NaiveDate,
) -> String {
    let photo = match pkg.primary_image() {
        Some(image) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(&image.url),
            escape_html(image.alt_text.as_deref().unwrap_or(&pkg.title))
        ),
        None => r#"<div class="no-photo"></div>"#.to_string(),
    };

    let badge = departure_badge(pkg.departure_status(today));

    let agency_line = match agencies.resolve(pkg.agency_id.as_ref()) {
        Some(agency) => format!(
            r#"<div class="trip-meta">by {} &middot; &#9733; {}</div>"#,
            escape_html(&agency.name),
            agency.rating_display()
        ),
        None => String::new(),
    };

    format!(
        r#"<article class="trip-card">
    {photo}
    <div class="card-body">
        <h3><a href="/package/{id}">{title}</a></h3>
        <div class="trip-meta">{days} days &middot; up to {group} people</div>
        {agency_line}
        <div class="trip-price">{price} <span class="trip-meta">per person</span></div>
        {badge}
    </div>
</article>"#,
        photo = photo,
        id = escape_html(pkg.id.as_str()),
        title = escape_html(&pkg.title),
        days = pkg.duration_days,
        group = pkg.group_size,
        agency_line = agency_line,
        price = pkg.price.display(),
        badge = badge,
    )
}

/// Badge for non-bookable schedules. A package with an empty schedule
/// is "coming soon", never "sold out".
fn departure_badge(status: DepartureStatus) -> String {
    match status {
        DepartureStatus::Bookable => String::new(),
        DepartureStatus::ComingSoon => {
            r#"<span class="badge coming-soon">Coming soon</span>"#.to_string()
        }
        DepartureStatus::Departed | DepartureStatus::SoldOut => {
            format!(r#"<span class="badge sold-out">{}</span>"#, status.label())
        }
    }
}
