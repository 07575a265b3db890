//! Pagination links.

use roam_travel::browse::Pagination;

use crate::query::BrowseParams;

/// Windowed page links. Every link carries the list fragment so the
/// browser scrolls the results back into view on page change.
pub fn render_pagination(pagination: &Pagination, params: &BrowseParams) -> String {
    if pagination.total_pages <= 1 {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();

    if pagination.has_prev {
        parts.push(page_link(params, pagination.page - 1, "&laquo; Prev"));
    }
    for number in pagination.page_numbers(7) {
        if number == pagination.page {
            parts.push(format!(r#"<span class="current">{}</span>"#, number));
        } else {
            parts.push(page_link(params, number, &number.to_string()));
        }
    }
    if pagination.has_next {
        parts.push(page_link(params, pagination.page + 1, "Next &raquo;"));
    }

    format!(r#"<nav class="pagination">{}</nav>"#, parts.join("\n"))
}

fn page_link(params: &BrowseParams, page: i64, label: &str) -> String {
    let qs = params.query_string_for_page(page);
    let href = if qs.is_empty() {
        "/packages#trip-list".to_string()
    } else {
        format!("/packages?{}#trip-list", qs)
    };
    format!(r#"<a href="{}">{}</a>"#, href, label)
}
