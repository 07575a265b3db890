//! Page sections rendered as HTML strings.

mod admin;
mod catalog;
mod detail;
mod filters;
mod pagination;

pub use admin::{
    package_record_from_form, render_admin, render_admin_signin, render_notice,
};
pub use catalog::{render_package_card, render_results, render_results_header};
pub use detail::render_detail;
pub use filters::render_filters;
pub use pagination::render_pagination;

/// Escape text for interpolation into HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
