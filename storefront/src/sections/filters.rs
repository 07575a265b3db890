//! Filter bar section.

use roam_travel::browse::{FilterCriteria, SortKey};

use crate::sections::escape_html;

/// The filter form. Submits with GET so the catalog URL stays
/// shareable; changing any control lands back on page 1.
pub fn render_filters(criteria: &FilterCriteria, sort: SortKey, tags: &[String]) -> String {
    let destination = criteria.destination.as_deref().unwrap_or("");
    let max_price = criteria
        .max_price
        .map(|minor| (minor / 100).to_string())
        .unwrap_or_default();
    let from = criteria
        .earliest_departure
        .map(|d| d.to_string())
        .unwrap_or_default();

    let tag_choices: Vec<String> = tags
        .iter()
        .map(|tag| {
            let checked = if criteria.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label><input type="checkbox" name="tag" value="{value}"{checked}> {label}</label>"#,
                value = escape_html(tag),
                checked = checked,
                label = escape_html(tag),
            )
        })
        .collect();

    let sort_options: Vec<String> = SortKey::all()
        .iter()
        .map(|key| {
            let selected = if *key == sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                selected,
                key.display_name()
            )
        })
        .collect();

    let clear = if criteria.is_unfiltered() {
        String::new()
    } else {
        r#"<a href="/packages">Clear filters</a>"#.to_string()
    };

    format!(
        r#"<form class="filter-bar" method="GET" action="/packages">
    <div><label for="destination">Destination</label>
        <input id="destination" name="destination" type="text" placeholder="Search trips" value="{destination}"></div>
    <div><label for="max_price">Max price</label>
        <input id="max_price" name="max_price" type="number" min="0" value="{max_price}"></div>
    <div><label for="from">Departing after</label>
        <input id="from" name="from" type="date" value="{from}"></div>
    <div class="tag-choices">{tags}</div>
    <div><label for="sort">Sort</label>
        <select id="sort" name="sort">{sorts}</select></div>
    <button class="btn" type="submit">Apply</button>
    {clear}
</form>"#,
        destination = escape_html(destination),
        max_price = max_price,
        from = from,
        tags = tag_choices.join("\n"),
        sorts = sort_options.join(""),
        clear = clear,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_state_round_trips() {
        let criteria = FilterCriteria::new()
            .with_destination("spiti")
            .with_max_price(2_500_000)
            .with_tag("trekking");
        let html = render_filters(
            &criteria,
            SortKey::PriceDesc,
            &["trekking".to_string(), "beach".to_string()],
        );
        assert!(html.contains(r#"value="spiti""#));
        assert!(html.contains(r#"value="25000""#));
        assert!(html.contains(r#"value="trekking" checked"#));
        assert!(html.contains(r#"value="price-desc" selected"#));
        assert!(html.contains("Clear filters"));
    }

    #[test]
    fn test_no_clear_link_when_unfiltered() {
        let html = render_filters(&FilterCriteria::new(), SortKey::Featured, &[]);
        assert!(!html.contains("Clear filters"));
    }
}
