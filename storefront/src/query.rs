//! URL query-string parsing for the catalog page.

use chrono::NaiveDate;
use roam_travel::browse::{FilterCriteria, SortKey};

/// Parsed catalog browse parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseParams {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub page: i64,
}

impl BrowseParams {
    /// Parse browse parameters from a URL query string. Absent or
    /// garbled values fall back to defaults; this never fails.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = BrowseParams {
            page: 1,
            ..Default::default()
        };
        let mut criteria = FilterCriteria::new();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = percent_decode(parts.next().unwrap_or(""));

            match key {
                "destination" => criteria = criteria.with_destination(value),
                "max_price" => {
                    // Entered in whole currency units; stored in minor.
                    if let Ok(whole) = value.trim().parse::<i64>() {
                        criteria = criteria.with_max_price(whole * 100);
                    }
                }
                "from" => {
                    if let Ok(date) = value.trim().parse::<NaiveDate>() {
                        criteria = criteria.with_earliest_departure(date);
                    }
                }
                "tag" => {
                    if !value.trim().is_empty() {
                        criteria = criteria.with_tag(value.trim().to_string());
                    }
                }
                "sort" => params.sort = SortKey::parse(&value),
                "page" => params.page = value.trim().parse().unwrap_or(1),
                _ => {}
            }
        }

        params.criteria = criteria;
        params
    }

    /// Rebuild the query string for links that keep the current
    /// filters but change the page.
    pub fn query_string_for_page(&self, page: i64) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(destination) = &self.criteria.destination {
            parts.push(format!("destination={}", percent_encode(destination)));
        }
        if let Some(max) = self.criteria.max_price {
            parts.push(format!("max_price={}", max / 100));
        }
        if let Some(from) = self.criteria.earliest_departure {
            parts.push(format!("from={}", from));
        }
        for tag in &self.criteria.tags {
            parts.push(format!("tag={}", percent_encode(tag)));
        }
        if self.sort != SortKey::default() {
            parts.push(format!("sort={}", self.sort.as_str()));
        }
        if page > 1 {
            parts.push(format!("page={}", page));
        }
        parts.join("&")
    }
}

/// Parse a urlencoded form body into key/value pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = percent_decode(parts.next().unwrap_or(""));
            let value = percent_decode(parts.next().unwrap_or(""));
            (key, value)
        })
        .collect()
}

/// Decode a percent-encoded query value ('+' as space).
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 3 <= bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode a query value.
pub fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_unfiltered() {
        let params = BrowseParams::from_query_string("");
        assert!(params.criteria.is_unfiltered());
        assert_eq!(params.sort, SortKey::Featured);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_full_query_parses() {
        let params = BrowseParams::from_query_string(
            "destination=spiti%20valley&max_price=25000&from=2025-06-01&tag=trekking&tag=camping&sort=price-asc&page=2",
        );
        assert_eq!(params.criteria.destination.as_deref(), Some("spiti valley"));
        assert_eq!(params.criteria.max_price, Some(2_500_000));
        assert_eq!(
            params.criteria.earliest_departure,
            Some("2025-06-01".parse().unwrap())
        );
        assert_eq!(params.criteria.tags, vec!["trekking", "camping"]);
        assert_eq!(params.sort, SortKey::PriceAsc);
        assert_eq!(params.page, 2);
    }

    #[test]
    fn test_garbled_values_fall_back() {
        let params =
            BrowseParams::from_query_string("max_price=lots&from=junetenth&page=minus&sort=??");
        assert!(params.criteria.is_unfiltered());
        assert_eq!(params.sort, SortKey::Featured);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_page_links_keep_filters() {
        let params = BrowseParams::from_query_string("destination=goa&sort=price-desc&page=3");
        let qs = params.query_string_for_page(2);
        assert_eq!(qs, "destination=goa&sort=price-desc&page=2");
        // Page 1 is the clean URL.
        assert_eq!(
            params.query_string_for_page(1),
            "destination=goa&sort=price-desc"
        );
    }

    #[test]
    fn test_parse_form() {
        let form = parse_form("title=Spiti+Valley&price=18999&tags=trek%2Ccamp");
        assert_eq!(form[0], ("title".to_string(), "Spiti Valley".to_string()));
        assert_eq!(form[1], ("price".to_string(), "18999".to_string()));
        assert_eq!(form[2], ("tags".to_string(), "trek,camp".to_string()));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("spiti+%26+kinnaur"), "spiti & kinnaur");
        assert_eq!(percent_decode("100%"), "100%");
    }
}
