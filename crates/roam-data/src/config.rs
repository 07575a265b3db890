//! Site configuration from key/value rows.
//!
//! Configuration values are externally authored JSON documents stored
//! in a text column. Each known key is parsed strictly; a malformed
//! value logs a warning and resolves to that key's hardcoded default,
//! so a bad row can disable a feature but never crash a page.
//! Construction is an explicit step; nothing is cached at import time.

use crate::records::{ConfigRow, TagRow};
use roam_travel::money::Currency;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default messaging deep-link destination.
const DEFAULT_BOOKING_PHONE: &str = "919800000000";

/// Marketplace-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Phone number the booking deep-link targets.
    pub booking_phone: String,
    /// Currency for all listed prices.
    pub currency: Currency,
    /// Tags pinned to the top of the filter list.
    pub featured_tags: Vec<String>,
    /// Whether the announcement banner is shown.
    pub show_banner: bool,
    /// Announcement banner text.
    pub banner_text: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_phone: DEFAULT_BOOKING_PHONE.to_string(),
            currency: Currency::INR,
            featured_tags: Vec::new(),
            show_banner: false,
            banner_text: None,
        }
    }
}

impl SiteConfig {
    /// Build the configuration from fetched key/value rows.
    pub fn from_rows(rows: Vec<ConfigRow>) -> Self {
        let mut config = SiteConfig::default();
        for row in rows {
            let Some(value) = row.value.as_deref() else {
                continue;
            };
            match row.key.as_str() {
                "booking_phone" => {
                    if let Some(phone) = parse_value::<String>(&row.key, value) {
                        config.booking_phone = phone;
                    }
                }
                "currency" => {
                    if let Some(code) = parse_value::<String>(&row.key, value) {
                        match Currency::from_code(&code) {
                            Some(currency) => config.currency = currency,
                            None => warn!(key = "currency", %code, "unknown currency code"),
                        }
                    }
                }
                "featured_tags" => {
                    if let Some(tags) = parse_value::<Vec<String>>(&row.key, value) {
                        config.featured_tags = tags;
                    }
                }
                "show_banner" => {
                    if let Some(show) = parse_value::<bool>(&row.key, value) {
                        config.show_banner = show;
                    }
                }
                "banner_text" => {
                    config.banner_text = parse_value::<String>(&row.key, value);
                }
                other => debug!(key = %other, "ignoring unknown config key"),
            }
        }
        config
    }
}

/// Strictly parse one configuration value; None (with a warning) on
/// malformed input so the caller falls back to the default.
fn parse_value<T: DeserializeOwned>(key: &str, value: &str) -> Option<T> {
    match serde_json::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(%key, %err, "malformed config value, using default");
            None
        }
    }
}

/// Collect filter tags from tag-name rows, dropping blanks and
/// duplicates while preserving order.
pub fn tags_from_rows(rows: Vec<TagRow>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for row in rows {
        let Some(name) = row.name else { continue };
        let name = name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
            tags.push(name);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> ConfigRow {
        ConfigRow {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn test_parses_known_keys() {
        let config = SiteConfig::from_rows(vec![
            row("booking_phone", r#""917700112233""#),
            row("currency", r#""USD""#),
            row("featured_tags", r#"["trekking","beach"]"#),
            row("show_banner", "true"),
            row("banner_text", r#""Monsoon sale""#),
        ]);
        assert_eq!(config.booking_phone, "917700112233");
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.featured_tags, vec!["trekking", "beach"]);
        assert!(config.show_banner);
        assert_eq!(config.banner_text.as_deref(), Some("Monsoon sale"));
    }

    #[test]
    fn test_malformed_value_falls_back_per_key() {
        let config = SiteConfig::from_rows(vec![
            // Unquoted string is not valid JSON; the key keeps its default.
            row("booking_phone", "917700112233"),
            row("show_banner", "yes"),
            row("featured_tags", r#"["himalaya"]"#),
        ]);
        assert_eq!(config.booking_phone, DEFAULT_BOOKING_PHONE);
        assert!(!config.show_banner);
        // A bad sibling key does not poison parsed ones.
        assert_eq!(config.featured_tags, vec!["himalaya"]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = SiteConfig::from_rows(vec![row("mystery", "42")]);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_tags_from_rows_dedupes_and_trims() {
        let rows = vec![
            TagRow { name: Some("Trekking".to_string()) },
            TagRow { name: Some("  ".to_string()) },
            TagRow { name: None },
            TagRow { name: Some("trekking".to_string()) },
            TagRow { name: Some("Beach".to_string()) },
        ];
        assert_eq!(tags_from_rows(rows), vec!["Trekking", "Beach"]);
    }
}
