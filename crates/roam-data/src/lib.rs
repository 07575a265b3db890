//! Hosted backend client for Roam.
//!
//! Provides a typed, ergonomic API over the hosted row store the
//! marketplace delegates persistence to: read queries for packages,
//! agencies, configuration, and tags; insert/update/delete for the
//! admin panel; and image upload to object storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use roam_data::{SiteConfig, StoreClient};
//!
//! let client = StoreClient::new("https://xyz.example.co", anon_key);
//!
//! let config = client.fetch_config()?;
//! let packages = client.fetch_packages(config.currency)?;
//! let agencies = client.fetch_agencies()?;
//! ```
//!
//! Fetches are one-shot: a failure is returned to the caller, which
//! renders a static error state with a manual retry. Nothing here
//! retries or caches.

mod config;
mod error;
mod query;
mod records;
mod response;
mod storage;

pub use config::{tags_from_rows, SiteConfig};
pub use error::StoreError;
pub use query::{Method, RowQuery};
pub use records::{AgencyRecord, ConfigRow, ImageRecord, PackageRecord, TagRow};
pub use response::Response;

use roam_travel::catalog::{Agency, TravelPackage};
use roam_travel::ids::{AgencyId, PackageId};
use roam_travel::money::Currency;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the hosted row store.
pub struct StoreClient {
    base_url: String,
    api_key: String,
    bearer: Option<String>,
}

impl StoreClient {
    /// Create a client for a store instance.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bearer: None,
        }
    }

    /// Attach a signed-in user's access token; admin mutations run
    /// under it instead of the anonymous key.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// The store base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Catalog reads
    // ------------------------------------------------------------------

    /// Fetch open package rows with embedded agency and image
    /// sub-records, featured order.
    pub fn fetch_package_records(&self) -> Result<Vec<PackageRecord>, StoreError> {
        let query = RowQuery::new("packages")
            .select("*,agency:agencies(*),images:package_images(*)")
            .eq("status", "open")
            .order("ranking", true);
        self.get_rows(&query)
    }

    /// Fetch every package row regardless of status (admin list).
    pub fn fetch_all_package_records(&self) -> Result<Vec<PackageRecord>, StoreError> {
        let query = RowQuery::new("packages")
            .select("*,agency:agencies(*),images:package_images(*)")
            .order("updated_at", true);
        self.get_rows(&query)
    }

    /// Fetch open packages as domain types.
    pub fn fetch_packages(&self, currency: Currency) -> Result<Vec<TravelPackage>, StoreError> {
        Ok(self
            .fetch_package_records()?
            .into_iter()
            .map(|record| record.into_package(currency))
            .collect())
    }

    /// Fetch raw agency rows.
    pub fn fetch_agency_records(&self) -> Result<Vec<AgencyRecord>, StoreError> {
        let query = RowQuery::new("agencies").select("*").order("name", false);
        self.get_rows(&query)
    }

    /// Fetch all agencies as domain types.
    pub fn fetch_agencies(&self) -> Result<Vec<Agency>, StoreError> {
        Ok(self
            .fetch_agency_records()?
            .into_iter()
            .map(AgencyRecord::into_agency)
            .collect())
    }

    /// Fetch site configuration.
    pub fn fetch_config(&self) -> Result<SiteConfig, StoreError> {
        let query = RowQuery::new("site_config").select("key,value");
        let rows: Vec<ConfigRow> = self.get_rows(&query)?;
        Ok(SiteConfig::from_rows(rows))
    }

    /// Fetch the filter tag list.
    pub fn fetch_tags(&self) -> Result<Vec<String>, StoreError> {
        let query = RowQuery::new("tags").select("name").order("name", false);
        let rows: Vec<TagRow> = self.get_rows(&query)?;
        Ok(tags_from_rows(rows))
    }

    /// Send a raw request against the store instance. The auth client
    /// shares the same host and uses this for its endpoints.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<Response, StoreError> {
        self.send_request(method, path, content_type, body)
    }

    /// Run a read query and decode the rows.
    pub fn get_rows<T: DeserializeOwned>(&self, query: &RowQuery) -> Result<Vec<T>, StoreError> {
        self.send_request(Method::Get, &query.build_path(), None, None)?
            .error_for_status()?
            .json()
    }

    // ------------------------------------------------------------------
    // Admin mutations
    // ------------------------------------------------------------------

    /// Insert a package row.
    pub fn insert_package(&self, record: &PackageRecord) -> Result<(), StoreError> {
        self.insert_row("packages", record)
    }

    /// Update a package row. Only the fields present on the patch are
    /// sent.
    pub fn update_package(
        &self,
        id: &PackageId,
        patch: &PackageRecord,
    ) -> Result<(), StoreError> {
        self.update_row("packages", id.as_str(), patch)
    }

    /// Delete a package row.
    pub fn delete_package(&self, id: &PackageId) -> Result<(), StoreError> {
        self.delete_row("packages", id.as_str())
    }

    /// Insert an agency row.
    pub fn insert_agency(&self, record: &AgencyRecord) -> Result<(), StoreError> {
        self.insert_row("agencies", record)
    }

    /// Update an agency row.
    pub fn update_agency(&self, id: &AgencyId, patch: &AgencyRecord) -> Result<(), StoreError> {
        self.update_row("agencies", id.as_str(), patch)
    }

    /// Delete an agency row.
    pub fn delete_agency(&self, id: &AgencyId) -> Result<(), StoreError> {
        self.delete_row("agencies", id.as_str())
    }

    fn insert_row<T: Serialize>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let body = serde_json::to_vec(row)?;
        self.send_request(
            Method::Post,
            &format!("/rest/v1/{}", table),
            Some("application/json"),
            Some(body),
        )?
        .error_for_status()?;
        Ok(())
    }

    fn update_row<T: Serialize>(&self, table: &str, id: &str, patch: &T) -> Result<(), StoreError> {
        let body = serde_json::to_vec(patch)?;
        let path = RowQuery::new(table).eq("id", id).build_path();
        self.send_request(Method::Patch, &path, Some("application/json"), Some(body))?
            .error_for_status()?;
        Ok(())
    }

    fn delete_row(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let path = RowQuery::new(table).eq("id", id).build_path();
        self.send_request(Method::Delete, &path, None, None)?
            .error_for_status()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    /// Send a request to the store.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn send_request(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<Response, StoreError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let spin_method = match method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(spin_method);
        request.uri(format!("{}{}", self.base_url, path));

        for (key, value) in query::auth_headers(&self.api_key, self.bearer.as_deref()) {
            request.header(key.as_str(), value.as_str());
        }
        if let Some(content_type) = content_type {
            request.header("Content-Type", content_type);
        }
        request.header("Prefer", "return=representation");

        let request = if let Some(body) = body {
            request.body(body).build()
        } else {
            request.build()
        };

        let response = spin_sdk::http::send(request)
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send a request to the store (non-WASM stub for host builds and
    /// tests).
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn send_request(
        &self,
        _method: Method,
        _path: &str,
        _content_type: Option<&str>,
        _body: Option<Vec<u8>>,
    ) -> Result<Response, StoreError> {
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = StoreClient::new("https://store.example.co/", "anon");
        assert_eq!(client.base_url(), "https://store.example.co");
    }

    #[test]
    fn test_update_patch_skips_absent_fields() {
        let patch = PackageRecord {
            ranking: Some(7),
            ..Default::default()
        };
        let body = serde_json::to_string(&patch).unwrap();
        assert_eq!(body, r#"{"ranking":7}"#);
    }
}
