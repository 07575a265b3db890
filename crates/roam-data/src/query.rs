//! Row query builder.
//!
//! Builds the REST paths the hosted row store understands
//! (`/rest/v1/<table>?select=...&col=eq.value&order=col.desc`).

use std::collections::HashMap;

/// HTTP methods the store client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A read query against one table.
#[derive(Debug, Clone)]
pub struct RowQuery {
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl RowQuery {
    /// Start a query against a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Set the column list, including embedded sub-records
    /// (e.g. `*,agency:agencies(*)`).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.into())));
        self
    }

    /// Case-insensitive pattern filter.
    pub fn ilike(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters
            .push((column.into(), format!("ilike.{}", pattern.into())));
        self
    }

    /// Order by a column.
    pub fn order(mut self, column: impl Into<String>, descending: bool) -> Self {
        let dir = if descending { "desc" } else { "asc" };
        self.order = Some(format!("{}.{}", column.into(), dir));
        self
    }

    /// Limit the row count.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The table this query reads.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Build the request path.
    pub fn build_path(&self) -> String {
        let mut params: Vec<(String, String)> = Vec::new();
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        for (column, op) in &self.filters {
            params.push((column.clone(), op.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if params.is_empty() {
            return format!("/rest/v1/{}", self.table);
        }

        let query: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect();
        format!("/rest/v1/{}?{}", self.table, query.join("&"))
    }
}

/// Percent-encode a query component, leaving the characters the row
/// store's operators use (`.`, `*`, `(`, `)`, `,`, `:`) intact.
pub(crate) fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => result.push(c),
            '-' | '_' | '.' | '~' | '*' | '(' | ')' | ',' | ':' => result.push(c),
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

/// Build headers shared by every store request.
pub(crate) fn auth_headers(api_key: &str, bearer: Option<&str>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("apikey".to_string(), api_key.to_string());
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", bearer.unwrap_or(api_key)),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_table_path() {
        let query = RowQuery::new("agencies");
        assert_eq!(query.build_path(), "/rest/v1/agencies");
    }

    #[test]
    fn test_full_path() {
        let query = RowQuery::new("packages")
            .select("*,agency:agencies(*),images:package_images(*)")
            .eq("status", "open")
            .order("ranking", true)
            .limit(100);
        assert_eq!(
            query.build_path(),
            "/rest/v1/packages?select=*,agency:agencies(*),images:package_images(*)\
             &status=eq.open&order=ranking.desc&limit=100"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let query = RowQuery::new("packages").ilike("title", "%ladakh trip%");
        assert_eq!(
            query.build_path(),
            "/rest/v1/packages?title=ilike.%25ladakh%20trip%25"
        );
    }

    #[test]
    fn test_auth_headers_default_to_api_key() {
        let headers = auth_headers("anon-key", None);
        assert_eq!(headers.get("apikey").unwrap(), "anon-key");
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer anon-key");

        let headers = auth_headers("anon-key", Some("user-token"));
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer user-token");
    }
}
