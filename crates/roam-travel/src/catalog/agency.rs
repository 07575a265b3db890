//! Agency types.

use crate::ids::AgencyId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A third-party trip operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    /// Unique agency identifier.
    pub id: AgencyId,
    /// Display name.
    pub name: String,
    /// Customer rating, 0.0 to 5.0.
    pub rating: f32,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Agency {
    /// Create a new unrated agency.
    pub fn new(name: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: AgencyId::generate(),
            name: name.into(),
            rating: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the rating, clamped to the 0.0-5.0 scale.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self
    }

    /// Rating formatted for display, e.g. "4.6".
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Lookup table resolving the weak agency reference on packages.
///
/// A package may reference an agency that was deleted or never synced;
/// lookups simply return None in that case.
#[derive(Debug, Clone, Default)]
pub struct AgencyDirectory {
    agencies: HashMap<AgencyId, Agency>,
}

impl AgencyDirectory {
    /// Build a directory from fetched agency rows.
    pub fn from_agencies(agencies: Vec<Agency>) -> Self {
        Self {
            agencies: agencies.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    /// Look up an agency by ID.
    pub fn get(&self, id: &AgencyId) -> Option<&Agency> {
        self.agencies.get(id)
    }

    /// Resolve a package's optional agency reference.
    pub fn resolve(&self, agency_id: Option<&AgencyId>) -> Option<&Agency> {
        agency_id.and_then(|id| self.get(id))
    }

    /// Number of known agencies.
    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
