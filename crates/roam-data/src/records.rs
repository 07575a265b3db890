//! Raw remote row shapes and their conversion into domain types.
//!
//! Rows arrive from the hosted store with optional fields and
//! inconsistent nesting, so every field here is optional or defaulted
//! and the conversion applies safe fallbacks: a missing price becomes
//! zero, a missing availability map means unscheduled, unparsable
//! availability keys are skipped with a warning. This is the single
//! place remote shapes become `roam_travel` types.

use chrono::NaiveDate;
use roam_travel::catalog::{Agency, Availability, PackageImage, PackageStatus, TravelPackage};
use roam_travel::ids::{AgencyId, ImageId, PackageId};
use roam_travel::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A package row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-person price in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Deposit in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<String>,
    /// Embedded image sub-records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRecord>,
    /// Legacy single-image column still present on old rows; folded
    /// into the image list during conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Departure date string -> remaining slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<BTreeMap<String, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    /// Embedded agency sub-record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<AgencyRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl PackageRecord {
    /// Convert into the canonical package plus the embedded agency,
    /// if the row carried one.
    pub fn into_parts(self, currency: Currency) -> (TravelPackage, Option<Agency>) {
        let agency = self.agency.map(AgencyRecord::into_agency);
        let agency_id = self
            .agency_id
            .map(AgencyId::new)
            .or_else(|| agency.as_ref().map(|a| a.id.clone()));

        let mut images: Vec<PackageImage> = self
            .images
            .into_iter()
            .map(ImageRecord::into_image)
            .collect();
        images.sort_by_key(|img| img.position);
        if images.is_empty() {
            if let Some(url) = self.image_url {
                images.push(PackageImage::new(url).primary());
            }
        }

        let package = TravelPackage {
            id: self.id.map(PackageId::new).unwrap_or_else(PackageId::generate),
            title: self.title.unwrap_or_default(),
            description: self.description,
            price: Money::new(self.price.unwrap_or(0), currency),
            advance: self.advance.map(|a| Money::new(a, currency)),
            duration_days: self.duration_days.unwrap_or(1),
            group_size: self.group_size.unwrap_or(1),
            status: self
                .status
                .as_deref()
                .and_then(PackageStatus::parse)
                .unwrap_or_default(),
            ranking: self.ranking.unwrap_or(0),
            tags: self.tags,
            itinerary: self.itinerary,
            images,
            availability: parse_availability(self.availability.unwrap_or_default()),
            agency_id,
            created_at: self.created_at.unwrap_or(0),
            updated_at: self.updated_at.unwrap_or(0),
        };

        (package, agency)
    }

    /// Convert into the canonical package, discarding any embedded
    /// agency record.
    pub fn into_package(self, currency: Currency) -> TravelPackage {
        self.into_parts(currency).0
    }
}

/// An image sub-record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub position: i32,
}

impl ImageRecord {
    fn into_image(self) -> PackageImage {
        PackageImage {
            id: self.id.map(ImageId::new).unwrap_or_else(ImageId::generate),
            url: self.url.unwrap_or_default(),
            alt_text: self.alt_text,
            is_primary: self.is_primary,
            position: self.position,
        }
    }
}

/// An agency row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgencyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl AgencyRecord {
    /// Convert into the canonical agency with clamped rating.
    pub fn into_agency(self) -> Agency {
        Agency {
            id: self.id.map(AgencyId::new).unwrap_or_else(AgencyId::generate),
            name: self.name.unwrap_or_else(|| "Unnamed agency".to_string()),
            rating: self.rating.unwrap_or(0.0).clamp(0.0, 5.0),
            created_at: self.created_at.unwrap_or(0),
            updated_at: self.updated_at.unwrap_or(0),
        }
    }
}

/// A key/value configuration row.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigRow {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A tag-name row.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TagRow {
    #[serde(default)]
    pub name: Option<String>,
}

/// Parse a raw availability map, skipping keys that are not dates and
/// clamping negative counts to zero.
fn parse_availability(raw: BTreeMap<String, i64>) -> Availability {
    let mut availability = Availability::new();
    for (key, count) in raw {
        match key.parse::<NaiveDate>() {
            Ok(date) => availability.set(date, count.max(0) as u32),
            Err(_) => {
                warn!(key = %key, "skipping unparsable availability date");
            }
        }
    }
    availability
}
