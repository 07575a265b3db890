//! Travel package types.

use crate::catalog::{Availability, DepartureStatus};
use crate::ids::{AgencyId, ImageId, PackageId};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Package visibility status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PackageStatus {
    /// Package is open for booking and listed in the catalog.
    #[default]
    Open,
    /// Package is closed, not listed to customers.
    Closed,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Open => "open",
            PackageStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(PackageStatus::Open),
            "closed" => Some(PackageStatus::Closed),
            _ => None,
        }
    }
}

/// A package image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageImage {
    /// Unique image identifier.
    pub id: ImageId,
    /// Public URL of the image.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Whether this is the primary listing image.
    #[serde(default)]
    pub is_primary: bool,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

impl PackageImage {
    /// Create a new image from a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: ImageId::generate(),
            url: url.into(),
            alt_text: None,
            is_primary: false,
            position: 0,
        }
    }

    /// Mark this image as the primary listing image.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

/// A bookable group trip in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelPackage {
    /// Unique package identifier.
    pub id: PackageId,
    /// Package title.
    pub title: String,
    /// Full description.
    pub description: Option<String>,
    /// Per-person price.
    pub price: Money,
    /// Deposit required to hold a booking.
    pub advance: Option<Money>,
    /// Trip length in days.
    pub duration_days: u32,
    /// Maximum group size.
    pub group_size: u32,
    /// Visibility status.
    pub status: PackageStatus,
    /// Sort weight; higher ranks earlier in the featured order.
    pub ranking: i32,
    /// Tags for filtering.
    pub tags: Vec<String>,
    /// Free-text day-by-day itinerary.
    pub itinerary: Option<String>,
    /// Ordered image list; at most one is flagged primary.
    pub images: Vec<PackageImage>,
    /// Departure schedule.
    pub availability: Availability,
    /// Operating agency, if any.
    pub agency_id: Option<AgencyId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl TravelPackage {
    /// Create a new open package.
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: PackageId::generate(),
            title: title.into(),
            description: None,
            price,
            advance: None,
            duration_days: 1,
            group_size: 1,
            status: PackageStatus::Open,
            ranking: 0,
            tags: Vec::new(),
            itinerary: None,
            images: Vec::new(),
            availability: Availability::new(),
            agency_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the trip length and group size.
    pub fn with_trip_shape(mut self, duration_days: u32, group_size: u32) -> Self {
        self.duration_days = duration_days;
        self.group_size = group_size;
        self
    }

    /// Set the booking deposit.
    pub fn with_advance(mut self, advance: Money) -> Self {
        self.advance = Some(advance);
        self
    }

    /// Set the sort weight.
    pub fn with_ranking(mut self, ranking: i32) -> Self {
        self.ranking = ranking;
        self
    }

    /// Set the departure schedule.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Associate the operating agency.
    pub fn with_agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    /// Add a tag, ignoring duplicates.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            self.tags.push(tag);
        }
    }

    /// Whether the package is open for booking.
    pub fn is_open(&self) -> bool {
        self.status == PackageStatus::Open
    }

    /// The primary listing image: the flagged one, else the first.
    pub fn primary_image(&self) -> Option<&PackageImage> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }

    /// Bookability of the schedule as of `today`.
    pub fn departure_status(&self, today: NaiveDate) -> DepartureStatus {
        self.availability.departure_status(today)
    }

    /// Short uppercase code identifying this package in booking
    /// messages, e.g. "RM-4F2A9C".
    pub fn reference_code(&self) -> String {
        let tail: String = self
            .id
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .rev()
            .take(6)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("RM-{}", tail.to_uppercase())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_package_creation() {
        let pkg = TravelPackage::new("Spiti Valley Circuit", Money::new(1_899_900, Currency::INR))
            .with_trip_shape(7, 14);
        assert!(pkg.is_open());
        assert_eq!(pkg.duration_days, 7);
        assert!(pkg.availability.is_empty());
    }

    #[test]
    fn test_primary_image_prefers_flag() {
        let mut pkg = TravelPackage::new("Goa Getaway", Money::new(799_900, Currency::INR));
        pkg.images.push(PackageImage::new("https://img/one.jpg"));
        pkg.images.push(PackageImage::new("https://img/two.jpg").primary());
        assert_eq!(pkg.primary_image().unwrap().url, "https://img/two.jpg");
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let mut pkg = TravelPackage::new("Goa Getaway", Money::new(799_900, Currency::INR));
        pkg.images.push(PackageImage::new("https://img/one.jpg"));
        pkg.images.push(PackageImage::new("https://img/two.jpg"));
        assert_eq!(pkg.primary_image().unwrap().url, "https://img/one.jpg");
    }

    #[test]
    fn test_add_tag_dedupes() {
        let mut pkg = TravelPackage::new("Ladakh Overland", Money::new(2_499_900, Currency::INR));
        pkg.add_tag("trekking");
        pkg.add_tag("Trekking");
        assert_eq!(pkg.tags.len(), 1);
    }

    #[test]
    fn test_reference_code() {
        let mut pkg = TravelPackage::new("Rann of Kutch", Money::new(999_900, Currency::INR));
        pkg.id = PackageId::new("pkg-00deadbeef");
        assert_eq!(pkg.reference_code(), "RM-ADBEEF");
    }

    #[test]
    fn test_unscheduled_status() {
        let pkg = TravelPackage::new("Unscheduled Trip", Money::new(100_000, Currency::INR));
        assert_eq!(
            pkg.departure_status(date("2025-02-01")),
            DepartureStatus::ComingSoon
        );
    }
}
