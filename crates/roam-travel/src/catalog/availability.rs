//! Departure availability tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Departure schedule for a package: date to remaining-slot count.
///
/// A zero count means that departure is sold out. An *empty* schedule
/// means the package has not been scheduled at all yet, which renders
/// as "coming soon" and must never be treated as sold out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Availability {
    slots: BTreeMap<NaiveDate, u32>,
}

impl Availability {
    /// Create an empty (unscheduled) availability map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing date-to-slots map.
    pub fn from_map(slots: BTreeMap<NaiveDate, u32>) -> Self {
        Self { slots }
    }

    /// Set the remaining slots for a departure date.
    pub fn set(&mut self, date: NaiveDate, remaining: u32) {
        self.slots.insert(date, remaining);
    }

    /// Remove a departure date from the schedule.
    pub fn remove(&mut self, date: NaiveDate) {
        self.slots.remove(&date);
    }

    /// Whether any departure has ever been scheduled.
    pub fn is_scheduled(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Number of scheduled departure dates.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remaining slots on a specific date, if scheduled.
    pub fn remaining_on(&self, date: NaiveDate) -> Option<u32> {
        self.slots.get(&date).copied()
    }

    /// Whether any departure on or after `date` has remaining slots.
    pub fn has_open_date_from(&self, date: NaiveDate) -> bool {
        self.slots
            .range(date..)
            .any(|(_, &remaining)| remaining > 0)
    }

    /// All departure dates on or after `date` with remaining slots,
    /// in ascending order.
    pub fn open_dates_from(&self, date: NaiveDate) -> Vec<NaiveDate> {
        self.slots
            .range(date..)
            .filter(|(_, &remaining)| remaining > 0)
            .map(|(&d, _)| d)
            .collect()
    }

    /// The earliest open departure on or after `date`.
    pub fn next_departure_from(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.slots
            .range(date..)
            .find(|(_, &remaining)| remaining > 0)
            .map(|(&d, _)| d)
    }

    /// The latest departure date with remaining slots, regardless of today.
    pub fn latest_open_date(&self) -> Option<NaiveDate> {
        self.slots
            .iter()
            .rev()
            .find(|(_, &remaining)| remaining > 0)
            .map(|(&d, _)| d)
    }

    /// Iterate over scheduled departures in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.slots.iter().map(|(&d, &r)| (d, r))
    }

    /// Classify the schedule relative to `today`.
    pub fn departure_status(&self, today: NaiveDate) -> DepartureStatus {
        if self.slots.is_empty() {
            return DepartureStatus::ComingSoon;
        }
        if self.has_open_date_from(today) {
            return DepartureStatus::Bookable;
        }
        // Scheduled but nothing bookable: either every date has passed,
        // or a future date exists with zero remaining slots.
        if self.slots.keys().all(|&d| d < today) {
            DepartureStatus::Departed
        } else {
            DepartureStatus::SoldOut
        }
    }
}

/// Bookability of a package's schedule as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepartureStatus {
    /// No departure has been scheduled yet.
    ComingSoon,
    /// Every scheduled departure is in the past.
    Departed,
    /// Future departures exist but none has remaining slots.
    SoldOut,
    /// At least one future departure has remaining slots.
    Bookable,
}

impl DepartureStatus {
    /// Short label for catalog badges.
    pub fn label(&self) -> &'static str {
        match self {
            DepartureStatus::ComingSoon => "Coming soon",
            DepartureStatus::Departed => "Departed",
            DepartureStatus::SoldOut => "Sold out",
            DepartureStatus::Bookable => "Available",
        }
    }

    pub fn is_bookable(&self) -> bool {
        matches!(self, DepartureStatus::Bookable)
    }
}
