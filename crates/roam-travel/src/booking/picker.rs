//! Departure date selection for the package detail view.

use crate::catalog::Availability;
use crate::error::TravelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why the booking action is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingBlock {
    /// No departure has ever been scheduled.
    NotScheduled,
    /// Every scheduled departure is in the past.
    AllDeparted,
    /// Future departures exist but all are at capacity.
    SoldOut,
    /// A bookable departure exists but none is selected.
    NoneSelected,
}

impl BookingBlock {
    /// Label shown on the disabled booking control.
    pub fn label(&self) -> &'static str {
        match self {
            BookingBlock::NotScheduled => "Dates coming soon",
            BookingBlock::AllDeparted => "All departures have left",
            BookingBlock::SoldOut => "All departures sold out",
            BookingBlock::NoneSelected => "Select a departure date",
        }
    }
}

/// Selectable departure dates for one package, with the current
/// selection.
///
/// The bookable set is fixed at construction from the availability
/// snapshot: dates on or after `today` with remaining slots. The
/// initial selection is the earliest such date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeparturePicker {
    available: Vec<NaiveDate>,
    selected: Option<NaiveDate>,
    scheduled: bool,
    future_scheduled: bool,
    today: NaiveDate,
}

impl DeparturePicker {
    /// Build a picker from a package's availability as of `today`.
    pub fn new(availability: &Availability, today: NaiveDate) -> Self {
        let available = availability.open_dates_from(today);
        let selected = available.first().copied();
        Self {
            available,
            selected,
            scheduled: availability.is_scheduled(),
            future_scheduled: availability.iter().any(|(d, _)| d >= today),
            today,
        }
    }

    /// Dates the customer can select, ascending.
    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.available
    }

    /// The currently selected departure, if any.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The day the picker was built against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Select a departure date.
    ///
    /// Past, sold-out, and unscheduled dates are rejected and the
    /// previous selection is kept.
    pub fn select(&mut self, date: NaiveDate) -> Result<(), TravelError> {
        if date < self.today {
            return Err(TravelError::DateInPast(date));
        }
        if !self.available.contains(&date) {
            return Err(TravelError::DateSoldOut(date));
        }
        self.selected = Some(date);
        Ok(())
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Why booking is currently disabled, or None when it can proceed.
    pub fn blocker(&self) -> Option<BookingBlock> {
        if !self.scheduled {
            return Some(BookingBlock::NotScheduled);
        }
        if self.available.is_empty() {
            // Scheduled but nothing selectable: distinguish "all
            // departed" from "future but full" for the disabled label.
            return Some(if self.future_scheduled {
                BookingBlock::SoldOut
            } else {
                BookingBlock::AllDeparted
            });
        }
        if self.selected.is_none() {
            return Some(BookingBlock::NoneSelected);
        }
        None
    }

    /// Whether the booking action is enabled.
    pub fn can_book(&self) -> bool {
        self.blocker().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_past_sold_out_date_rejected() {
        let mut availability = Availability::new();
        availability.set(date("2025-01-10"), 0);
        availability.set(date("2025-06-01"), 3);

        let mut picker = DeparturePicker::new(&availability, date("2025-02-01"));
        assert_eq!(picker.available_dates(), &[date("2025-06-01")]);
        assert_eq!(picker.selected(), Some(date("2025-06-01")));

        // Selecting the past, sold-out date is rejected and the prior
        // selection kept.
        assert!(picker.select(date("2025-01-10")).is_err());
        assert_eq!(picker.selected(), Some(date("2025-06-01")));
        assert!(picker.can_book());
    }

    #[test]
    fn test_initial_selection_is_first_open_date() {
        let mut availability = Availability::new();
        availability.set(date("2025-03-15"), 2);
        availability.set(date("2025-04-01"), 6);

        let picker = DeparturePicker::new(&availability, date("2025-02-01"));
        assert_eq!(picker.selected(), Some(date("2025-03-15")));
    }

    #[test]
    fn test_not_scheduled_blocker() {
        let picker = DeparturePicker::new(&Availability::new(), date("2025-02-01"));
        assert_eq!(picker.blocker(), Some(BookingBlock::NotScheduled));
        assert!(!picker.can_book());
    }

    #[test]
    fn test_all_departed_blocker() {
        let mut availability = Availability::new();
        availability.set(date("2024-05-01"), 4);
        let picker = DeparturePicker::new(&availability, date("2025-02-01"));
        assert_eq!(picker.blocker(), Some(BookingBlock::AllDeparted));
    }

    #[test]
    fn test_sold_out_blocker() {
        let mut availability = Availability::new();
        availability.set(date("2025-06-01"), 0);
        let picker = DeparturePicker::new(&availability, date("2025-02-01"));
        assert_eq!(picker.blocker(), Some(BookingBlock::SoldOut));
    }

    #[test]
    fn test_none_selected_blocker() {
        let mut availability = Availability::new();
        availability.set(date("2025-06-01"), 3);
        let mut picker = DeparturePicker::new(&availability, date("2025-02-01"));
        picker.deselect();
        assert_eq!(picker.blocker(), Some(BookingBlock::NoneSelected));

        picker.select(date("2025-06-01")).unwrap();
        assert!(picker.can_book());
    }

    #[test]
    fn test_select_future_unscheduled_date_rejected() {
        let mut availability = Availability::new();
        availability.set(date("2025-06-01"), 3);
        let mut picker = DeparturePicker::new(&availability, date("2025-02-01"));
        assert!(picker.select(date("2025-07-01")).is_err());
        assert_eq!(picker.selected(), Some(date("2025-06-01")));
    }
}
