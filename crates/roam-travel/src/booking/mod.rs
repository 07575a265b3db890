//! Booking module.
//!
//! Departure selection for the detail view and the enquiry deep-link.

mod enquiry;
mod picker;

pub use enquiry::{build_booking_message, whatsapp_link};
pub use picker::{BookingBlock, DeparturePicker};
