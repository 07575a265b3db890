//! Catalog module.
//!
//! Packages, agencies, and departure availability.

mod agency;
mod availability;
mod package;

pub use agency::{Agency, AgencyDirectory};
pub use availability::{Availability, DepartureStatus};
pub use package::{PackageImage, PackageStatus, TravelPackage};
