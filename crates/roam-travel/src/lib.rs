//! Travel marketplace domain types and logic for Roam.
//!
//! This crate provides the types behind the customer-facing catalog:
//!
//! - **Catalog**: packages, agencies, departure availability
//! - **Browse**: filtering, sorting, pagination over a catalog snapshot
//! - **Booking**: departure selection and the enquiry deep-link
//! - **Gallery**: image rotation state for package cards and detail
//!
//! Everything here is pure and synchronous; fetching the catalog
//! snapshot from the hosted backend lives in `roam-data`.
//!
//! # Example
//!
//! ```rust,ignore
//! use roam_travel::prelude::*;
//!
//! let mut browser = CatalogBrowser::new(packages);
//! browser.set_criteria(
//!     FilterCriteria::new()
//!         .with_destination("ladakh")
//!         .with_max_price(2_500_000),
//! );
//! browser.set_sort(SortKey::PriceAsc);
//!
//! let view = browser.browse();
//! println!("{} trips, page {} of {}",
//!     view.pagination.total, view.pagination.page, view.pagination.total_pages);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod browse;
pub mod catalog;
pub mod gallery;

pub use error::TravelError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::TravelError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Agency, AgencyDirectory, Availability, DepartureStatus, PackageImage, PackageStatus,
        TravelPackage,
    };

    // Browse
    pub use crate::browse::{
        apply, paginate, BrowsePage, BrowseResults, CatalogBrowser, FilterCriteria, Pagination,
        SortKey, DEFAULT_PAGE_SIZE,
    };

    // Booking
    pub use crate::booking::{
        build_booking_message, whatsapp_link, BookingBlock, DeparturePicker,
    };

    // Gallery
    pub use crate::gallery::{
        Carousel, SlideDirection, AUTOPLAY_INTERVAL_MS, RESUME_DELAY_MS,
    };
}
