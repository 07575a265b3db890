//! Roam storefront: the customer-facing catalog and package pages plus
//! the minimal admin panel.
//!
//! Pages are rendered as HTML string sections from the domain
//! view-models in `roam-travel`; data arrives through `roam-data` as a
//! one-shot snapshot per request. The Spin HTTP component only exists
//! on wasm32; everything else is host-testable.

pub mod data;
pub mod pages;
pub mod query;
pub mod sections;
pub mod shell;

#[cfg(target_arch = "wasm32")]
mod component;
