//! HTTP client for the Clever Cloud zone catalog.
//!
//! This crate provides the [`CatalogClient`] used to list deployment zones,
//! and the [`ZoneCatalog`] trait the zone directory consumes.

#![doc(html_root_url = "https://docs.rs/cczone-client/0.3.0")]

mod catalog;
mod client;
pub mod api;

pub use catalog::ZoneCatalog;
pub use client::{CatalogClient, CatalogClientBuilder};
pub use cczone_core::{Result, ZoneCheckError};
