//! Detect whether a website is hosted on Clever Cloud, and in which zone.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cczone::{Classifier, Platform};
//!
//! #[tokio::main]
//! async fn main() -> cczone::Result<()> {
//!     let classifier = Classifier::for_platform(Platform::default())?;
//!
//!     let verdict = classifier.check("www.example.com").await?;
//!     match verdict.zone() {
//!         Some(zone) => println!("hosted in {zone}"),
//!         None if verdict.is_hosted() => println!("hosted, zone unknown"),
//!         None => println!("not hosted"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # How a hostname is classified
//!
//! 1. Hostnames under a platform-owned suffix are hosted, zone unknown.
//! 2. The hostname is resolved. A canonical name of the form
//!    `domain.<zone>.clever-cloud.com` gives the zone directly.
//! 3. Otherwise each address is looked up in the [`ZoneDirectory`], a
//!    session cache mapping frontal addresses to zones.
//! 4. Finally an owned canonical name still counts as hosted.
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/cczone/0.3.0")]

pub mod classifier;
pub mod directory;
pub mod navigation;

#[cfg(test)]
mod testing;

pub use classifier::Classifier;
pub use directory::{DirectoryState, RefreshSummary, Snapshot, ZoneDirectory};
pub use navigation::{
    hostname_of, Messages, NavigationEvent, NavigationHandler, PageAction, PageActionRenderer, PageState, TabId,
};

// Re-export core types
pub use cczone_core::*;

// Re-export the collaborators
pub use cczone_client::{CatalogClient, CatalogClientBuilder, ZoneCatalog};
pub use cczone_resolver::{
    AddressResolver, HickoryResolver, Resolution, ResolveError, ResolveOptions,
};

// Re-export runtime for convenience
pub use tokio;
