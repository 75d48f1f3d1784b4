//! Core types and traits for Clever Cloud zone detection.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: [`Zone`], [`ZoneRecord`] and the classification [`Verdict`]
//! - **Platform**: the [`Platform`] description and the hostname patterns
//!   derived from it ([`OwnedDomains`], [`FrontalDomainPattern`])
//! - **Errors**: Comprehensive error handling with [`ZoneCheckError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use cczone_core::{Platform, Verdict};
//!
//! let platform = Platform::default();
//! let owned = platform.owned_domains();
//! assert!(owned.matches("www.clever-cloud.com"));
//! ```

#![doc(html_root_url = "https://docs.rs/cczone-core/0.3.0")]

mod error;
pub mod platform;
pub mod types;

pub use error::{Result, ZoneCheckError};
pub use platform::{FrontalDomainPattern, OwnedDomains, Platform};
pub use types::*;
