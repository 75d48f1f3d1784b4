//! Address resolution for Clever Cloud zone detection.
//!
//! The [`AddressResolver`] trait is the seam between classification and the
//! network; [`HickoryResolver`] implements it on top of the system's DNS
//! configuration.

#![doc(html_root_url = "https://docs.rs/cczone-resolver/0.3.0")]

mod error;
mod hickory;
mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use hickory::HickoryResolver;
pub use resolver::{AddressResolver, Resolution, ResolveOptions};
