//! API endpoint modules.

mod zones;

pub use zones::ZonesApi;
