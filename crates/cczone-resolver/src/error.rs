use thiserror::Error;

/// Result type alias for resolution operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Errors from address resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Lookup failed (NXDOMAIN, SERVFAIL, network error, ...)
    #[error("DNS lookup for {hostname} failed: {message}")]
    Lookup {
        /// Hostname that was queried
        hostname: String,
        /// Underlying resolver message
        message: String,
    },

    /// Resolver could not be created from the system configuration
    #[error("resolver setup failed: {0}")]
    Setup(String),
}

impl From<ResolveError> for cczone_core::ZoneCheckError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Lookup { hostname, message } => Self::Resolve { hostname, message },
            ResolveError::Setup(msg) => Self::Config(msg),
        }
    }
}
