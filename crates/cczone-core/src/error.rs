use thiserror::Error;

/// Result type alias for zone detection operations
pub type Result<T> = std::result::Result<T, ZoneCheckError>;

/// Errors that can occur while classifying a hostname
#[derive(Error, Debug)]
pub enum ZoneCheckError {
    /// Zone catalog returned an error response
    #[error("catalog API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hostname could not be resolved
    #[error("failed to resolve {hostname}: {message}")]
    Resolve {
        /// Hostname that was queried
        hostname: String,
        /// Resolver error message
        message: String,
    },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A platform pattern could not be compiled
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ZoneCheckError {
    /// Returns true if the error comes from name resolution
    #[must_use]
    pub const fn is_resolution_error(&self) -> bool {
        matches!(self, Self::Resolve { .. })
    }

    /// Returns true if the error comes from the zone catalog fetch
    #[must_use]
    pub const fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::NotFound { .. } | Self::Http(_) | Self::Timeout(_) | Self::Json(_)
        )
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_error_sources() {
        let err = ZoneCheckError::Resolve {
            hostname: "example.com".into(),
            message: "no records found".into(),
        };
        assert!(err.is_resolution_error());
        assert!(!err.is_catalog_error());
        assert_eq!(err.to_string(), "failed to resolve example.com: no records found");

        let err = ZoneCheckError::Api {
            code: 503,
            message: "maintenance".into(),
        };
        assert!(err.is_catalog_error());
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn not_found_has_status() {
        let err = ZoneCheckError::NotFound {
            resource: "/v2/products/zones".into(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(ZoneCheckError::Config("x".into()).status_code(), None);
    }
}
