//! Error types for vitrina-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Vitrina operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and processing a catalog.
///
/// Variants are `#[non_exhaustive]` so new failure kinds can be added
/// without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Local file could not be read or written
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Remote asset could not be retrieved (connection, TLS, body decoding)
    #[error("Failed to fetch {location}: {message}")]
    Fetch {
        /// URL or path that was requested
        location: String,
        /// What went wrong
        message: String,
    },

    /// Remote asset answered with a non-success status
    #[error("Failed to fetch {location}: HTTP {status}")]
    HttpStatus {
        /// URL that was requested
        location: String,
        /// HTTP status code
        status: u16,
    },

    /// Content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Output could not be written
    #[error("Write error: {0}")]
    Write(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// No record carries the requested product id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an I/O error tagged with the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a fetch error for a location.
    pub fn fetch<L, M>(location: L, message: M) -> Self
    where
        L: Into<String>,
        M: Into<String>,
    {
        Error::Fetch {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a write error.
    pub fn write<S: Into<String>>(message: S) -> Self {
        Error::Write(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a product-not-found error.
    pub fn product_not_found<S: Into<String>>(id: S) -> Self {
        Error::ProductNotFound { id: id.into() }
    }

    /// Returns whether this error came from reaching an asset (file or URL).
    ///
    /// Page controllers show these as a load-error panel; everything else
    /// is a programming or configuration problem.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::Fetch { .. } | Error::HttpStatus { .. }
        )
    }

    /// Returns whether this error means a product id had no match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ProductNotFound { .. })
    }
}
