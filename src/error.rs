//! Error types for reso-sorter.
//!
//! Only the host-facing layer can fail. Candidates that do not turn into
//! records are filtered through [`Rejection`] and never reach the caller.

/// Error type for scanning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a unique candidate produced no record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The token could not be decomposed into a width/height pair.
    #[error("cannot parse `{0}` as a resolution")]
    Unparseable(String),

    /// Parsed, but outside the plausibility window.
    #[error("{width}x{height} is outside the plausible resolution range")]
    OutOfBounds {
        /// Parsed width in pixels.
        width: u64,
        /// Parsed height in pixels.
        height: u64,
    },
}
