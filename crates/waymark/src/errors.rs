//! # Error Types

use crate::regex::PatternError;

/// Errors from waymark operations.
#[derive(Debug, thiserror::Error)]
pub enum WaymarkError {
    /// Route constructed or reassigned with an empty url.
    #[error("missing url argument")]
    MissingUrl,

    /// The compiled or raw pattern was rejected by the regex engines.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A captured segment is not valid percent-encoded text.
    #[error("invalid percent-encoding in segment {segment:?}")]
    Decode {
        /// The captured segment that failed to decode.
        segment: String,
    },

    /// A registered param transform failed.
    #[error("transform for param {name:?} failed: {source}")]
    Transform {
        /// The param name the transform was registered under.
        name: String,

        /// The underlying transform failure.
        source: Box<dyn core::error::Error + Send + Sync>,
    },
}

/// Result type for waymark operations.
pub type WmResult<T> = core::result::Result<T, WaymarkError>;
