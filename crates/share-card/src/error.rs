//! Error types for the share-card service.
//!
//! Share requests themselves never fail: missing or malformed input falls
//! back to default branding. Only startup configuration can be rejected.

/// Configuration error raised by [`crate::Config::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The public base URL could not be parsed.
    #[error("invalid base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A numeric setting held something other than a number.
    #[error("invalid value for {key}: {value:?} is not a number")]
    InvalidNumber { key: &'static str, value: String },
}
