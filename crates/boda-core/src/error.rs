use thiserror::Error;

/// Top-level error type for the site.
///
/// Routing and translation never fail; only the edges that touch the
/// filesystem or parse external documents return this.
#[derive(Debug, Error)]
pub enum BodaError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A message catalog could not be loaded.
    #[error("messages error: {0}")]
    Messages(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
