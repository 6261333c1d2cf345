use thiserror::Error;

/// Errors raised while constructing the client or performing the check call.
///
/// The variants keep the failure source attached for display; at the check
/// boundary every one of them collapses into a single failed outcome.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("{message}: {source}")]
    Network {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service answered, but with an error status or an unusable body.
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// The response body could not be read or decoded.
    #[error("{message}: {source}")]
    Parse {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Client construction failed before any request was made.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
