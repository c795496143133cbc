//! Exchange rate error types.

use thiserror::Error;

/// Errors that can occur while obtaining an exchange rate.
#[derive(Debug, Error)]
pub enum RateError {
    /// The request never produced a response.
    #[error("failed to get the exchange rate from API")]
    Transport(#[source] reqwest::Error),

    /// The service answered with an error message.
    #[error("failed to get the rate: \"{0}\"")]
    Api(String),

    /// Non-success status without an error message.
    #[error("Can't get the rate")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("failed to get the exchange rate")]
    Malformed,
}

/// Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;
