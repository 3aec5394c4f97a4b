//! Error taxonomy shared by the provider, store, and workflows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-success HTTP status from the rate provider.
    #[error("network request failed: {0}")]
    Network(String),

    /// Response body did not match the expected JSON shape.
    #[error("unexpected response from provider: {0}")]
    Parse(String),

    /// Caller-supplied input out of range (empty, non-numeric, non-positive amount).
    #[error("invalid input: {0}")]
    Validation(String),

    /// A rate fetch failed mid-conversion. Wraps the underlying failure.
    #[error("conversion failed")]
    ConversionFailed(#[source] Box<Error>),

    /// History store failure on open, append, read, or clear.
    #[error("history store failure: {0}")]
    Storage(String),
}

impl Error {
    /// Classifies a reqwest failure: anything that happened before a response
    /// body could be decoded is a transport problem.
    pub(crate) fn from_request(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
