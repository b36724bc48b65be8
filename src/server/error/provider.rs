//! Errors of the outbound RajaOngkir calls.

use thiserror::Error;

/// Failure of a single call to the RajaOngkir API.
///
/// The variants only exist for the server log, callers of the proxy endpoints always see the
/// same generic message regardless of which one occurred.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key configured, the request was never sent.
    #[error("RajaOngkir API key is not configured, set RAJAONGKIR_API_KEY")]
    MissingApiKey,
    /// The request could not be sent or its response could not be read.
    #[error("Request to RajaOngkir {endpoint} failed: {source}")]
    Request {
        /// Provider endpoint path, e.g. `/city`
        endpoint: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// RajaOngkir answered with a non-success status.
    #[error("RajaOngkir {endpoint} responded with status {status}")]
    UnexpectedStatus {
        /// Provider endpoint path, e.g. `/city`
        endpoint: &'static str,
        /// Status returned by the provider
        status: reqwest::StatusCode,
    },
    /// RajaOngkir answered with a body that is not JSON.
    #[error("RajaOngkir {endpoint} responded with a body that is not valid JSON: {source}")]
    InvalidBody {
        /// Provider endpoint path, e.g. `/city`
        endpoint: &'static str,
        /// Parse error for the response body
        #[source]
        source: serde_json::Error,
    },
}
