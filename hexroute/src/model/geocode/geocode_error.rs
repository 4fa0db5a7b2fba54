use thiserror::Error;

/// why a single reverse geocoding lookup failed. every variant is treated
/// the same by the name resolver: the coordinate is cached as unresolvable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("geocoding service responded with status {0}")]
    BadStatus(u16),
    #[error("unable to encode request: {0}")]
    InvalidRequest(String),
    #[error("unexpected response body: {0}")]
    InvalidResponse(String),
    #[error("geocoding service returned an empty address")]
    EmptyAddress,
}
