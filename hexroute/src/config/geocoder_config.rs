use serde::{Deserialize, Serialize};

/// connection and concurrency settings for the reverse geocoding service.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct GeocoderConfig {
    /// short address endpoint accepting POSTed location maps
    pub url: String,
    /// sent as-is in the `Authorization` header when present
    pub authorization: Option<String>,
    pub timeout_secs: u64,
    /// size of the lookup worker pool
    pub workers: usize,
    /// decimal places kept when normalizing coordinates into cache keys
    pub precision: u32,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: String::from("http://127.0.0.1:8080/api/v1/shortaddress"),
            authorization: None,
            timeout_secs: 5,
            workers: 10,
            precision: 6,
        }
    }
}
