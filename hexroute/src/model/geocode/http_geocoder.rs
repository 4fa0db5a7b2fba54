use super::{GeocodeError, ReverseGeocoder};
use crate::{
    config::GeocoderConfig,
    model::{spatial::LatLon, HexRouteError},
};
use reqwest::{blocking::Client, header::CONTENT_TYPE, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::{collections::BTreeMap, time::Duration};

/// requests are an indexed map of locations. the pipeline sends one location
/// per request under this index.
const REQUEST_INDEX: &str = "1";

#[derive(Serialize)]
struct LocationRequest {
    location: RequestLocation,
}

#[derive(Serialize)]
struct RequestLocation {
    lat: f64,
    lon: f64,
}

/// reverse geocoder for a short-address HTTP service.
pub struct HttpGeocoder {
    client: Client,
    url: String,
    authorization: Option<String>,
}

impl HttpGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<HttpGeocoder, HexRouteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HexRouteError::GeocoderBuildError(e.to_string()))?;
        Ok(HttpGeocoder {
            client,
            url: config.url.clone(),
            authorization: config.authorization.clone(),
        })
    }
}

impl ReverseGeocoder for HttpGeocoder {
    fn short_address(&self, coord: &LatLon) -> Result<String, GeocodeError> {
        let body = request_body(coord)?;
        let mut request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        let response = request.send().map_err(to_geocode_error)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeocodeError::BadStatus(status.as_u16()));
        }
        let text = response.text().map_err(to_geocode_error)?;
        parse_short_address(&text)
    }
}

fn to_geocode_error(e: reqwest::Error) -> GeocodeError {
    if e.is_timeout() {
        GeocodeError::Timeout(e.to_string())
    } else {
        GeocodeError::RequestFailed(e.to_string())
    }
}

/// `{"1": {"location": {"lat": <lat>, "lon": <lon>}}}`
pub fn request_body(coord: &LatLon) -> Result<String, GeocodeError> {
    let payload = BTreeMap::from([(
        REQUEST_INDEX,
        LocationRequest {
            location: RequestLocation {
                lat: coord.lat,
                lon: coord.lon,
            },
        },
    )]);
    serde_json::to_string(&payload).map_err(|e| GeocodeError::InvalidRequest(e.to_string()))
}

/// extracts `{"1": {"short_address": {"en": <name>}}}` from a response body.
/// a blank name counts as a failure.
pub fn parse_short_address(body: &str) -> Result<String, GeocodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;
    let name = value
        .get(REQUEST_INDEX)
        .and_then(|v| v.get("short_address"))
        .and_then(|v| v.get("en"))
        .ok_or_else(|| {
            GeocodeError::InvalidResponse(String::from("missing short_address.en"))
        })?;
    if name.is_null() {
        return Err(GeocodeError::EmptyAddress);
    }
    let trimmed = name
        .as_str()
        .ok_or_else(|| {
            GeocodeError::InvalidResponse(format!("short_address.en is not a string: {name}"))
        })?
        .trim();
    if trimmed.is_empty() {
        Err(GeocodeError::EmptyAddress)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = request_body(&LatLon::new(23.78, 90.4)).expect("serializable");
        assert_eq!(body, r#"{"1":{"location":{"lat":23.78,"lon":90.4}}}"#);
    }

    #[test]
    fn test_parse_short_address() {
        let ok = r#"{"1": {"short_address": {"en": " Gulshan 1 ", "bn": "গুলশান ১"}}}"#;
        assert_eq!(parse_short_address(ok), Ok(String::from("Gulshan 1")));

        let blank = r#"{"1": {"short_address": {"en": "  "}}}"#;
        assert_eq!(parse_short_address(blank), Err(GeocodeError::EmptyAddress));

        let null = r#"{"1": {"short_address": {"en": null}}}"#;
        assert_eq!(parse_short_address(null), Err(GeocodeError::EmptyAddress));

        let missing = r#"{"1": {}}"#;
        assert!(matches!(
            parse_short_address(missing),
            Err(GeocodeError::InvalidResponse(_))
        ));

        let numeric = r#"{"1": {"short_address": {"en": 7}}}"#;
        assert!(matches!(
            parse_short_address(numeric),
            Err(GeocodeError::InvalidResponse(_))
        ));

        assert!(matches!(
            parse_short_address("<html>bad gateway</html>"),
            Err(GeocodeError::InvalidResponse(_))
        ));
    }
}
