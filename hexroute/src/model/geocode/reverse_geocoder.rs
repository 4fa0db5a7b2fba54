use super::GeocodeError;
use crate::model::spatial::LatLon;

/// a service mapping a coordinate to a short human-readable place name.
/// implementations are called concurrently from the resolver's worker pool.
pub trait ReverseGeocoder: Send + Sync {
    fn short_address(&self, coord: &LatLon) -> Result<String, GeocodeError>;
}
