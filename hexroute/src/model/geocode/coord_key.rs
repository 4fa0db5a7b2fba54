use crate::model::spatial::LatLon;

/// a coordinate rounded to a fixed number of decimal places and stored as
/// scaled integers, so that centroids computed along slightly different
/// floating point paths hash to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordKey {
    lat: i64,
    lon: i64,
}

impl CoordKey {
    pub fn new(coord: &LatLon, precision: u32) -> CoordKey {
        let scale = 10f64.powi(precision as i32);
        CoordKey {
            lat: (coord.lat * scale).round() as i64,
            lon: (coord.lon * scale).round() as i64,
        }
    }
}
