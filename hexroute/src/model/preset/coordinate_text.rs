use crate::model::spatial::{parse_degrees, LatLon};

/// parses curated coordinate text such as `"23.7806, 90.4070"`. anything
/// other than exactly two numeric comma-separated parts is `None`.
pub fn parse_lat_lon_text(text: &str) -> Option<LatLon> {
    let parts: Vec<&str> = text.split(',').collect();
    match parts[..] {
        [lat, lon] => LatLon::from_parts(parse_degrees(lat), parse_degrees(lon)),
        _ => None,
    }
}
