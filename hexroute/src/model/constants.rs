//! column names of the tabular artifacts passed between pipeline stages.
//! columns holding cell data are tagged with the grid resolution so that an
//! artifact declares the resolution it was built at.

pub const PICKUP_LATITUDE: &str = "estimated_pickup_latitude";
pub const PICKUP_LONGITUDE: &str = "estimated_pickup_longitude";
pub const DROPOFF_LATITUDE: &str = "estimated_dropoff_latitude";
pub const DROPOFF_LONGITUDE: &str = "estimated_dropoff_longitude";

pub const PRESET_PICKUP: &str = "Popular Pickup Lat,Lon";
pub const PRESET_DESTINATION: &str = "Popular Destination Lat, Lon";

pub const RIDE_COUNT: &str = "ride_count";
pub const PICKUP_AREA_NAME: &str = "pickup_area_name";
pub const DROPOFF_AREA_NAME: &str = "dropoff_area_name";

pub const PICKUP_CENTROID_LAT: &str = "pickup_centroid_lat";
pub const PICKUP_CENTROID_LON: &str = "pickup_centroid_lon";
pub const DROPOFF_CENTROID_LAT: &str = "dropoff_centroid_lat";
pub const DROPOFF_CENTROID_LON: &str = "dropoff_centroid_lon";

pub const VOLUME_PICKUP_CELL_PREFIX: &str = "p_hex";

/// pickup cell column of a route volume table
pub fn volume_pickup_cell(resolution: u8) -> String {
    format!("{VOLUME_PICKUP_CELL_PREFIX}{resolution}")
}

/// dropoff cell column of a route volume table
pub fn volume_dropoff_cell(resolution: u8) -> String {
    format!("d_hex{resolution}")
}

/// pickup cell column of an enriched ride table
pub fn ride_pickup_cell(resolution: u8) -> String {
    format!("pickup_hex{resolution}")
}

/// dropoff cell column of an enriched ride table
pub fn ride_dropoff_cell(resolution: u8) -> String {
    format!("dropoff_hex{resolution}")
}

pub fn preset_pickup_cell(resolution: u8) -> String {
    format!("pickup_hex{resolution}")
}

pub fn preset_destination_cell(resolution: u8) -> String {
    format!("destination_hex{resolution}")
}

pub fn preset_pickup_lat(resolution: u8) -> String {
    format!("pickup_hex{resolution}_lat")
}

pub fn preset_pickup_lon(resolution: u8) -> String {
    format!("pickup_hex{resolution}_lon")
}

pub fn preset_destination_lat(resolution: u8) -> String {
    format!("destination_hex{resolution}_lat")
}

pub fn preset_destination_lon(resolution: u8) -> String {
    format!("destination_hex{resolution}_lon")
}
