use crate::model::{
    constants,
    spatial::{parse_degrees, LatLon},
    table::{field, Table},
    HexRouteError,
};
use csv::StringRecord;

/// one raw trip. either endpoint is `None` when its coordinates are blank or
/// not numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideRecord {
    pub pickup: Option<LatLon>,
    pub dropoff: Option<LatLon>,
}

impl RideRecord {
    pub fn new(pickup: Option<LatLon>, dropoff: Option<LatLon>) -> Self {
        Self { pickup, dropoff }
    }
}

/// positions of the ride coordinate columns within a ride table.
#[derive(Debug, Clone, Copy)]
pub struct RideColumns {
    pickup_lat: usize,
    pickup_lon: usize,
    dropoff_lat: usize,
    dropoff_lon: usize,
}

impl RideColumns {
    /// finds all ride coordinate columns, failing on the first missing one.
    pub fn try_from_table(table: &Table) -> Result<RideColumns, HexRouteError> {
        Ok(RideColumns {
            pickup_lat: table.column(constants::PICKUP_LATITUDE)?,
            pickup_lon: table.column(constants::PICKUP_LONGITUDE)?,
            dropoff_lat: table.column(constants::DROPOFF_LATITUDE)?,
            dropoff_lon: table.column(constants::DROPOFF_LONGITUDE)?,
        })
    }

    pub fn ride_record(&self, row: &StringRecord) -> RideRecord {
        let coord = |lat: usize, lon: usize| {
            LatLon::from_parts(
                parse_degrees(field(row, lat)),
                parse_degrees(field(row, lon)),
            )
        };
        RideRecord {
            pickup: coord(self.pickup_lat, self.pickup_lon),
            dropoff: coord(self.dropoff_lat, self.dropoff_lon),
        }
    }
}
