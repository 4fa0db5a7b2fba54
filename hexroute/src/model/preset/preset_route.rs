use crate::model::{
    route::RoutePairKey,
    spatial::{CellId, LatLon},
};
use csv::StringRecord;

/// a curated route together with what the pipeline derives for it. the
/// original row is kept whole so that every curated column is carried through.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRoute {
    pub record: StringRecord,
    pub pickup_cell: CellId,
    pub dropoff_cell: CellId,
    pub pickup_centroid: Option<LatLon>,
    pub dropoff_centroid: Option<LatLon>,
}

impl PresetRoute {
    pub fn key(&self) -> RoutePairKey {
        RoutePairKey::new(self.pickup_cell, self.dropoff_cell)
    }
}
