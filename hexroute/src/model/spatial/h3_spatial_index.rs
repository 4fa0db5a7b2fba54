use super::{CellId, LatLon, SpatialIndex};
use h3o::{CellIndex, LatLng, Resolution};

/// [`SpatialIndex`] backed by the `h3o` implementation of the H3 grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3SpatialIndex;

impl SpatialIndex for H3SpatialIndex {
    fn to_cell(&self, lat: f64, lon: f64, resolution: u8) -> CellId {
        // h3o wraps out-of-domain degrees instead of rejecting them
        if !LatLon::new(lat, lon).is_valid() {
            log::debug!("coordinate ({lat}, {lon}) outside of WGS84 domain");
            return CellId::Unresolved;
        }
        let res = match Resolution::try_from(resolution) {
            Ok(res) => res,
            Err(e) => {
                log::debug!("unsupported h3 resolution {resolution}: {e}");
                return CellId::Unresolved;
            }
        };
        match LatLng::new(lat, lon) {
            Ok(latlng) => CellId::Cell(u64::from(latlng.to_cell(res))),
            Err(e) => {
                log::debug!("coordinate ({lat}, {lon}) rejected by h3: {e}");
                CellId::Unresolved
            }
        }
    }

    fn centroid(&self, cell: &CellId) -> Option<LatLon> {
        let center = LatLng::from(to_h3(cell)?);
        Some(LatLon::new(center.lat(), center.lng()))
    }

    fn cell_resolution(&self, cell: &CellId) -> Option<u8> {
        to_h3(cell).map(|idx| u8::from(idx.resolution()))
    }
}

fn to_h3(cell: &CellId) -> Option<CellIndex> {
    cell.as_u64().and_then(|raw| CellIndex::try_from(raw).ok())
}
