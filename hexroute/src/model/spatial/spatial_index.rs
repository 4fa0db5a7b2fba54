use super::{CellId, LatLon};

/// adapter over a hierarchical hexagonal grid library. implementations must
/// be total: any failure to convert yields [`CellId::Unresolved`] or `None`,
/// never a panic or an error, so that one bad row cannot abort a batch.
pub trait SpatialIndex: Send + Sync {
    /// quantizes a coordinate to the cell containing it at some resolution.
    /// lower resolutions are coarser.
    fn to_cell(&self, lat: f64, lon: f64, resolution: u8) -> CellId;

    /// the representative center point of a cell.
    fn centroid(&self, cell: &CellId) -> Option<LatLon>;

    /// the resolution of a cell, or `None` if the cell is not a valid index.
    fn cell_resolution(&self, cell: &CellId) -> Option<u8>;

    /// quantizes an optional coordinate, where a missing coordinate is unresolved.
    fn to_cell_opt(&self, coord: Option<LatLon>, resolution: u8) -> CellId {
        match coord {
            Some(c) => self.to_cell(c.lat, c.lon, resolution),
            None => CellId::Unresolved,
        }
    }
}
