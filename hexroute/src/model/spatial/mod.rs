mod cell_id;
mod h3_spatial_index;
mod lat_lon;
mod spatial_index;

pub use cell_id::CellId;
pub use h3_spatial_index::H3SpatialIndex;
pub use lat_lon::{parse_degrees, LatLon};
pub use spatial_index::SpatialIndex;
