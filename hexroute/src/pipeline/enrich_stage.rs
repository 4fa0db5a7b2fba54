use super::require_inputs;
use crate::model::{
    constants,
    route::RideColumns,
    spatial::{CellId, LatLon, SpatialIndex},
    table::{optional_field, Table, TableWriter},
    HexRouteError,
};
use kdam::tqdm;
use std::{collections::HashMap, fmt::Display, path::Path};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub resolution: u8,
    pub rows: usize,
    pub unresolved_pickups: usize,
    pub unresolved_dropoffs: usize,
    pub unique_cells: usize,
}

impl Display for EnrichSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hex-{} enrichment:", self.resolution)?;
        writeln!(f, "- Rides processed: {}", self.rows)?;
        writeln!(f, "- Pickups without a hex: {}", self.unresolved_pickups)?;
        writeln!(f, "- Dropoffs without a hex: {}", self.unresolved_dropoffs)?;
        write!(f, "- Distinct hexes: {}", self.unique_cells)
    }
}

/// annotates every ride with its pickup and dropoff cells and their centroids.
/// all original columns are carried through unchanged.
pub fn run_enrich(
    input: &Path,
    output: &Path,
    resolution: u8,
    index: &dyn SpatialIndex,
) -> Result<EnrichSummary, HexRouteError> {
    require_inputs(&[input])?;
    let table = Table::read(input)?;
    let columns = RideColumns::try_from_table(&table)?;

    let mut headers = table.headers().iter().map(String::from).collect::<Vec<_>>();
    let original_width = headers.len();
    headers.extend([
        constants::ride_pickup_cell(resolution),
        constants::ride_dropoff_cell(resolution),
        constants::PICKUP_CENTROID_LAT.to_string(),
        constants::PICKUP_CENTROID_LON.to_string(),
        constants::DROPOFF_CENTROID_LAT.to_string(),
        constants::DROPOFF_CENTROID_LON.to_string(),
    ]);
    let mut writer = TableWriter::create(output, &headers)?;

    let mut summary = EnrichSummary {
        resolution,
        rows: table.len(),
        ..Default::default()
    };
    // rides cluster heavily, most centroids are repeats
    let mut centroids: HashMap<CellId, Option<LatLon>> = HashMap::new();
    let rows = tqdm!(
        table.rows().iter(),
        total = table.len(),
        desc = format!("calculating hex-{resolution} ids and centroids")
    );
    for record in rows {
        let ride = columns.ride_record(record);
        let pickup = index.to_cell_opt(ride.pickup, resolution);
        let dropoff = index.to_cell_opt(ride.dropoff, resolution);
        if !pickup.is_resolved() {
            summary.unresolved_pickups += 1;
        }
        if !dropoff.is_resolved() {
            summary.unresolved_dropoffs += 1;
        }
        let pickup_centroid = *centroids
            .entry(pickup)
            .or_insert_with(|| index.centroid(&pickup));
        let dropoff_centroid = *centroids
            .entry(dropoff)
            .or_insert_with(|| index.centroid(&dropoff));

        let mut row = record.iter().map(String::from).collect::<Vec<_>>();
        row.resize(original_width, String::new());
        row.extend([
            pickup.to_string(),
            dropoff.to_string(),
            optional_field(pickup_centroid.map(|c| c.lat)),
            optional_field(pickup_centroid.map(|c| c.lon)),
            optional_field(dropoff_centroid.map(|c| c.lat)),
            optional_field(dropoff_centroid.map(|c| c.lon)),
        ]);
        writer.write_row(&row)?;
    }
    eprintln!();
    summary.unique_cells = centroids.keys().filter(|c| c.is_resolved()).count();
    writer.finish()?;
    Ok(summary)
}
