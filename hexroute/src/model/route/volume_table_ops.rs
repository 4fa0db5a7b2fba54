//! reading and writing route volume tables. a volume table has one row per
//! directed cell pair with the columns `p_hex{R}`, `d_hex{R}` and `ride_count`,
//! where `R` is the grid resolution the table was built at.
use super::{RoutePairKey, RouteVolume, RouteVolumes};
use crate::model::{
    constants,
    spatial::{CellId, SpatialIndex},
    table::{field, Table, TableWriter},
    HexRouteError,
};
use std::{path::Path, str::FromStr};

/// writes route volumes in descending ride count order.
pub fn write_volume_table(path: &Path, volumes: &RouteVolumes) -> Result<(), HexRouteError> {
    let resolution = volumes.resolution();
    let headers = [
        constants::volume_pickup_cell(resolution),
        constants::volume_dropoff_cell(resolution),
        constants::RIDE_COUNT.to_string(),
    ];
    let mut writer = TableWriter::create(path, &headers)?;
    for route in volumes.routes() {
        writer.write_row([
            route.key.pickup.to_string(),
            route.key.dropoff.to_string(),
            route.ride_count.to_string(),
        ])?;
    }
    writer.finish()
}

/// reads a volume table expected to be built at `resolution`.
///
/// the resolution is checked twice: the resolution-tagged cell columns must
/// exist, and every resolved cell must be a valid index at that resolution.
///
/// # Errors
/// - [`HexRouteError::InputMissing`] or [`HexRouteError::MissingColumn`] before any row is read
/// - [`HexRouteError::InvalidVolumeRow`] if a cell or count does not parse
/// - [`HexRouteError::ResolutionMismatch`] if the columns or a cell belong to another resolution
pub fn read_volume_table(
    path: &Path,
    resolution: u8,
    index: &dyn SpatialIndex,
) -> Result<RouteVolumes, HexRouteError> {
    let table = Table::read(path)?;
    volumes_from_table(&table, resolution, index)
}

pub fn volumes_from_table(
    table: &Table,
    resolution: u8,
    index: &dyn SpatialIndex,
) -> Result<RouteVolumes, HexRouteError> {
    let pickup_name = constants::volume_pickup_cell(resolution);
    if table.column(&pickup_name).is_err() {
        if let Some((found, column)) = tagged_resolution(table) {
            return Err(HexRouteError::ResolutionMismatch {
                expected: resolution,
                found,
                cell: column,
            });
        }
    }
    let pickup_col = table.column(&pickup_name)?;
    let dropoff_col = table.column(&constants::volume_dropoff_cell(resolution))?;
    let count_col = table.column(constants::RIDE_COUNT)?;

    let invalid = |row: usize, message: String| HexRouteError::InvalidVolumeRow {
        file: table.filename().to_string(),
        row,
        message,
    };
    let parse_cell = |row: usize, text: &str| -> Result<CellId, HexRouteError> {
        let cell = CellId::from_str(text).map_err(|e| invalid(row, e))?;
        if cell.is_resolved() {
            match index.cell_resolution(&cell) {
                None => Err(invalid(row, format!("'{text}' is not a valid cell"))),
                Some(found) if found != resolution => Err(HexRouteError::ResolutionMismatch {
                    expected: resolution,
                    found,
                    cell: text.to_string(),
                }),
                Some(_) => Ok(cell),
            }
        } else {
            Ok(cell)
        }
    };

    let routes = table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            // header is line 1
            let row = idx + 2;
            let pickup = parse_cell(row, field(record, pickup_col))?;
            let dropoff = parse_cell(row, field(record, dropoff_col))?;
            let count_text = field(record, count_col);
            let ride_count = count_text
                .trim()
                .parse::<usize>()
                .map_err(|e| invalid(row, format!("ride count '{count_text}': {e}")))?;
            Ok(RouteVolume {
                key: RoutePairKey::new(pickup, dropoff),
                ride_count,
            })
        })
        .collect::<Result<Vec<_>, HexRouteError>>()?;
    Ok(RouteVolumes::new(resolution, routes))
}

/// the resolution a volume table declares through its pickup cell column, if any.
fn tagged_resolution(table: &Table) -> Option<(u8, String)> {
    table.headers().iter().find_map(|h| {
        let found = h
            .strip_prefix(constants::VOLUME_PICKUP_CELL_PREFIX)?
            .parse::<u8>()
            .ok()?;
        Some((found, h.to_string()))
    })
}
