use super::require_inputs;
use crate::model::{
    constants,
    geocode::{EndpointPair, NameResolver, NameSummary},
    spatial::{parse_degrees, LatLon},
    table::{field, Table, TableWriter},
    HexRouteError,
};
use std::path::Path;

/// names the pickup and destination centroids of a reconciled preset table.
/// every row is written, with an empty name wherever none could be found.
/// re-running on an already named table replaces the name columns.
pub fn run_names(
    input: &Path,
    output: &Path,
    resolution: u8,
    resolver: &NameResolver,
) -> Result<NameSummary, HexRouteError> {
    require_inputs(&[input])?;
    let table = Table::read(input)?;
    let pickup_lat = table.column(&constants::preset_pickup_lat(resolution))?;
    let pickup_lon = table.column(&constants::preset_pickup_lon(resolution))?;
    let dropoff_lat = table.column(&constants::preset_destination_lat(resolution))?;
    let dropoff_lon = table.column(&constants::preset_destination_lon(resolution))?;

    let coord = |record: &csv::StringRecord, lat: usize, lon: usize| {
        LatLon::from_parts(
            parse_degrees(field(record, lat)),
            parse_degrees(field(record, lon)),
        )
    };
    let endpoints = table
        .rows()
        .iter()
        .map(|record| EndpointPair {
            pickup: coord(record, pickup_lat, pickup_lon),
            dropoff: coord(record, dropoff_lat, dropoff_lon),
        })
        .collect::<Vec<_>>();

    let (names, summary) = resolver.resolve(&endpoints)?;

    let mut headers = table.headers().iter().map(String::from).collect::<Vec<_>>();
    let pickup_name_col = name_column(&mut headers, constants::PICKUP_AREA_NAME);
    let dropoff_name_col = name_column(&mut headers, constants::DROPOFF_AREA_NAME);
    let mut writer = TableWriter::create(output, &headers)?;
    for (record, route_names) in table.rows().iter().zip(names) {
        let mut row = record.iter().map(String::from).collect::<Vec<_>>();
        row.resize(headers.len(), String::new());
        row[pickup_name_col] = route_names.pickup.unwrap_or_default();
        row[dropoff_name_col] = route_names.dropoff.unwrap_or_default();
        writer.write_row(&row)?;
    }
    writer.finish()?;
    Ok(summary)
}

/// position of a name column, appending it to the headers if absent.
fn name_column(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}
