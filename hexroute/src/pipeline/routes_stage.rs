use super::require_inputs;
use crate::model::{
    route::{aggregate_routes, volume_table_ops, AggregationSummary, RideColumns, ThresholdSummary},
    spatial::SpatialIndex,
    table::Table,
    HexRouteError,
};
use kdam::tqdm;
use std::{fmt::Display, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutesSummary {
    pub aggregation: AggregationSummary,
    /// present when a minimum ride count was applied
    pub threshold: Option<ThresholdSummary>,
    pub routes_written: usize,
}

impl Display for RoutesSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.aggregation)?;
        if let Some(threshold) = &self.threshold {
            write!(f, "\n{threshold}")?;
        }
        write!(f, "\n- Routes written: {}", self.routes_written)
    }
}

/// counts rides per directed cell pair and writes the busiest routes first.
/// with `min_rides`, routes with fewer rides are removed and the reduction
/// is reported.
pub fn run_routes(
    input: &Path,
    output: &Path,
    resolution: u8,
    min_rides: Option<usize>,
    index: &dyn SpatialIndex,
) -> Result<RoutesSummary, HexRouteError> {
    require_inputs(&[input])?;
    let table = Table::read(input)?;
    let columns = RideColumns::try_from_table(&table)?;

    let rides = tqdm!(
        table.rows().iter(),
        total = table.len(),
        desc = format!("processing coordinates into hex-{resolution}")
    )
    .map(|record| columns.ride_record(record));
    let (volumes, aggregation) = aggregate_routes(rides, index, resolution);
    eprintln!();

    let (volumes, threshold) = match min_rides {
        Some(min) => {
            let (retained, threshold) = volumes.filter_min_rides(min);
            (retained, Some(threshold))
        }
        None => (volumes, None),
    };
    volume_table_ops::write_volume_table(output, &volumes)?;
    Ok(RoutesSummary {
        aggregation,
        threshold,
        routes_written: volumes.len(),
    })
}
