use super::{parse_lat_lon_text, PresetRoute, ReconcileSummary};
use crate::model::{
    constants,
    route::{RoutePairKey, RouteVolumes},
    spatial::SpatialIndex,
    table::{field, optional_field, Table, TableWriter},
    HexRouteError,
};
use csv::StringRecord;
use std::{collections::HashSet, path::Path};

/// validates curated preset routes against observed route volume.
pub struct PresetReconciler<'a> {
    index: &'a dyn SpatialIndex,
    resolution: u8,
}

/// the presets that survived reconciliation, in their original order.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub resolution: u8,
    pub headers: StringRecord,
    pub routes: Vec<PresetRoute>,
    pub summary: ReconcileSummary,
}

impl<'a> PresetReconciler<'a> {
    pub fn new(index: &'a dyn SpatialIndex, resolution: u8) -> Self {
        Self { index, resolution }
    }

    /// reconciles a preset table against a set of route volumes.
    ///
    /// each preset's pickup and destination text is parsed and quantized at
    /// the reconciler's resolution. a preset is kept only if its cell pair
    /// appears in `volumes`; among presets sharing a cell pair, the first one
    /// in input order wins. survivors get the centroids of their cells.
    /// malformed coordinate text never aborts the batch, the preset is
    /// counted and filtered out instead.
    ///
    /// # Errors
    /// - [`HexRouteError::ResolutionMismatch`] if `volumes` was built at another resolution
    /// - [`HexRouteError::MissingColumn`] if the preset coordinate columns are absent
    pub fn reconcile(
        &self,
        presets: &Table,
        volumes: &RouteVolumes,
    ) -> Result<Reconciliation, HexRouteError> {
        if volumes.resolution() != self.resolution {
            return Err(HexRouteError::ResolutionMismatch {
                expected: self.resolution,
                found: volumes.resolution(),
                cell: volumes
                    .busiest()
                    .map(|r| r.key.pickup.to_string())
                    .unwrap_or_default(),
            });
        }
        let pickup_col = presets.column(constants::PRESET_PICKUP)?;
        let destination_col = presets.column(constants::PRESET_DESTINATION)?;
        let valid_routes = volumes.resolved_keys();

        let mut summary = ReconcileSummary {
            presets_read: presets.len(),
            ..Default::default()
        };
        let mut seen: HashSet<RoutePairKey> = HashSet::new();
        let mut routes = vec![];
        for record in presets.rows() {
            let pickup = parse_lat_lon_text(field(record, pickup_col));
            let dropoff = parse_lat_lon_text(field(record, destination_col));
            let key = RoutePairKey::new(
                self.index.to_cell_opt(pickup, self.resolution),
                self.index.to_cell_opt(dropoff, self.resolution),
            );
            if !key.is_resolved() {
                log::warn!(
                    "preset with pickup '{}' and destination '{}' could not be placed on the grid",
                    field(record, pickup_col),
                    field(record, destination_col)
                );
                summary.presets_unresolved += 1;
                summary.removed_by_filter += 1;
                continue;
            }
            if !valid_routes.contains(&key) {
                summary.removed_by_filter += 1;
                continue;
            }
            if !seen.insert(key) {
                log::debug!("dropping duplicate preset for route {key}");
                summary.removed_by_dedup += 1;
                continue;
            }
            routes.push(PresetRoute {
                record: record.clone(),
                pickup_cell: key.pickup,
                dropoff_cell: key.dropoff,
                pickup_centroid: self.index.centroid(&key.pickup),
                dropoff_centroid: self.index.centroid(&key.dropoff),
            });
        }
        summary.retained = routes.len();

        Ok(Reconciliation {
            resolution: self.resolution,
            headers: presets.headers().clone(),
            routes,
            summary,
        })
    }
}

impl Reconciliation {
    /// writes the surviving presets. with `include_centroids`, the cell ids and
    /// centroid columns are appended to the curated columns, otherwise the
    /// curated rows are written unchanged.
    pub fn write_csv(&self, path: &Path, include_centroids: bool) -> Result<(), HexRouteError> {
        let mut headers = self.headers.iter().map(String::from).collect::<Vec<_>>();
        if include_centroids {
            let r = self.resolution;
            headers.extend([
                constants::preset_pickup_cell(r),
                constants::preset_destination_cell(r),
                constants::preset_pickup_lat(r),
                constants::preset_pickup_lon(r),
                constants::preset_destination_lat(r),
                constants::preset_destination_lon(r),
            ]);
        }
        let mut writer = TableWriter::create(path, &headers)?;
        for route in self.routes.iter() {
            let mut row = route.record.iter().map(String::from).collect::<Vec<_>>();
            // pad short rows so appended columns line up
            row.resize(self.headers.len(), String::new());
            if include_centroids {
                row.extend([
                    route.pickup_cell.to_string(),
                    route.dropoff_cell.to_string(),
                    optional_field(route.pickup_centroid.map(|c| c.lat)),
                    optional_field(route.pickup_centroid.map(|c| c.lon)),
                    optional_field(route.dropoff_centroid.map(|c| c.lat)),
                    optional_field(route.dropoff_centroid.map(|c| c.lon)),
                ]);
            }
            writer.write_row(&row)?;
        }
        writer.finish()
    }
}
