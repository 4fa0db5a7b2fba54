use super::require_inputs;
use crate::model::{
    preset::{PresetReconciler, ReconcileSummary},
    route::volume_table_ops,
    spatial::SpatialIndex,
    table::Table,
    HexRouteError,
};
use std::path::Path;

/// keeps the presets whose cell pair appears in a route volume table, one
/// preset per cell pair, and writes them with (optionally) their cells and
/// centroids appended.
pub fn run_reconcile(
    presets_file: &Path,
    volumes_file: &Path,
    output: &Path,
    resolution: u8,
    include_centroids: bool,
    index: &dyn SpatialIndex,
) -> Result<ReconcileSummary, HexRouteError> {
    require_inputs(&[presets_file, volumes_file])?;
    log::info!("loading hex filters");
    let volumes = volume_table_ops::read_volume_table(volumes_file, resolution, index)?;
    log::info!("reading preset data");
    let presets = Table::read(presets_file)?;

    log::info!("mapping presets to hex-{resolution} and filtering");
    let reconciliation = PresetReconciler::new(index, resolution).reconcile(&presets, &volumes)?;
    reconciliation.write_csv(output, include_centroids)?;
    Ok(reconciliation.summary)
}
