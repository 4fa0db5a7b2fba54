use super::{require_inputs, run_names, run_reconcile, run_routes, RoutesSummary};
use crate::{
    config::PipelineConfig,
    model::{
        geocode::{AddressCache, NameResolver, NameSummary, ReverseGeocoder},
        preset::ReconcileSummary,
        spatial::SpatialIndex,
        HexRouteError,
    },
};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// files read and written by a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelinePaths {
    pub rides: PathBuf,
    pub presets: PathBuf,
    pub volumes: PathBuf,
    pub reconciled: PathBuf,
    pub output: PathBuf,
}

impl PipelinePaths {
    /// places the intermediate artifacts in `work_directory`, named after the
    /// grid resolution.
    pub fn new(
        rides: &Path,
        presets: &Path,
        output: &Path,
        work_directory: &Path,
        resolution: u8,
    ) -> PipelinePaths {
        PipelinePaths {
            rides: rides.to_path_buf(),
            presets: presets.to_path_buf(),
            volumes: work_directory.join(format!("hex{resolution}_route_counts_filtered.csv")),
            reconciled: work_directory.join("preset_with_centroids.csv"),
            output: output.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub routes: RoutesSummary,
    pub reconcile: ReconcileSummary,
    pub names: NameSummary,
}

impl Display for PipelineSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}\n", self.routes)?;
        writeln!(f, "{}\n", self.reconcile)?;
        write!(f, "{}", self.names)
    }
}

/// runs route aggregation, preset reconciliation and naming back to back.
/// each stage hands off to the next through its output file. the address
/// cache lives for the duration of this call only.
pub fn run_pipeline(
    paths: &PipelinePaths,
    config: &PipelineConfig,
    index: &dyn SpatialIndex,
    geocoder: &dyn ReverseGeocoder,
) -> Result<PipelineSummary, HexRouteError> {
    require_inputs(&[paths.presets.as_path(), paths.rides.as_path()])?;
    let resolution = config.resolution;

    log::info!("stage 1/3: aggregating ride volume at hex-{resolution}");
    let routes = run_routes(
        &paths.rides,
        &paths.volumes,
        resolution,
        Some(config.min_rides),
        index,
    )?;

    log::info!("stage 2/3: reconciling presets against route volume");
    let reconcile = run_reconcile(
        &paths.presets,
        &paths.volumes,
        &paths.reconciled,
        resolution,
        true,
        index,
    )?;

    log::info!("stage 3/3: naming route centroids");
    let cache = AddressCache::new();
    let resolver = NameResolver::new(
        geocoder,
        &cache,
        config.geocoder.workers,
        config.geocoder.precision,
    );
    let names = run_names(&paths.reconciled, &paths.output, resolution, &resolver)?;

    Ok(PipelineSummary {
        routes,
        reconcile,
        names,
    })
}
