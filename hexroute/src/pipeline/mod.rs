//! the pipeline stages. each stage reads its inputs from files and writes a
//! single output file, so stages can be run one at a time or chained by
//! [`run_pipeline`]. no stage writes output unless all of its inputs and
//! required columns are present.
mod enrich_stage;
mod names_stage;
mod pipeline_run;
mod reconcile_stage;
mod routes_stage;

pub use enrich_stage::{run_enrich, EnrichSummary};
pub use names_stage::run_names;
pub use pipeline_run::{run_pipeline, PipelinePaths, PipelineSummary};
pub use reconcile_stage::run_reconcile;
pub use routes_stage::{run_routes, RoutesSummary};

use crate::model::HexRouteError;
use std::path::Path;

/// fails on the first input file that does not exist.
pub fn require_inputs(paths: &[&Path]) -> Result<(), HexRouteError> {
    match paths.iter().find(|p| !p.exists()) {
        Some(missing) => Err(HexRouteError::InputMissing(
            missing.to_string_lossy().to_string(),
        )),
        None => Ok(()),
    }
}
