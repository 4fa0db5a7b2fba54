use super::parse_resolution;
use crate::{
    config::PipelineConfig,
    model::{
        geocode::{AddressCache, HttpGeocoder, NameResolver},
        spatial::H3SpatialIndex,
        HexRouteError,
    },
    pipeline::{self, PipelinePaths},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// command line tool for curating popular routes from ride data on the H3 grid
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HexRouteApp {
    /// select the pipeline stage to run
    #[command(subcommand)]
    pub op: HexRouteOperation,
    /// TOML or JSON file with pipeline settings. command line values take precedence.
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum HexRouteOperation {
    /// add pickup and dropoff hex ids and centroids to raw ride data
    Enrich {
        /// raw ride data
        #[arg(default_value_t = String::from("big-data.csv"))]
        input_csv: String,
        #[arg(default_value_t = String::from("big-data-with-hex.csv"))]
        output_csv: String,
        /// H3 resolution for hexes
        #[arg(long, value_parser = parse_resolution)]
        resolution: Option<u8>,
    },
    /// aggregate ride counts for hex-to-hex routes, busiest first
    Routes {
        /// raw ride data
        #[arg(default_value_t = String::from("big-data.csv"))]
        input_csv: String,
        #[arg(default_value_t = String::from("hex8_route_counts_filtered.csv"))]
        output_csv: String,
        /// minimum number of rides to keep a route. all routes are kept if omitted.
        #[arg(long, alias = "min_rides")]
        min_rides: Option<usize>,
        /// H3 resolution for hexes
        #[arg(long, value_parser = parse_resolution)]
        resolution: Option<u8>,
    },
    /// filter preset routes to high-volume hex corridors and add hex centroids
    Reconcile {
        /// the preset route file
        #[arg(default_value_t = String::from("preset.csv"))]
        preset_csv: String,
        /// the filtered hex pairs
        #[arg(default_value_t = String::from("hex8_route_counts_filtered.csv"))]
        hex_filter_csv: String,
        #[arg(default_value_t = String::from("preset_with_centroids.csv"))]
        output_csv: String,
        /// H3 resolution for hexes, must match the filtered hex pairs
        #[arg(long, value_parser = parse_resolution)]
        resolution: Option<u8>,
        /// write the kept presets unchanged, without hex and centroid columns
        #[arg(long, default_value_t = false)]
        no_centroids: bool,
    },
    /// fetch area names for preset hex centroids
    Names {
        #[arg(default_value_t = String::from("preset_with_centroids.csv"))]
        input_csv: String,
        #[arg(default_value_t = String::from("preset_with_names.csv"))]
        output_csv: String,
        /// H3 resolution the centroid columns were built at
        #[arg(long, value_parser = parse_resolution)]
        resolution: Option<u8>,
        /// short address endpoint of the geocoding service
        #[arg(long)]
        geocoder_url: Option<String>,
        /// number of concurrent geocoding requests
        #[arg(long)]
        workers: Option<usize>,
    },
    /// run route aggregation, preset reconciliation and naming in sequence
    Run {
        #[arg(default_value_t = String::from("preset.csv"))]
        preset_csv: String,
        #[arg(default_value_t = String::from("big-data.csv"))]
        big_data_csv: String,
        #[arg(default_value_t = String::from("preset_with_names.csv"))]
        output_csv: String,
        /// minimum number of rides to keep a route
        #[arg(long, alias = "min_rides")]
        min_rides: Option<usize>,
        /// H3 resolution for hexes
        #[arg(long, value_parser = parse_resolution)]
        resolution: Option<u8>,
        /// directory for intermediate files
        #[arg(long, default_value_t = String::from("."))]
        work_directory: String,
        /// short address endpoint of the geocoding service
        #[arg(long)]
        geocoder_url: Option<String>,
    },
}

impl HexRouteOperation {
    pub fn run(&self, configuration_file: Option<&String>) -> Result<(), HexRouteError> {
        let base = match configuration_file {
            None => Ok(PipelineConfig::default()),
            Some(f) => {
                log::info!("reading hexroute configuration from {f}");
                PipelineConfig::try_from(f)
            }
        }?;
        let conf = self.apply_overrides(base).validate()?;
        let index = H3SpatialIndex;

        match self {
            HexRouteOperation::Enrich {
                input_csv,
                output_csv,
                ..
            } => {
                let summary = pipeline::run_enrich(
                    Path::new(input_csv),
                    Path::new(output_csv),
                    conf.resolution,
                    &index,
                )?;
                println!("{summary}");
            }
            HexRouteOperation::Routes {
                input_csv,
                output_csv,
                min_rides,
                ..
            } => {
                let summary = pipeline::run_routes(
                    Path::new(input_csv),
                    Path::new(output_csv),
                    conf.resolution,
                    *min_rides,
                    &index,
                )?;
                println!("{summary}");
            }
            HexRouteOperation::Reconcile {
                preset_csv,
                hex_filter_csv,
                output_csv,
                no_centroids,
                ..
            } => {
                let summary = pipeline::run_reconcile(
                    Path::new(preset_csv),
                    Path::new(hex_filter_csv),
                    Path::new(output_csv),
                    conf.resolution,
                    !no_centroids,
                    &index,
                )?;
                println!("{summary}");
            }
            HexRouteOperation::Names {
                input_csv,
                output_csv,
                ..
            } => {
                pipeline::require_inputs(&[Path::new(input_csv)])?;
                let geocoder = HttpGeocoder::new(&conf.geocoder)?;
                let cache = AddressCache::new();
                let resolver = NameResolver::new(
                    &geocoder,
                    &cache,
                    conf.geocoder.workers,
                    conf.geocoder.precision,
                );
                let summary = pipeline::run_names(
                    Path::new(input_csv),
                    Path::new(output_csv),
                    conf.resolution,
                    &resolver,
                )?;
                println!("{summary}");
            }
            HexRouteOperation::Run {
                preset_csv,
                big_data_csv,
                output_csv,
                work_directory,
                ..
            } => {
                let paths = PipelinePaths::new(
                    Path::new(big_data_csv),
                    Path::new(preset_csv),
                    Path::new(output_csv),
                    Path::new(work_directory),
                    conf.resolution,
                );
                let geocoder = HttpGeocoder::new(&conf.geocoder)?;
                let summary = pipeline::run_pipeline(&paths, &conf, &index, &geocoder)?;
                println!("{summary}");
            }
        }
        Ok(())
    }

    /// command line values take precedence over the configuration file.
    fn apply_overrides(&self, mut conf: PipelineConfig) -> PipelineConfig {
        let (resolution, min_rides, geocoder_url, workers) = match self {
            HexRouteOperation::Enrich { resolution, .. } => (resolution, &None, &None, &None),
            HexRouteOperation::Routes {
                resolution,
                min_rides,
                ..
            } => (resolution, min_rides, &None, &None),
            HexRouteOperation::Reconcile { resolution, .. } => (resolution, &None, &None, &None),
            HexRouteOperation::Names {
                resolution,
                geocoder_url,
                workers,
                ..
            } => (resolution, &None, geocoder_url, workers),
            HexRouteOperation::Run {
                resolution,
                min_rides,
                geocoder_url,
                ..
            } => (resolution, min_rides, geocoder_url, &None),
        };
        if let Some(r) = resolution {
            conf.resolution = *r;
        }
        if let Some(m) = min_rides {
            conf.min_rides = *m;
        }
        if let Some(url) = geocoder_url {
            conf.geocoder.url = url.clone();
        }
        if let Some(w) = workers {
            conf.geocoder.workers = *w;
        }
        conf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let app = HexRouteApp::parse_from(["hexroute", "routes", "--min_rides", "7"]);
        match &app.op {
            HexRouteOperation::Routes {
                input_csv,
                output_csv,
                min_rides,
                resolution,
            } => {
                assert_eq!(input_csv, "big-data.csv");
                assert_eq!(output_csv, "hex8_route_counts_filtered.csv");
                assert_eq!(*min_rides, Some(7));
                assert_eq!(*resolution, None);
            }
            _ => panic!("expected routes operation"),
        }
        let conf = app.op.apply_overrides(PipelineConfig::default());
        assert_eq!(conf.min_rides, 7);
        assert_eq!(conf.resolution, 8);
    }

    #[test]
    fn test_names_overrides() {
        let app = HexRouteApp::parse_from([
            "hexroute",
            "names",
            "in.csv",
            "--resolution",
            "9",
            "--workers",
            "3",
            "--geocoder-url",
            "http://geocoder.local/shortaddress",
        ]);
        let conf = app.op.apply_overrides(PipelineConfig::default());
        assert_eq!(conf.resolution, 9);
        assert_eq!(conf.geocoder.workers, 3);
        assert_eq!(conf.geocoder.url, "http://geocoder.local/shortaddress");
    }

    #[test]
    fn test_invalid_resolution_rejected() {
        let result = HexRouteApp::try_parse_from(["hexroute", "enrich", "--resolution", "17"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("big-data.csv").to_string_lossy().to_string();
        let output = dir.path().join("out.csv").to_string_lossy().to_string();
        let app = HexRouteApp::parse_from(["hexroute", "routes", &input, &output]);
        let result = app.op.run(None);
        assert!(matches!(result, Err(HexRouteError::InputMissing(_))));
    }
}
