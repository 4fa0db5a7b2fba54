use super::GeocoderConfig;
use crate::model::HexRouteError;
use serde::{Deserialize, Serialize};

/// coordinate keys are scaled integers, beyond this many decimal places
/// they no longer fit and distinct coordinates collapse onto one key.
const MAX_PRECISION: u32 = 9;

/// settings shared by every pipeline stage. the grid resolution lives here,
/// once, so that route volumes and presets are always quantized alike.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub resolution: u8,
    pub min_rides: usize,
    pub geocoder: GeocoderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            resolution: 8,
            min_rides: 5,
            geocoder: GeocoderConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// checks values that would otherwise fail silently deep in a stage.
    pub fn validate(self) -> Result<Self, HexRouteError> {
        if self.resolution > 15 {
            return Err(HexRouteError::InvalidResolution(self.resolution));
        }
        if self.geocoder.workers == 0 {
            return Err(HexRouteError::ConfigurationError(String::from(
                "geocoder.workers must be at least 1",
            )));
        }
        if self.geocoder.precision > MAX_PRECISION {
            return Err(HexRouteError::ConfigurationError(format!(
                "geocoder.precision must be at most {MAX_PRECISION}, found {}",
                self.geocoder.precision
            )));
        }
        if self.geocoder.timeout_secs == 0 {
            return Err(HexRouteError::ConfigurationError(String::from(
                "geocoder.timeout_secs must be at least 1",
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&String> for PipelineConfig {
    type Error = HexRouteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f).map_err(|e| {
            HexRouteError::ConfigurationError(format!("failure reading {f}: {e}"))
        })?;
        let conf: PipelineConfig = if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                HexRouteError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&s).map_err(|e| {
                HexRouteError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(HexRouteError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }?;
        conf.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(contents.as_bytes()).expect("write");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let f = write_file(
            &dir,
            "hexroute.toml",
            "resolution = 9\n\n[geocoder]\nurl = \"http://geocoder.local/shortaddress\"\nworkers = 4\n",
        );
        let conf = PipelineConfig::try_from(&f).expect("valid config");
        assert_eq!(conf.resolution, 9);
        assert_eq!(conf.min_rides, 5);
        assert_eq!(conf.geocoder.url, "http://geocoder.local/shortaddress");
        assert_eq!(conf.geocoder.workers, 4);
        assert_eq!(conf.geocoder.timeout_secs, 5);
        assert_eq!(conf.geocoder.precision, 6);
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let f = write_file(&dir, "hexroute.json", r#"{"min_rides": 10}"#);
        let conf = PipelineConfig::try_from(&f).expect("valid config");
        assert_eq!(conf.min_rides, 10);
        assert_eq!(conf.resolution, 8);
    }

    #[test]
    fn test_invalid_configs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let yaml = write_file(&dir, "hexroute.yaml", "resolution: 8");
        assert!(PipelineConfig::try_from(&yaml).is_err());
        let bad_res = write_file(&dir, "res.toml", "resolution = 16");
        assert!(matches!(
            PipelineConfig::try_from(&bad_res),
            Err(HexRouteError::InvalidResolution(16))
        ));
        let no_workers = write_file(&dir, "workers.toml", "[geocoder]\nworkers = 0");
        assert!(PipelineConfig::try_from(&no_workers).is_err());
        let fine = write_file(&dir, "fine.toml", "[geocoder]\nprecision = 9");
        assert_eq!(
            PipelineConfig::try_from(&fine).ok().map(|c| c.geocoder.precision),
            Some(9)
        );
        let too_fine = write_file(&dir, "too_fine.toml", "[geocoder]\nprecision = 20");
        assert!(matches!(
            PipelineConfig::try_from(&too_fine),
            Err(HexRouteError::ConfigurationError(_))
        ));
    }
}
