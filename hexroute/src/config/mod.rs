mod geocoder_config;
mod pipeline_config;

pub use geocoder_config::GeocoderConfig;
pub use pipeline_config::PipelineConfig;
