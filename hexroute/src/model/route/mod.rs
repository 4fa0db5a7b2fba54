mod aggregate_ops;
mod aggregation_summary;
mod ride_record;
mod route_pair_key;
mod route_volume;
mod threshold_summary;
pub mod volume_table_ops;

pub use aggregate_ops::aggregate_routes;
pub use aggregation_summary::AggregationSummary;
pub use ride_record::{RideColumns, RideRecord};
pub use route_pair_key::RoutePairKey;
pub use route_volume::{RouteVolume, RouteVolumes};
pub use threshold_summary::ThresholdSummary;
