mod coordinate_text;
mod preset_route;
mod reconcile_ops;
mod reconcile_summary;

pub use coordinate_text::parse_lat_lon_text;
pub use preset_route::PresetRoute;
pub use reconcile_ops::{PresetReconciler, Reconciliation};
pub use reconcile_summary::ReconcileSummary;
