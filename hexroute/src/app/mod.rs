mod cli_resolution;
mod hexroute_app;

pub use cli_resolution::parse_resolution;
pub use hexroute_app::{HexRouteApp, HexRouteOperation};
