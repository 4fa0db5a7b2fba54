pub mod constants;
pub mod geocode;
mod hexroute_error;
pub mod preset;
pub mod route;
pub mod spatial;
pub mod table;

pub use hexroute_error::HexRouteError;
