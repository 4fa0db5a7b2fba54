mod address_cache;
mod coord_key;
mod geocode_error;
mod http_geocoder;
mod name_resolver;
mod name_summary;
mod reverse_geocoder;

pub use address_cache::{AddressCache, AddressEntry};
pub use coord_key::CoordKey;
pub use geocode_error::GeocodeError;
pub use http_geocoder::HttpGeocoder;
pub use name_resolver::{EndpointPair, NameResolver, RouteNames};
pub use name_summary::NameSummary;
pub use reverse_geocoder::ReverseGeocoder;
