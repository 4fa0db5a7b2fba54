//! hexroute turns raw point-to-point ride records into a curated set of
//! high-volume, named popular routes. rides are bucketed onto the H3
//! hexagonal grid, counted per (pickup, dropoff) cell pair, used to validate
//! a curated list of preset routes, and the surviving cells are named via a
//! reverse geocoding service.
pub mod app;
pub mod config;
pub mod model;
pub mod pipeline;
