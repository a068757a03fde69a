//! Core library for the weather-station GraphQL service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The connector that turns structured arguments into OpenWeather REST calls
//! - Shared domain models (stations, measurements, query arguments)
//!
//! It is used by `stations-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod connector;
pub mod model;

pub use config::Config;
pub use connector::{ApiRequest, OpenWeatherStations, StationsApi};
pub use model::{Measurement, MeasurementsQuery, NewStation, Station};
