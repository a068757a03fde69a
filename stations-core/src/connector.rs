use crate::model::{Measurement, MeasurementsQuery, NewStation, Station};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherStations;

/// A typed descriptor of one outbound REST call.
///
/// Connector operations build one of these per invocation, so the exact
/// shape of a request (method, path, query parameters, body) can be
/// inspected without touching the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: reqwest::Method,
    /// Path relative to the API base URL, without a leading slash.
    pub path: String,
    /// Query parameters in the order they are attached.
    pub query: Vec<(&'static str, String)>,
    /// JSON body, for POST requests.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: reqwest::Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append one query parameter.
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }
}

/// The station data source the resolver layer calls into.
///
/// Every operation issues exactly one outbound request. `Ok(None)` means the
/// remote call succeeded but returned no data; transport failures, non-2xx
/// statuses and malformed JSON propagate as errors.
#[async_trait]
pub trait StationsApi: Send + Sync + Debug {
    async fn list_stations(&self) -> anyhow::Result<Option<Vec<Station>>>;

    async fn get_station(&self, station_id: &str) -> anyhow::Result<Option<Station>>;

    async fn list_measurements(
        &self,
        query: &MeasurementsQuery,
    ) -> anyhow::Result<Option<Vec<Measurement>>>;

    async fn create_station(&self, station: &NewStation) -> anyhow::Result<Option<Station>>;
}
