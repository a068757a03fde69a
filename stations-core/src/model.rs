use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather station as returned by the OpenWeather station API.
///
/// Passed through to the GraphQL layer without transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    // Registration responses use "ID", lookups use "id".
    #[serde(alias = "ID")]
    pub id: String,
    pub external_id: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub rank: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering a new station (POST /stations body).
///
/// Serializes with the snake_case keys the remote API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStation {
    pub external_id: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

/// Arguments for the measurements listing.
///
/// Field names map 1:1 to the remote query-parameter names (`kind` is the
/// `type` parameter). `None` fields are omitted from the outbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementsQuery {
    pub station_id: String,
    pub kind: Option<String>,
    pub limit: Option<i64>,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

/// An aggregated measurement as returned by the OpenWeather station API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub station_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix timestamp (seconds) of the aggregation window.
    pub date: i64,
    pub temp: Option<TempSummary>,
    pub humidity: Option<HumiditySummary>,
    pub wind: Option<WindSummary>,
    pub precipitation: Option<PrecipitationSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumiditySummary {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindSummary {
    pub deg: Option<f64>,
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecipitationSummary {
    pub rain: Option<f64>,
}
