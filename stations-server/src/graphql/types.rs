use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use chrono::{DateTime, Utc};
use stations_core::{MeasurementsQuery, NewStation, StationsApi, model};
use std::sync::Arc;

/// A weather station registered with the remote API.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct WeatherStation {
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

#[ComplexObject]
impl WeatherStation {
    /// Measurements recorded by this station.
    ///
    /// Derives the station id from the parent object, so the field resolves
    /// correctly wherever a station appears, with no shared per-operation
    /// state.
    async fn measurement_list(&self, ctx: &Context<'_>) -> Result<Option<Vec<Measurement>>> {
        let connector = ctx.data::<Arc<dyn StationsApi>>()?;

        let query = MeasurementsQuery {
            station_id: self.id.clone(),
            ..MeasurementsQuery::default()
        };

        let measurements = connector.list_measurements(&query).await?;
        Ok(measurements.map(|items| items.into_iter().map(Measurement::from).collect()))
    }
}

impl From<model::Station> for WeatherStation {
    fn from(station: model::Station) -> Self {
        Self {
            id: station.id,
            external_id: station.external_id,
            name: station.name,
            longitude: station.longitude,
            latitude: station.latitude,
            altitude: station.altitude,
            rank: station.rank,
            created_at: station.created_at,
            updated_at: station.updated_at,
        }
    }
}

/// An aggregated measurement.
#[derive(Debug, Clone, SimpleObject)]
pub struct Measurement {
    pub station_id: String,
    #[graphql(name = "type")]
    pub kind: String,
    /// Unix timestamp (seconds) of the aggregation window.
    pub date: i64,
    pub temp: Option<TempSummary>,
    pub humidity: Option<HumiditySummary>,
    pub wind: Option<WindSummary>,
    pub precipitation: Option<PrecipitationSummary>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct TempSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct HumiditySummary {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct WindSummary {
    pub deg: Option<f64>,
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct PrecipitationSummary {
    pub rain: Option<f64>,
}

impl From<model::Measurement> for Measurement {
    fn from(measurement: model::Measurement) -> Self {
        Self {
            station_id: measurement.station_id,
            kind: measurement.kind,
            date: measurement.date,
            temp: measurement.temp.map(|t| TempSummary {
                min: t.min,
                max: t.max,
                average: t.average,
            }),
            humidity: measurement.humidity.map(|h| HumiditySummary { average: h.average }),
            wind: measurement.wind.map(|w| WindSummary {
                deg: w.deg,
                speed: w.speed,
            }),
            precipitation: measurement
                .precipitation
                .map(|p| PrecipitationSummary { rain: p.rain }),
        }
    }
}

/// Input for registering a new station.
#[derive(Debug, Clone, InputObject)]
pub struct StationInput {
    pub external_id: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl From<StationInput> for NewStation {
    fn from(input: StationInput) -> Self {
        Self {
            external_id: input.external_id,
            name: input.name,
            longitude: input.longitude,
            latitude: input.latitude,
            altitude: input.altitude,
        }
    }
}
