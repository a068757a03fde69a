use async_graphql::{Context, Object, Result};
use stations_core::{MeasurementsQuery, StationsApi};
use std::sync::Arc;

use super::types::{Measurement, WeatherStation};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All stations registered for this API key.
    async fn weather_stations_list(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<WeatherStation>>> {
        let connector = ctx.data::<Arc<dyn StationsApi>>()?;

        let stations = connector.list_stations().await?;
        Ok(stations.map(|items| items.into_iter().map(WeatherStation::from).collect()))
    }

    /// One station by id.
    async fn weather_station(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "station_id")] station_id: String,
    ) -> Result<Option<WeatherStation>> {
        let connector = ctx.data::<Arc<dyn StationsApi>>()?;

        let station = connector.get_station(&station_id).await?;
        Ok(station.map(WeatherStation::from))
    }

    /// Measurements for a station; arguments are forwarded to the remote
    /// API unchanged.
    async fn measurements_list(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "station_id")] station_id: String,
        #[graphql(name = "type")] kind: Option<String>,
        limit: Option<i64>,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Option<Vec<Measurement>>> {
        let connector = ctx.data::<Arc<dyn StationsApi>>()?;

        let query = MeasurementsQuery {
            station_id,
            kind,
            limit,
            from,
            to,
        };

        let measurements = connector.list_measurements(&query).await?;
        Ok(measurements.map(|items| items.into_iter().map(Measurement::from).collect()))
    }
}
