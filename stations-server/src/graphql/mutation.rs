use async_graphql::{Context, Object, Result};
use stations_core::StationsApi;
use std::sync::Arc;

use super::types::{StationInput, WeatherStation};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register a new station with the remote API.
    async fn add_weather_station(
        &self,
        ctx: &Context<'_>,
        weather_station_request: StationInput,
    ) -> Result<Option<WeatherStation>> {
        let connector = ctx.data::<Arc<dyn StationsApi>>()?;

        let station = connector
            .create_station(&weather_station_request.into())
            .await?;

        Ok(station.map(WeatherStation::from))
    }
}
