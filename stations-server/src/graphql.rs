//! GraphQL schema over the station connector.
//!
//! Code-first schema with:
//! - [`QueryRoot`]: station and measurement queries
//! - [`MutationRoot`]: station registration

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{Measurement, StationInput, WeatherStation};

use async_graphql::{EmptySubscription, Schema};
use stations_core::StationsApi;
use std::sync::Arc;

pub type StationsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the connector injected as shared data.
pub fn build_schema(connector: Arc<dyn StationsApi>) -> StationsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(connector)
        .finish()
}

/// Schema SDL, for the `--print-schema` flag.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use stations_core::model::{Measurement, Station};
    use stations_core::{MeasurementsQuery, NewStation, StationsApi};
    use std::sync::Mutex;

    /// One recorded connector invocation.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        ListStations,
        GetStation { station_id: String },
        ListMeasurements(MeasurementsQuery),
        CreateStation(NewStation),
    }

    /// Connector fake that records every call and returns canned data.
    #[derive(Debug, Default)]
    pub struct FakeStations {
        pub calls: Mutex<Vec<Call>>,
        pub stations: Option<Vec<Station>>,
        pub station: Option<Station>,
        pub measurements: Option<Vec<Measurement>>,
        pub fail: bool,
    }

    impl FakeStations {
        pub fn recorded_calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                anyhow::bail!("connector exploded");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl StationsApi for FakeStations {
        async fn list_stations(&self) -> anyhow::Result<Option<Vec<Station>>> {
            self.record(Call::ListStations)?;
            Ok(self.stations.clone())
        }

        async fn get_station(&self, station_id: &str) -> anyhow::Result<Option<Station>> {
            self.record(Call::GetStation {
                station_id: station_id.to_string(),
            })?;
            Ok(self.station.clone())
        }

        async fn list_measurements(
            &self,
            query: &MeasurementsQuery,
        ) -> anyhow::Result<Option<Vec<Measurement>>> {
            self.record(Call::ListMeasurements(query.clone()))?;
            Ok(self.measurements.clone())
        }

        async fn create_station(&self, station: &NewStation) -> anyhow::Result<Option<Station>> {
            self.record(Call::CreateStation(station.clone()))?;
            Ok(self.station.clone())
        }
    }

    pub fn station(id: &str) -> Station {
        Station {
            id: id.to_string(),
            external_id: format!("EXT_{id}"),
            name: "Test Station".to_string(),
            longitude: -122.43,
            latitude: 37.76,
            altitude: 150.0,
            rank: Some(0),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn measurement(station_id: &str) -> Measurement {
        Measurement {
            station_id: station_id.to_string(),
            kind: "h".to_string(),
            date: 1_500_000_000,
            temp: None,
            humidity: None,
            wind: None,
            precipitation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_exposes_the_expected_surface() {
        let sdl = sdl();

        assert!(sdl.contains("weatherStationsList"));
        assert!(sdl.contains("weatherStation(station_id: String!)"));
        assert!(sdl.contains("measurementsList(station_id: String!"));
        assert!(sdl.contains("measurementList"));
        assert!(sdl.contains("addWeatherStation(weatherStationRequest: StationInput!)"));
        assert!(sdl.contains("externalId"));
    }
}
