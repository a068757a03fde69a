use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::model::{Measurement, MeasurementsQuery, NewStation, Station};

use super::{ApiRequest, StationsApi};

/// Connector for the OpenWeather station API (`/data/3.0/stations`,
/// `/data/3.0/measurements`).
#[derive(Debug, Clone)]
pub struct OpenWeatherStations {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherStations {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    fn list_stations_request(&self) -> ApiRequest {
        ApiRequest::get("stations").param("appid", &self.api_key)
    }

    fn get_station_request(&self, station_id: &str) -> ApiRequest {
        ApiRequest::get(format!("stations/{station_id}")).param("appid", &self.api_key)
    }

    /// Parameter names match the remote API exactly; unset arguments are
    /// omitted rather than sent empty.
    fn list_measurements_request(&self, query: &MeasurementsQuery) -> ApiRequest {
        let mut request = ApiRequest::get("measurements").param("station_id", &query.station_id);

        if let Some(kind) = &query.kind {
            request = request.param("type", kind);
        }
        if let Some(limit) = query.limit {
            request = request.param("limit", limit);
        }
        if let Some(from) = query.from {
            request = request.param("from", from);
        }
        if let Some(to) = query.to {
            request = request.param("to", to);
        }

        request.param("appid", &self.api_key)
    }

    fn create_station_request(&self, station: &NewStation) -> Result<ApiRequest> {
        let body = serde_json::to_value(station)
            .context("Failed to serialize station registration body")?;

        Ok(ApiRequest::post("stations", body).param("appid", &self.api_key))
    }

    /// Execute one request: send, check status, read the body, and decode.
    /// No retries, no timeout override.
    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<T>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), request.path);

        log::debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .query(&request.query);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = builder
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather station API: {url}"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather station API response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather station API request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        decode_body(&body)
    }
}

#[async_trait]
impl StationsApi for OpenWeatherStations {
    async fn list_stations(&self) -> Result<Option<Vec<Station>>> {
        self.execute(self.list_stations_request()).await
    }

    async fn get_station(&self, station_id: &str) -> Result<Option<Station>> {
        self.execute(self.get_station_request(station_id)).await
    }

    async fn list_measurements(
        &self,
        query: &MeasurementsQuery,
    ) -> Result<Option<Vec<Measurement>>> {
        self.execute(self.list_measurements_request(query)).await
    }

    async fn create_station(&self, station: &NewStation) -> Result<Option<Station>> {
        self.execute(self.create_station_request(station)?).await
    }
}

/// Decode a response body, mapping "no data" to `None`.
///
/// Only an absent body counts as absent: empty or whitespace-only text, or
/// the literal `null`. Anything else must parse as the expected type, so a
/// scalar like `0` or `false` is a parse error rather than a silent miss.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>> {
    let body = body.trim();

    if body.is_empty() || body == "null" {
        return Ok(None);
    }

    let parsed =
        serde_json::from_str(body).context("Failed to parse OpenWeather station API JSON")?;

    Ok(Some(parsed))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
