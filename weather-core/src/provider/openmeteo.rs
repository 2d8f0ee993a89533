use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    Config,
    error::LookupError,
    model::{CurrentSample, GeocodeResult},
};

use super::WeatherSource;

/// Locale for place names returned by geocoding.
const LANGUAGE: &str = "pt";

/// Variables requested from the forecast `current` block.
const CURRENT_VARIABLES: &str = "temperature_2m,weather_code";

/// Open-Meteo geocoding + forecast endpoints. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoSource {
    pub fn new(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(
            config.geocoding_url.clone(),
            config.forecast_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, LookupError> {
        debug!(url, ?query, "sending request");

        let res = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "request failed");
                LookupError::Network(e.to_string())
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| LookupError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(url, %status, body = %truncate_body(&body), "upstream returned error status");
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(url, error = %e, "failed to parse response body");
            LookupError::InvalidResponse(e.to_string())
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    // Open-Meteo omits the key entirely when nothing matches.
    results: Option<Vec<GeoEntry>>,
}

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
}

impl From<GeoEntry> for GeocodeResult {
    fn from(e: GeoEntry) -> Self {
        GeocodeResult {
            name: e.name,
            country: e.country,
            country_code: e.country_code,
            latitude: e.latitude,
            longitude: e.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
}

/// Fields are left untyped so that a wrongly typed value reads as absent
/// instead of failing the whole body.
#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<Value>,
    weather_code: Option<Value>,
    time: Option<Value>,
}

impl From<CurrentBlock> for CurrentSample {
    fn from(c: CurrentBlock) -> Self {
        CurrentSample {
            temperature_c: c.temperature_2m.as_ref().and_then(Value::as_f64),
            weather_code: c.weather_code.as_ref().and_then(integer_code),
            time: c.time.as_ref().and_then(Value::as_str).map(str::to_string),
        }
    }
}

/// Accepts `3` and `3.0`, rejects `3.5` and non-numbers.
fn integer_code(v: &Value) -> Option<i32> {
    let n = v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })?;
    i32::try_from(n).ok()
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Vec<GeocodeResult>, LookupError> {
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", LANGUAGE.to_string()),
            ("format", "json".to_string()),
        ];

        let parsed: GeoResponse = self.get_json(&self.geocoding_url, &query).await?;
        let results = parsed.results.unwrap_or_default();
        debug!(candidates = results.len(), "geocoding finished");

        Ok(results.into_iter().map(GeocodeResult::from).collect())
    }

    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentSample, LookupError> {
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_VARIABLES.to_string()),
            ("timezone", "auto".to_string()),
        ];

        let parsed: ForecastResponse = self.get_json(&self.forecast_url, &query).await?;

        Ok(parsed.current.map(CurrentSample::from).unwrap_or_default())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
