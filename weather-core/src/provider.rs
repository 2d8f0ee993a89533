use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::LookupError,
    lookup::WeatherLookup,
    model::{CurrentSample, GeocodeResult},
    provider::openmeteo::OpenMeteoSource,
};

pub mod openmeteo;

/// The two remote calls a lookup depends on.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Resolve a sanitized city name to candidate places, best first.
    /// An empty list means nothing matched.
    async fn geocode(&self, city: &str) -> Result<Vec<GeocodeResult>, LookupError>;

    /// Fetch current temperature and weather code at a coordinate.
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentSample, LookupError>;
}

/// Construct a lookup backed by Open-Meteo from config.
pub fn lookup_from_config(config: &Config) -> anyhow::Result<WeatherLookup> {
    let source = OpenMeteoSource::from_config(config).map_err(|err| {
        anyhow::anyhow!("Failed to initialise HTTP client for Open-Meteo: {err}")
    })?;

    Ok(WeatherLookup::new(Box::new(source), config.background.resolver()))
}
