//! City → weather report pipeline.
//!
//! A lookup runs in two dependent stages: geocoding picks a place, then
//! the forecast for that place's coordinates is fetched and classified.
//! Either a complete [`WeatherReport`] comes back or exactly one
//! [`LookupError`].

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    condition::WeatherCode,
    error::LookupError,
    model::{CurrentSample, ForecastResult, GeocodeResult, WeatherReport},
    provider::WeatherSource,
    sanitize::{sanitize_city, sanitize_city_value},
    theme::{BackgroundResolver, visual_theme},
};

#[derive(Debug)]
pub struct WeatherLookup {
    source: Box<dyn WeatherSource>,
    backgrounds: Box<dyn BackgroundResolver>,
}

impl WeatherLookup {
    pub fn new(source: Box<dyn WeatherSource>, backgrounds: Box<dyn BackgroundResolver>) -> Self {
        Self { source, backgrounds }
    }

    /// Look up current weather for a raw, user-typed city name.
    pub async fn lookup(&self, raw_city: &str) -> Result<WeatherReport, LookupError> {
        let city = sanitize_city(raw_city)?;
        self.run(&city).await
    }

    /// Same as [`lookup`](Self::lookup) for untyped input; non-strings
    /// fail with [`LookupError::InvalidInput`].
    pub async fn lookup_value(&self, raw_city: &Value) -> Result<WeatherReport, LookupError> {
        let city = sanitize_city_value(raw_city)?;
        self.run(&city).await
    }

    #[instrument(skip(self))]
    async fn run(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let place = self.locate(city).await?;
        let forecast = self.observe(&place).await?;
        Ok(self.compose(&place, forecast))
    }

    /// Stage one: first geocoding candidate, the rest are dropped.
    async fn locate(&self, city: &str) -> Result<GeocodeResult, LookupError> {
        let place = self
            .source
            .geocode(city)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                debug!(city, "no geocoding candidates");
                LookupError::CityNotFound
            })?;

        debug!(name = %place.name, lat = place.latitude, lon = place.longitude, "resolved city");
        Ok(place)
    }

    /// Stage two: current conditions at the resolved place.
    async fn observe(&self, place: &GeocodeResult) -> Result<ForecastResult, LookupError> {
        let sample = self.source.current_conditions(place.latitude, place.longitude).await?;
        validate_sample(sample)
    }

    fn compose(&self, place: &GeocodeResult, forecast: ForecastResult) -> WeatherReport {
        let code = forecast.weather_code;
        let condition = code.condition();

        WeatherReport {
            city: place.display_label(),
            temperature_c: forecast.temperature_c,
            description: code.description(),
            condition,
            visual_theme: visual_theme(condition, self.backgrounds.as_ref()),
            observed_at: forecast.observed_at,
        }
    }
}

fn validate_sample(sample: CurrentSample) -> Result<ForecastResult, LookupError> {
    let temperature_c = sample.temperature_c.ok_or_else(|| {
        warn!("forecast response has no numeric temperature_2m");
        LookupError::MissingTemperature
    })?;

    Ok(ForecastResult {
        temperature_c,
        weather_code: WeatherCode::from(sample.weather_code),
        observed_at: sample.time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::theme::StaticAssets;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Default)]
    struct Calls {
        geocode: AtomicUsize,
        forecast: AtomicUsize,
        last_city: Mutex<Option<String>>,
        last_coords: Mutex<Option<(f64, f64)>>,
    }

    #[derive(Debug)]
    struct FakeSource {
        places: Result<Vec<GeocodeResult>, LookupError>,
        sample: Result<CurrentSample, LookupError>,
        calls: Arc<Calls>,
    }

    #[async_trait]
    impl WeatherSource for FakeSource {
        async fn geocode(&self, city: &str) -> Result<Vec<GeocodeResult>, LookupError> {
            self.calls.geocode.fetch_add(1, Ordering::SeqCst);
            *self.calls.last_city.lock().unwrap() = Some(city.to_string());
            self.places.clone()
        }

        async fn current_conditions(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<CurrentSample, LookupError> {
            self.calls.forecast.fetch_add(1, Ordering::SeqCst);
            *self.calls.last_coords.lock().unwrap() = Some((latitude, longitude));
            self.sample.clone()
        }
    }

    fn lisboa() -> GeocodeResult {
        GeocodeResult {
            name: "Lisboa".into(),
            country: Some("Portugal".into()),
            country_code: Some("PT".into()),
            latitude: 38.71667,
            longitude: -9.13333,
        }
    }

    fn sample(temp: Option<f64>, code: Option<i32>) -> CurrentSample {
        CurrentSample {
            temperature_c: temp,
            weather_code: code,
            time: Some("2024-05-01T14:00".into()),
        }
    }

    fn lookup_with(
        places: Result<Vec<GeocodeResult>, LookupError>,
        sample: Result<CurrentSample, LookupError>,
    ) -> (WeatherLookup, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let source = FakeSource { places, sample, calls: calls.clone() };
        let lookup = WeatherLookup::new(
            Box::new(source),
            Box::new(StaticAssets::new("https://cdn.example.com")),
        );
        (lookup, calls)
    }

    #[tokio::test]
    async fn cloudy_lisbon_report() {
        let (lookup, calls) = lookup_with(Ok(vec![lisboa()]), Ok(sample(Some(18.4), Some(3))));

        let report = lookup.lookup("  Lisboa ").await.expect("report");

        assert_eq!(report.city, "Lisboa, Portugal");
        assert!((report.temperature_c - 18.4).abs() < f64::EPSILON);
        assert_eq!(report.description, "Nublado");
        assert_eq!(report.condition, Condition::Cloud);
        assert_eq!(report.visual_theme.icon_hint, "cloud");
        assert_eq!(report.visual_theme.background_image, "https://cdn.example.com/cloud.jpg");
        assert_eq!(report.observed_at.as_deref(), Some("2024-05-01T14:00"));

        assert_eq!(calls.last_city.lock().unwrap().as_deref(), Some("Lisboa"));
        assert_eq!(*calls.last_coords.lock().unwrap(), Some((38.71667, -9.13333)));
    }

    #[tokio::test]
    async fn unknown_city_skips_forecast() {
        let (lookup, calls) = lookup_with(Ok(vec![]), Ok(sample(Some(1.0), Some(0))));

        let err = lookup.lookup("Xyzzyville").await.unwrap_err();

        assert_eq!(err, LookupError::CityNotFound);
        assert_eq!(calls.geocode.load(Ordering::SeqCst), 1);
        assert_eq!(calls.forecast.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_temperature_fails() {
        let (lookup, _) = lookup_with(Ok(vec![lisboa()]), Ok(sample(None, Some(3))));

        assert_eq!(lookup.lookup("Lisboa").await.unwrap_err(), LookupError::MissingTemperature);
    }

    #[tokio::test]
    async fn missing_code_is_unknown_but_succeeds() {
        let (lookup, _) = lookup_with(Ok(vec![lisboa()]), Ok(sample(Some(21.0), None)));

        let report = lookup.lookup("Lisboa").await.expect("report");

        assert_eq!(report.condition, Condition::Unknown);
        assert_eq!(report.description, "Condição desconhecida");
        assert_eq!(report.visual_theme.icon_hint, "question");
        assert!((report.temperature_c - 21.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn blank_input_never_reaches_network() {
        let (lookup, calls) = lookup_with(Ok(vec![lisboa()]), Ok(sample(Some(1.0), Some(0))));

        assert_eq!(lookup.lookup("   ").await.unwrap_err(), LookupError::EmptyCity);
        assert_eq!(calls.geocode.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_string_input_is_rejected() {
        let (lookup, calls) = lookup_with(Ok(vec![lisboa()]), Ok(sample(Some(1.0), Some(0))));

        assert_eq!(lookup.lookup_value(&json!(7)).await.unwrap_err(), LookupError::InvalidInput);
        assert_eq!(calls.geocode.load(Ordering::SeqCst), 0);

        let report = lookup.lookup_value(&json!("Lisboa")).await.expect("report");
        assert_eq!(report.condition, Condition::Clear);
    }

    #[tokio::test]
    async fn only_first_candidate_is_used() {
        let other = GeocodeResult {
            name: "Lisbon".into(),
            country: Some("United States".into()),
            country_code: Some("US".into()),
            latitude: 44.0,
            longitude: -70.0,
        };
        let (lookup, calls) =
            lookup_with(Ok(vec![lisboa(), other]), Ok(sample(Some(10.0), Some(61))));

        let report = lookup.lookup("Lisboa").await.expect("report");

        assert_eq!(report.city, "Lisboa, Portugal");
        assert_eq!(*calls.last_coords.lock().unwrap(), Some((38.71667, -9.13333)));
    }

    #[tokio::test]
    async fn geocoding_errors_pass_through() {
        let (lookup, calls) =
            lookup_with(Err(LookupError::UpstreamStatus(503)), Ok(sample(Some(1.0), None)));

        assert_eq!(lookup.lookup("Lisboa").await.unwrap_err(), LookupError::UpstreamStatus(503));
        assert_eq!(calls.forecast.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn forecast_errors_pass_through() {
        let (lookup, _) =
            lookup_with(Ok(vec![lisboa()]), Err(LookupError::Network("reset".into())));

        assert_eq!(
            lookup.lookup("Lisboa").await.unwrap_err(),
            LookupError::Network("reset".into())
        );
    }
}
