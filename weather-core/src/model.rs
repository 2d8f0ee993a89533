use serde::{Deserialize, Serialize};

use crate::{
    condition::{Condition, WeatherCode},
    theme::VisualTheme,
};

/// A place resolved by geocoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodeResult {
    /// "city, country", else "city, country_code", else "city".
    pub fn display_label(&self) -> String {
        let suffix = self
            .country
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.country_code.as_deref().filter(|c| !c.is_empty()));

        match suffix {
            Some(s) => format!("{}, {}", self.name, s),
            None => self.name.clone(),
        }
    }
}

/// Current conditions exactly as the forecast service returned them.
/// Fields the service left out, or sent with the wrong type, are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentSample {
    pub temperature_c: Option<f64>,
    pub weather_code: Option<i32>,
    pub time: Option<String>,
}

/// Validated current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub temperature_c: f64,
    pub weather_code: WeatherCode,
    pub observed_at: Option<String>,
}

/// Final result of one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub description: &'static str,
    pub condition: Condition,
    pub visual_theme: VisualTheme,
    pub observed_at: Option<String>,
}
