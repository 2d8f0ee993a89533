//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - City input sanitizing
//! - Weather code classification, descriptions and visual themes
//! - The geocode → forecast lookup pipeline over Open-Meteo
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod sanitize;
pub mod theme;

pub use condition::{Condition, WeatherCode};
pub use config::{BackgroundSource, Config};
pub use error::LookupError;
pub use format::format_updated_at;
pub use lookup::WeatherLookup;
pub use model::{CurrentSample, ForecastResult, GeocodeResult, WeatherReport};
pub use provider::{WeatherSource, lookup_from_config, openmeteo::OpenMeteoSource};
pub use sanitize::{MAX_CITY_CHARS, sanitize_city, sanitize_city_value};
pub use theme::{BackgroundResolver, StaticAssets, UnsplashHotlink, VisualTheme, visual_theme};
