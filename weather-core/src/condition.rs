//! Weather code vocabulary: classification into [`Condition`] tags and the
//! pt-BR description table.
//!
//! Codes follow the WMO interpretation used by Open-Meteo
//! (<https://open-meteo.com/en/docs#weathervariables>).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw weather code as reported by the forecast service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i32);

/// Description used for any code outside [`DESCRIPTIONS`].
pub const UNKNOWN_DESCRIPTION: &str = "Condição desconhecida";

/// Every code in the provider vocabulary with its description.
const DESCRIPTIONS: [(i32, &str); 28] = [
    (0, "Céu limpo"),
    (1, "Principalmente limpo"),
    (2, "Parcialmente nublado"),
    (3, "Nublado"),
    (45, "Nevoeiro"),
    (48, "Nevoeiro com geada"),
    (51, "Garoa fraca"),
    (53, "Garoa moderada"),
    (55, "Garoa intensa"),
    (56, "Garoa congelante fraca"),
    (57, "Garoa congelante intensa"),
    (61, "Chuva fraca"),
    (63, "Chuva moderada"),
    (65, "Chuva intensa"),
    (66, "Chuva congelante fraca"),
    (67, "Chuva congelante intensa"),
    (71, "Neve fraca"),
    (73, "Neve moderada"),
    (75, "Neve intensa"),
    (77, "Grãos de neve"),
    (80, "Aguaceiros fracos"),
    (81, "Aguaceiros moderados"),
    (82, "Aguaceiros violentos"),
    (85, "Aguaceiros de neve fracos"),
    (86, "Aguaceiros de neve fortes"),
    (95, "Trovoadas"),
    (96, "Trovoadas com granizo fraco"),
    (99, "Trovoadas com granizo forte"),
];

impl WeatherCode {
    /// Stand-in for a forecast that omitted the code.
    pub const UNKNOWN: Self = Self(-1);

    /// All codes the description table knows about.
    pub fn known() -> impl Iterator<Item = WeatherCode> {
        DESCRIPTIONS.iter().map(|&(code, _)| WeatherCode(code))
    }

    pub fn condition(self) -> Condition {
        Condition::from_code(self)
    }

    /// Human-readable pt-BR description, falling back to
    /// [`UNKNOWN_DESCRIPTION`].
    pub fn description(self) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|&&(code, _)| code == self.0)
            .map(|&(_, text)| text)
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }
}

impl From<Option<i32>> for WeatherCode {
    fn from(code: Option<i32>) -> Self {
        code.map_or(Self::UNKNOWN, WeatherCode)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic weather category driving themes and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Cloud,
    Fog,
    Drizzle,
    Rain,
    Hail,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl Condition {
    /// Classify a weather code. Total: anything unlisted is `Unknown`.
    pub fn from_code(code: WeatherCode) -> Self {
        match code.0 {
            0 | 1 => Self::Clear,
            2 | 3 => Self::Cloud,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 80 | 81 | 82 => Self::Rain,
            66 | 67 => Self::Hail,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloud => "cloud",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Hail => "hail",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Unknown => "unknown",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Cloud,
            Condition::Fog,
            Condition::Drizzle,
            Condition::Rain,
            Condition::Hail,
            Condition::Snow,
            Condition::Thunderstorm,
            Condition::Unknown,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
