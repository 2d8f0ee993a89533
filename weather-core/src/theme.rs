use rand::Rng;
use reqwest::Url;
use serde::Serialize;
use std::fmt::Debug;

use crate::condition::Condition;

/// Presentation hints for rendering a result of a given [`Condition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualTheme {
    pub background_image: String,
    pub gradient_overlay: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub icon_hint: &'static str,
}

/// Fixed per-condition palette. `query` describes the backdrop a
/// [`BackgroundResolver`] should pick.
#[derive(Debug)]
struct Palette {
    query: &'static str,
    text_color: &'static str,
    accent_color: &'static str,
    gradient: &'static str,
    icon_hint: &'static str,
}

const DARK_TEXT: &str = "#0B1221";
const LIGHT_TEXT: &str = "#F8FAFC";

const CLEAR: Palette = Palette {
    query: "clear sky sunrise minimal aesthetic",
    text_color: DARK_TEXT,
    accent_color: "#2563EB",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.15) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "sun",
};

const CLOUD: Palette = Palette {
    query: "overcast clouds soft light minimal",
    text_color: DARK_TEXT,
    accent_color: "#0EA5E9",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.22) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "cloud",
};

const FOG: Palette = Palette {
    query: "foggy landscape moody minimal",
    text_color: DARK_TEXT,
    accent_color: "#14B8A6",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.28) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "fog",
};

const DRIZZLE: Palette = Palette {
    query: "light drizzle rain street reflections minimal",
    text_color: DARK_TEXT,
    accent_color: "#22D3EE",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.18) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "drizzle",
};

const RAIN: Palette = Palette {
    query: "heavy rain storm city night neon minimal",
    text_color: LIGHT_TEXT,
    accent_color: "#60A5FA",
    gradient: "linear-gradient(180deg, rgba(0,0,0,0.45) 0%, rgba(0,0,0,0.05) 70%)",
    icon_hint: "rain",
};

const HAIL: Palette = Palette {
    query: "ice rain hail storm dramatic minimal",
    text_color: LIGHT_TEXT,
    accent_color: "#93C5FD",
    gradient: "linear-gradient(180deg, rgba(0,0,0,0.42) 0%, rgba(0,0,0,0.06) 70%)",
    icon_hint: "hail",
};

const SNOW: Palette = Palette {
    query: "snowfall serene winter minimal",
    text_color: DARK_TEXT,
    accent_color: "#3B82F6",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.30) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "snow",
};

const THUNDERSTORM: Palette = Palette {
    query: "thunderstorm lightning dramatic night minimal",
    text_color: LIGHT_TEXT,
    accent_color: "#A78BFA",
    gradient: "linear-gradient(180deg, rgba(0,0,0,0.55) 0%, rgba(0,0,0,0.10) 70%)",
    icon_hint: "thunder",
};

const UNKNOWN: Palette = Palette {
    query: "abstract gradient minimal background",
    text_color: DARK_TEXT,
    accent_color: "#06B6D4",
    gradient: "linear-gradient(180deg, rgba(255,255,255,0.22) 0%, rgba(255,255,255,0.00) 60%)",
    icon_hint: "question",
};

fn palette(condition: Condition) -> &'static Palette {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Cloud => &CLOUD,
        Condition::Fog => &FOG,
        Condition::Drizzle => &DRIZZLE,
        Condition::Rain => &RAIN,
        Condition::Hail => &HAIL,
        Condition::Snow => &SNOW,
        Condition::Thunderstorm => &THUNDERSTORM,
        Condition::Unknown => &UNKNOWN,
    }
}

/// Picks the background image reference for a theme.
pub trait BackgroundResolver: Send + Sync + Debug {
    /// `query` is a free-text description of the desired backdrop and
    /// `icon_hint` a short slug naming the condition.
    fn resolve(&self, query: &str, icon_hint: &str) -> String;
}

/// Self-hosted images at `{base_url}/{icon_hint}.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    pub base_url: String,
}

impl StaticAssets {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl BackgroundResolver for StaticAssets {
    fn resolve(&self, _query: &str, icon_hint: &str) -> String {
        format!("{}/{}.jpg", self.base_url.trim_end_matches('/'), icon_hint)
    }
}

/// Hotlinked stock photo with a random numeric fragment per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsplashHotlink;

const UNSPLASH_PREFIX: &str = "https://images.unsplash.com/photo-149";

impl BackgroundResolver for UnsplashHotlink {
    fn resolve(&self, query: &str, _icon_hint: &str) -> String {
        let fragment: u16 = rand::rng().random_range(1000..=9999);
        let base = format!("{UNSPLASH_PREFIX}{fragment}-");

        Url::parse_with_params(
            &base,
            &[
                ("auto", "format"),
                ("fit", "crop"),
                ("w", "1920"),
                ("q", "75"),
                ("ixid", "weather-app"),
                ("keyword", query),
            ],
        )
        .map_or(base, String::from)
    }
}

/// Build the theme for `condition`. Only `background_image` depends on
/// the resolver; every other field is fixed per condition.
pub fn visual_theme(condition: Condition, backgrounds: &dyn BackgroundResolver) -> VisualTheme {
    let p = palette(condition);

    VisualTheme {
        background_image: backgrounds.resolve(p.query, p.icon_hint),
        gradient_overlay: p.gradient,
        text_color: p.text_color,
        accent_color: p.accent_color,
        icon_hint: p.icon_hint,
    }
}
