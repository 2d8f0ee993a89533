//! Terminal rendering of reports and errors.

use weather_core::{LookupError, WeatherReport, format_updated_at};

pub const LOADING: &str = "Buscando clima...";

const NOT_FOUND: &str = "Cidade não encontrada.";
const EMPTY_CITY: &str = "Informe uma cidade para buscar.";
const GENERIC_FAILURE: &str = "Não foi possível obter os dados. Tente novamente.";

/// Message shown to the user. Internal detail such as status codes is
/// never exposed here; callers log the error itself.
pub fn user_message(err: &LookupError) -> &'static str {
    match err {
        LookupError::CityNotFound => NOT_FOUND,
        LookupError::EmptyCity => EMPTY_CITY,
        _ => GENERIC_FAILURE,
    }
}

fn icon_glyph(hint: &str) -> &'static str {
    match hint {
        "sun" => "\u{2600}",
        "cloud" => "\u{2601}",
        "fog" => "\u{1F32B}",
        "drizzle" => "\u{1F326}",
        "rain" => "\u{1F327}",
        "hail" => "\u{1F9CA}",
        "snow" => "\u{2744}",
        "thunder" => "\u{26C8}",
        _ => "?",
    }
}

pub fn render_report(report: &WeatherReport) -> String {
    let theme = &report.visual_theme;
    let mut out = format!("{}\n", report.city);

    if let Some(ts) = &report.observed_at {
        out.push_str(&format!("Atualizado: {}\n", format_updated_at(ts)));
    }

    out.push_str(&format!(
        "{} {}°C\n{}\n\n",
        icon_glyph(theme.icon_hint),
        report.temperature_c.round() as i64,
        report.description,
    ));
    out.push_str(&format!("condition:  {}\n", report.condition));
    out.push_str(&format!("background: {}\n", theme.background_image));
    out.push_str(&format!("gradient:   {}\n", theme.gradient_overlay));
    out.push_str(&format!("text:       {}  accent: {}", theme.text_color, theme.accent_color));

    out
}
