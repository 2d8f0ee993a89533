use chrono::{DateTime, Locale, NaiveDateTime, TimeZone, Utc};

/// pt-BR medium date with short time, e.g. "15 de jan. de 2024, 12:00".
const UPDATED_AT_FORMAT: &str = "%-d de %b. de %Y, %H:%M";

/// Format an observation timestamp for display.
///
/// Open-Meteo reports local wall-clock time without an offset
/// (`2024-01-15T12:00`); RFC 3339 input is also accepted. Anything that
/// doesn't parse is returned unchanged.
pub fn format_updated_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format_localized(UPDATED_AT_FORMAT, Locale::pt_BR).to_string();
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| {
            // Wall-clock time; Utc here only carries it through formatting.
            Utc.from_utc_datetime(&naive)
                .format_localized(UPDATED_AT_FORMAT, Locale::pt_BR)
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}
