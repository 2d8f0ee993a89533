use serde_json::Value;

use crate::error::LookupError;

/// Longest city name passed on to geocoding, in characters.
pub const MAX_CITY_CHARS: usize = 100;

/// Trim, collapse inner whitespace runs to one space and cap the length.
///
/// Fails with [`LookupError::EmptyCity`] when nothing is left.
pub fn sanitize_city(raw: &str) -> Result<String, LookupError> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let city: String = collapsed.chars().take(MAX_CITY_CHARS).collect();

    if city.is_empty() {
        return Err(LookupError::EmptyCity);
    }

    Ok(city)
}

/// Like [`sanitize_city`] for loosely typed input; anything other than a
/// JSON string is rejected with [`LookupError::InvalidInput`].
pub fn sanitize_city_value(raw: &Value) -> Result<String, LookupError> {
    match raw {
        Value::String(s) => sanitize_city(s),
        _ => Err(LookupError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_and_collapses() {
        assert_eq!(sanitize_city("  São   Paulo  ").unwrap(), "São Paulo");
        assert_eq!(sanitize_city("Rio\tde\n  Janeiro").unwrap(), "Rio de Janeiro");
    }

    #[test]
    fn truncates_to_max_chars() {
        let long = "a".repeat(200);
        assert_eq!(sanitize_city(&long).unwrap().chars().count(), MAX_CITY_CHARS);
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let long = "ã".repeat(150);
        let city = sanitize_city(&long).unwrap();
        assert_eq!(city.chars().count(), MAX_CITY_CHARS);
        assert!(city.chars().all(|c| c == 'ã'));
    }

    #[test]
    fn blank_input_is_empty_city() {
        assert_eq!(sanitize_city(""), Err(LookupError::EmptyCity));
        assert_eq!(sanitize_city("   \t\n "), Err(LookupError::EmptyCity));
    }

    #[test]
    fn non_string_values_are_invalid_input() {
        for value in [json!(42), json!(null), json!(["Lisboa"]), json!({"city": "Lisboa"})] {
            assert_eq!(sanitize_city_value(&value), Err(LookupError::InvalidInput));
        }
    }

    #[test]
    fn string_values_are_sanitized() {
        assert_eq!(sanitize_city_value(&json!("  Porto ")).unwrap(), "Porto");
        assert_eq!(sanitize_city_value(&json!("  ")), Err(LookupError::EmptyCity));
    }
}
