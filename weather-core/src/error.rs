use thiserror::Error;

/// Every way a single city lookup can fail.
///
/// A failed lookup surfaces exactly one of these; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The caller handed over something that is not text.
    #[error("city name must be a string")]
    InvalidInput,

    /// Nothing left after trimming and collapsing whitespace.
    #[error("city name is empty")]
    EmptyCity,

    /// The request never produced an HTTP response.
    #[error("network failure: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("upstream responded with HTTP {0}")]
    UpstreamStatus(u16),

    /// The response body did not have the expected shape.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Geocoding returned no candidates.
    #[error("city not found")]
    CityNotFound,

    /// The forecast carried no numeric current temperature.
    #[error("current temperature missing from forecast")]
    MissingTemperature,
}
