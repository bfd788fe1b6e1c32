//! Weather-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Empty location query")]
    EmptyQuery,

    #[error("Malformed payload: {0}")]
    Parse(String),

    #[error("Unrepresentable forecast timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("Invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl WeatherError {
    /// Whether this error means the searched place does not exist, as
    /// opposed to the acquisition itself failing.
    pub fn is_unknown_location(&self) -> bool {
        matches!(self, Self::LocationNotFound(_))
    }
}
