//! Centralized error types for the SkyCast application.
//!
//! The dashboard surfaces errors through a single notification slot, so
//! every error that can reach the user carries a `user_message()`
//! suitable for that slot while the full error context stays available
//! for logging.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for the notification
    /// popup.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::MissingApiKey => {
                "No API key configured. Set api.api_key or the OWM_API_KEY environment variable."
            }
        }
    }
}

/// Weather acquisition errors, as the UI surfaces them.
///
/// The `skycast-weather` crate has its own richer error enum; the UI
/// service layer maps it into these three user-visible cases.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather fetch failed: {0}")]
    FetchFailed(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Empty location query")]
    EmptyQuery,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::FetchFailed(_) => "An error occurred while fetching weather data.",
            WeatherError::LocationNotFound(_) => "Location not found.",
            WeatherError::EmptyQuery => "Please enter a location.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let weather_err = WeatherError::EmptyQuery;
        let app_err: AppError = weather_err.into();
        assert!(matches!(app_err, AppError::Weather(WeatherError::EmptyQuery)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Weather(WeatherError::FetchFailed("timeout".into()));
        assert_eq!(
            app_err.user_message(),
            "An error occurred while fetching weather data."
        );

        let app_err = AppError::Weather(WeatherError::LocationNotFound("atlantis".into()));
        assert_eq!(app_err.user_message(), "Location not found.");

        let app_err = AppError::Weather(WeatherError::EmptyQuery);
        assert_eq!(app_err.user_message(), "Please enter a location.");
    }

    #[test]
    fn test_config_error_user_messages() {
        assert!(ConfigError::MissingApiKey.user_message().contains("OWM_API_KEY"));
        assert!(!ConfigError::ParseError("bad".into()).user_message().is_empty());
    }
}
