use skycast_core::{AppError, WeatherError};

use crate::services::WeatherError as UiWeatherError;

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::Fetch(s) => AppError::Weather(WeatherError::FetchFailed(s)),
            UiWeatherError::LocationNotFound(q) => {
                AppError::Weather(WeatherError::LocationNotFound(q))
            }
            UiWeatherError::EmptyQuery => AppError::Weather(WeatherError::EmptyQuery),
        }
    }
}
