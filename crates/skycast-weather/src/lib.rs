//! Weather acquisition and shaping for SkyCast.
//!
//! Talks to OpenWeatherMap, collapses the 3-hour forecast series into
//! day/night summaries, resolves a coordinate from the machine's public
//! IP or a free-text place name, and exposes the presentation-boundary
//! mappings (background theme keys, icon URLs).

pub mod client;
pub mod error;
pub mod location;
pub mod summary;
pub mod theme;
pub mod types;

pub use client::OpenWeatherClient;
pub use error::WeatherError;
pub use location::{current_location, Location, LocationError};
pub use summary::summarize;
pub use types::{
    Condition, Coordinates, CurrentConditions, DailyForecast, ForecastSample, WeatherData,
};
