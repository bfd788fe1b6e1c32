//! Weather data types: the internal shapes the dashboard renders and
//! the OpenWeatherMap payload mirrors they are built from.

use serde::{Deserialize, Serialize};

/// Geographic coordinate pair.
///
/// Doubles as the wire shape of OpenWeatherMap's `coord` block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// Condition descriptor: a sky/precipitation category label plus the
/// provider's icon identifier. One forecast sample or current snapshot
/// carries an ordered sequence of these; the first is the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub icon: String,
}

/// Current weather snapshot. Built once per successful acquisition and
/// swapped into UI state wholesale; never merged with a prior snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Pressure in hPa.
    pub pressure: f64,
    pub wind_speed: f64,
    pub conditions: Vec<Condition>,
    /// Epoch seconds, UTC.
    pub sunrise: i64,
    /// Epoch seconds, UTC.
    pub sunset: i64,
    /// Display name for the location, as reported by the provider.
    pub location_name: String,
    pub coordinates: Coordinates,
}

/// One element of the provider's 3-hour forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Epoch seconds, UTC.
    pub dt: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub conditions: Vec<Condition>,
}

/// Day/night summary for one calendar date. The date itself is implicit
/// in `dt`, the timestamp of the date's first forecast sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub day_temp: f64,
    pub night_temp: f64,
    pub day_conditions: Vec<Condition>,
    pub night_conditions: Vec<Condition>,
}

/// Result of one acquisition: current conditions plus at most seven
/// daily summaries, first entry conventionally "today".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

// OpenWeatherMap response mirrors. Only the consumed fields are listed;
// serde skips the rest. A payload missing a required field fails
// deserialization, which is where malformed provider data surfaces.

/// `GET /weather` payload.
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub main: CurrentMain,
    pub wind: Wind,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub sys: Sys,
    pub name: String,
    pub coord: Coordinates,
}

#[derive(Debug, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub humidity: u8,
    pub pressure: f64,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct Sys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// `GET /weather?q=` payload as the place-name resolver consumes it:
/// the coordinate is the only field of interest and is absent when the
/// provider does not know the place.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub coord: Option<Coordinates>,
}

/// `GET /forecast` payload: 3-hour step, 5 days, ordered list.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastMain {
    pub temp_max: f64,
    pub temp_min: f64,
}

impl From<CurrentResponse> for CurrentConditions {
    fn from(raw: CurrentResponse) -> Self {
        Self {
            temperature: raw.main.temp,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.speed,
            conditions: raw.weather,
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
            location_name: raw.name,
            coordinates: raw.coord,
        }
    }
}

impl From<ForecastEntry> for ForecastSample {
    fn from(raw: ForecastEntry) -> Self {
        Self {
            dt: raw.dt,
            temp_max: raw.main.temp_max,
            temp_min: raw.main.temp_min,
            conditions: raw.weather,
        }
    }
}
