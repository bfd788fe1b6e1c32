//! Weather backend: async acquisition off the UI thread.
//! All network work runs on the tokio runtime; results are sent back to
//! the main loop via mpsc and applied there.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use skycast_weather::{Coordinates, OpenWeatherClient, WeatherData};

/// Error type for weather operations, as carried back to the UI thread.
#[derive(Debug, Clone)]
pub enum WeatherError {
    Fetch(String),
    LocationNotFound(String),
    EmptyQuery,
}

impl From<skycast_weather::WeatherError> for WeatherError {
    fn from(e: skycast_weather::WeatherError) -> Self {
        use skycast_weather::WeatherError as FetchError;
        match e {
            FetchError::LocationNotFound(query) => WeatherError::LocationNotFound(query),
            FetchError::EmptyQuery => WeatherError::EmptyQuery,
            other => WeatherError::Fetch(other.to_string()),
        }
    }
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::Fetch(s) => write!(f, "Weather fetch error: {}", s),
            WeatherError::LocationNotFound(q) => write!(f, "Location not found: {}", q),
            WeatherError::EmptyQuery => write!(f, "Empty location query"),
        }
    }
}

impl std::error::Error for WeatherError {}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of one acquisition, tagged with its issue sequence.
    FetchDone {
        seq: u64,
        result: Result<WeatherData, WeatherError>,
    },
}

/// Request an acquisition for explicit coordinates.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    handle: &tokio::runtime::Handle,
    tx: &Sender<WeatherServiceMessage>,
    client: Arc<OpenWeatherClient>,
    coords: Coordinates,
    seq: u64,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let result = client.fetch(coords).await.map_err(WeatherError::from);
        let _ = tx.send(WeatherServiceMessage::FetchDone { seq, result });
    });
}

/// Request an acquisition for wherever the machine appears to be.
///
/// Geolocation denial or failure is silent: no message is sent, the
/// fetch via this path simply does not happen.
pub fn request_locate_and_fetch(
    handle: &tokio::runtime::Handle,
    tx: &Sender<WeatherServiceMessage>,
    client: Arc<OpenWeatherClient>,
    seq: u64,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let location = match skycast_weather::current_location().await {
            Ok(location) => {
                tracing::info!(
                    lat = location.coordinates.latitude,
                    lon = location.coordinates.longitude,
                    city = location.city.as_deref().unwrap_or("unknown"),
                    "geolocation resolved"
                );
                location
            }
            Err(e) => {
                tracing::debug!("geolocation unavailable: {}", e);
                return;
            }
        };

        let result = client
            .fetch(location.coordinates)
            .await
            .map_err(WeatherError::from);
        let _ = tx.send(WeatherServiceMessage::FetchDone { seq, result });
    });
}

/// Resolve a place name, then run the acquisition at its coordinate.
/// Blank input fails fast without touching the network.
pub fn request_search(
    handle: &tokio::runtime::Handle,
    tx: &Sender<WeatherServiceMessage>,
    client: Arc<OpenWeatherClient>,
    query: String,
    seq: u64,
) {
    let tx = tx.clone();
    handle.spawn(async move {
        let outcome: Result<WeatherData, skycast_weather::WeatherError> = async {
            let coords = client.find_coordinates(&query).await?;
            client.fetch(coords).await
        }
        .await;

        let result = outcome.map_err(WeatherError::from);
        let _ = tx.send(WeatherServiceMessage::FetchDone { seq, result });
    });
}
