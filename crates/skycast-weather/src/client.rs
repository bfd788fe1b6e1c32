//! OpenWeatherMap API client.

use reqwest::StatusCode;
use tracing::instrument;
use url::Url;

use crate::error::WeatherError;
use crate::summary;
use crate::types::{
    Coordinates, CurrentConditions, CurrentResponse, ForecastResponse, ForecastSample,
    SearchResponse, WeatherData,
};

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5/";

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OPENWEATHER_API_BASE)
    }

    /// Client against a non-default endpoint. Tests point this at a
    /// mock server; the binary points it at the configured base URL.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        // Url::join treats a path without a trailing slash as a file
        // and would replace its last segment.
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(&base)?,
            api_key: api_key.to_string(),
        })
    }

    /// Current conditions at a coordinate.
    #[instrument(skip(self), level = "debug")]
    pub async fn current_weather(
        &self,
        coords: Coordinates,
    ) -> Result<CurrentResponse, WeatherError> {
        let url = self.coord_endpoint("weather", coords)?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// 3-hour-step, 5-day forecast at a coordinate.
    #[instrument(skip(self), level = "debug")]
    pub async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse, WeatherError> {
        let url = self.coord_endpoint("forecast", coords)?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Resolve a free-text place name to a coordinate.
    ///
    /// Blank input is rejected before any network call. An unknown
    /// place (HTTP 404, or a payload without a coordinate) is
    /// `LocationNotFound`, distinct from the acquisition failing.
    #[instrument(skip(self), level = "info")]
    pub async fn find_coordinates(&self, query: &str) -> Result<Coordinates, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let mut url = self.base_url.join("weather")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("units", "metric")
            .append_pair("appid", &self.api_key);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WeatherError::LocationNotFound(query.to_string()));
        }

        let body: SearchResponse = self.handle_response(response).await?;
        body.coord
            .ok_or_else(|| WeatherError::LocationNotFound(query.to_string()))
    }

    /// The acquisition: current conditions plus the summarized forecast
    /// as one unit. If either request fails, the whole call fails and
    /// the caller keeps whatever state it already had.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coords: Coordinates) -> Result<WeatherData, WeatherError> {
        let current = self.current_weather(coords).await?;
        let forecast = self.forecast(coords).await?;

        let samples: Vec<ForecastSample> =
            forecast.list.into_iter().map(ForecastSample::from).collect();
        let daily = summary::summarize(&samples)?;

        tracing::info!(days = daily.len(), "weather acquisition complete");
        Ok(WeatherData {
            current: CurrentConditions::from(current),
            daily,
        })
    }

    fn coord_endpoint(&self, path: &str, coords: Coordinates) -> Result<Url, WeatherError> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .append_pair("lat", &coords.latitude.to_string())
            .append_pair("lon", &coords.longitude.to_string())
            .append_pair("units", "metric")
            .append_pair("appid", &self.api_key);
        Ok(url)
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(e.to_string()))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(WeatherError::InvalidApiKey)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(WeatherError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KATHMANDU: Coordinates = Coordinates {
        latitude: 27.7172,
        longitude: 85.324,
    };

    fn current_body() -> serde_json::Value {
        json!({
            "coord": {"lon": 85.324, "lat": 27.7172},
            "weather": [{"main": "Clear", "icon": "01d"}],
            "main": {"temp": 24.3, "pressure": 1012, "humidity": 48},
            "wind": {"speed": 2.1},
            "sys": {"sunrise": 1700000000_i64, "sunset": 1700040000_i64},
            "name": "Kathmandu"
        })
    }

    #[tokio::test]
    async fn test_current_weather_sends_metric_units_and_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .and(query_param("lat", "27.7172"))
            .and(query_param("lon", "85.324"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("test-key", &server.uri()).unwrap();
        let response = client.current_weather(KATHMANDU).await.unwrap();

        assert_eq!(response.name, "Kathmandu");
        assert_eq!(response.main.humidity, 48);
    }

    #[tokio::test]
    async fn test_invalid_api_key_maps_to_dedicated_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("bad-key", &server.uri()).unwrap();
        let result = client.current_weather(KATHMANDU).await;

        assert!(matches!(result, Err(WeatherError::InvalidApiKey)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
        let result = client.current_weather(KATHMANDU).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_blank_search_query_makes_no_network_call() {
        let server = MockServer::start().await;

        let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
        let result = client.find_coordinates("   ").await;

        assert!(matches!(result, Err(WeatherError::EmptyQuery)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_place_is_location_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "atlantis"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "cod": "404", "message": "city not found"
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
        let result = client.find_coordinates("atlantis").await;

        match result {
            Err(WeatherError::LocationNotFound(q)) => assert_eq!(q, "atlantis"),
            other => panic!("expected LocationNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_trims_and_resolves_coordinate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "london"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "coord": {"lat": 51.5085, "lon": -0.1257},
                "name": "London"
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
        let coords = client.find_coordinates("  london  ").await.unwrap();

        assert_eq!(coords.latitude, 51.5085);
        assert_eq!(coords.longitude, -0.1257);
    }

    #[tokio::test]
    async fn test_response_without_coordinate_is_location_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "ambiguous"
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
        let result = client.find_coordinates("nowhere").await;

        assert!(matches!(result, Err(WeatherError::LocationNotFound(_))));
    }
}
