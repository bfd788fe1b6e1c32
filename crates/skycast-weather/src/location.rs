//! Machine location via public-IP lookup.
//!
//! A terminal process has no geolocation permission prompt to lean on;
//! the closest equivalent is where the machine's public IP appears to
//! be. ip-api.com is keyless and returns a city-level coordinate.
//! Lookup failure is not surfaced to the user: the geolocation-driven
//! fetch simply does not happen, and other coordinate sources still do.

use serde::Deserialize;
use thiserror::Error;

use crate::types::Coordinates;

const IP_API_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location lookup failed: {0}")]
    Lookup(#[from] reqwest::Error),

    #[error("Location service unavailable")]
    ServiceUnavailable,
}

/// Where the machine appears to be.
#[derive(Debug, Clone)]
pub struct Location {
    pub coordinates: Coordinates,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
}

/// Resolve the machine's approximate location from its public IP.
pub async fn current_location() -> Result<Location, LocationError> {
    lookup(IP_API_URL).await
}

async fn lookup(url: &str) -> Result<Location, LocationError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "IP location lookup rejected");
        return Err(LocationError::ServiceUnavailable);
    }

    let body: IpApiResponse = response.json().await?;
    if body.status != "success" {
        tracing::debug!(status = %body.status, "IP location lookup unsuccessful");
        return Err(LocationError::ServiceUnavailable);
    }

    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Location {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
            city: body.city,
        }),
        _ => Err(LocationError::ServiceUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_successful_lookup() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "lat": 52.52,
                "lon": 13.405,
                "city": "Berlin"
            })))
            .mount(&server)
            .await;

        let location = lookup(&format!("{}/json", server.uri())).await.unwrap();
        assert_eq!(location.coordinates.latitude, 52.52);
        assert_eq!(location.city.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn test_failure_status_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "fail",
                "message": "private range"
            })))
            .mount(&server)
            .await;

        let result = lookup(&format!("{}/json", server.uri())).await;
        assert!(matches!(result, Err(LocationError::ServiceUnavailable)));
    }

    #[tokio::test]
    async fn test_missing_coordinate_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "city": "Berlin"
            })))
            .mount(&server)
            .await;

        let result = lookup(&format!("{}/json", server.uri())).await;
        assert!(matches!(result, Err(LocationError::ServiceUnavailable)));
    }
}
