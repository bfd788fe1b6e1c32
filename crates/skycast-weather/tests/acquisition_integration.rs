//! Integration tests for the two-request weather acquisition.
//!
//! Both endpoints are served by a wiremock server; the tests exercise
//! the all-or-nothing contract of `OpenWeatherClient::fetch` and the
//! summarizer running over a realistic forecast payload.

use chrono::{Local, TimeZone};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_weather::{Coordinates, OpenWeatherClient, WeatherError};

const BERLIN: Coordinates = Coordinates {
    latitude: 52.52,
    longitude: 13.405,
};

fn current_body() -> serde_json::Value {
    json!({
        "coord": {"lon": 13.405, "lat": 52.52},
        "weather": [{"main": "Clouds", "icon": "04d"}],
        "main": {"temp": 11.2, "pressure": 1018, "humidity": 71},
        "wind": {"speed": 4.6},
        "sys": {"sunrise": 1700000000_i64, "sunset": 1700035000_i64},
        "name": "Berlin"
    })
}

fn forecast_entry(day: u32, hour: u32, temp_max: f64, temp_min: f64) -> serde_json::Value {
    let dt = Local
        .with_ymd_and_hms(2026, 4, day, hour, 0, 0)
        .single()
        .unwrap()
        .timestamp();
    json!({
        "dt": dt,
        "main": {"temp_max": temp_max, "temp_min": temp_min},
        "weather": [{"main": "Clouds", "icon": "04d"}]
    })
}

/// Two days of 3-hourly samples plus a third day with a lone night
/// sample, as the provider's 5-day window typically delivers.
fn forecast_body() -> serde_json::Value {
    let mut list = Vec::new();
    for hour in [0, 3, 6, 9, 12, 15, 18, 21] {
        list.push(forecast_entry(1, hour, 14.0 + hour as f64 / 3.0, 6.0));
    }
    for hour in [0, 3, 6, 9, 12, 15, 18, 21] {
        list.push(forecast_entry(2, hour, 12.0, 4.0 + hour as f64 / 3.0));
    }
    list.push(forecast_entry(3, 0, 9.0, 2.0));
    json!({"list": list})
}

async fn mount_current(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "metric"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "metric"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_merges_current_and_summarized_forecast() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
    let data = client.fetch(BERLIN).await.unwrap();

    assert_eq!(data.current.location_name, "Berlin");
    assert_eq!(data.current.humidity, 71);
    assert_eq!(data.current.conditions[0].icon, "04d");

    // Three distinct calendar dates in the payload.
    assert_eq!(data.daily.len(), 3);

    // Day 1: day bucket hours {6..=18}, max of 14 + h/3 peaks at h=18.
    assert_eq!(data.daily[0].day_temp, 20.0);
    // Day 1 night min is the constant 6.0.
    assert_eq!(data.daily[0].night_temp, 6.0);
    // Day 2 night bucket {0, 3, 21}: min of 4 + h/3 is at h=0.
    assert_eq!(data.daily[1].night_temp, 4.0);
    // Day 3 has a single night sample; day temp falls back to it.
    assert_eq!(data.daily[2].day_temp, 9.0);
    assert_eq!(data.daily[2].night_temp, 2.0);
}

#[tokio::test]
async fn test_fetch_fails_as_a_unit_when_forecast_fails() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount_forecast(&server, ResponseTemplate::new(500).set_body_string("oops")).await;

    let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
    let result = client.fetch(BERLIN).await;

    assert!(matches!(
        result,
        Err(WeatherError::Api { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_fetch_fails_as_a_unit_when_current_fails() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(503).set_body_string("down")).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
    let result = client.fetch(BERLIN).await;

    assert!(matches!(
        result,
        Err(WeatherError::Api { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_fetch_rejects_malformed_forecast_payload() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(current_body())).await;
    // Entries missing `main.temp_min` are a data-shape error.
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "list": [{"dt": 1700000000_i64, "main": {"temp_max": 10.0}, "weather": []}]
        })),
    )
    .await;

    let client = OpenWeatherClient::with_base_url("key", &server.uri()).unwrap();
    let result = client.fetch(BERLIN).await;

    assert!(matches!(result, Err(WeatherError::Parse(_))));
}
