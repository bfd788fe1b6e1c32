pub mod weather_service;

pub use weather_service::{
    request_fetch, request_locate_and_fetch, request_search, WeatherError, WeatherServiceMessage,
};
