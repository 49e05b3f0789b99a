use std::time::Duration;

use reqwest::blocking::{Client, Request};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Error;
use crate::units::Units;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Where and how to ask for the current conditions.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    pub location: &'a str,
    pub units: Units,
    pub api_key: &'a str,
}

fn client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent("wxglyph")
        .timeout(timeout)
        .build()
}

fn current_weather_request(
    client: &Client,
    base_url: &str,
    query: &Query,
) -> Result<Request, reqwest::Error> {
    client
        .get(base_url)
        .query(&[
            ("q", query.location),
            ("units", query.units.as_query()),
            ("appid", query.api_key),
        ])
        .build()
}

/// Sends the request and parses the body. The request URL carries the API
/// key, so it is stripped from every error before it leaves this function.
fn execute(client: &Client, request: Request) -> Result<Value, Error> {
    let response = client
        .execute(request)
        .map_err(reqwest::Error::without_url)?;
    let status = response.status();
    let response = response
        .error_for_status()
        .map_err(reqwest::Error::without_url)
        .inspect_err(|e| debug!("Failed to fetch weather data: {}: {:?}", status, e))?;

    let body = response.bytes().map_err(reqwest::Error::without_url)?;
    debug!("Received {} bytes", body.len());
    parse_body(&body)
}

/// Invalid UTF-8 is rejected, not replaced.
fn parse_body(body: &[u8]) -> Result<Value, Error> {
    Ok(serde_json::from_slice(body)?)
}

/// One blocking GET; the body comes back as an untyped JSON tree.
pub fn current_weather(query: &Query, timeout: Duration) -> Result<Value, Error> {
    info!("Fetching weather data for location: {}", query.location);
    let client = client(timeout)?;
    let request = current_weather_request(&client, BASE_URL, query)?;
    execute(&client, request)
}
