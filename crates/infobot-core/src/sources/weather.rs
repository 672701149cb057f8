//! Current-conditions lookup against OpenWeatherMap.

use serde::Deserialize;

use crate::Result;

const ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature_c: f64,
    pub humidity: u64,
    pub wind_speed: f64,
}

pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// Fetch current conditions for `city` (metric units).
    ///
    /// `Ok(None)` means the provider answered with a non-success status
    /// (unknown city, bad key); the responder treats that the same as a
    /// missing credential. Transport and parse failures are `Err`.
    pub async fn current(&self, city: &str) -> Result<Option<WeatherReport>> {
        let resp = self
            .http
            .get(ENDPOINT)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        let body: WeatherBody = resp.json().await?;
        Ok(Some(body.into_report()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherBody {
    #[serde(default)]
    weather: Vec<ConditionBody>,
    main: MainBody,
    wind: WindBody,
}

#[derive(Debug, Deserialize)]
struct ConditionBody {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBody {
    temp: f64,
    humidity: u64,
}

#[derive(Debug, Deserialize)]
struct WindBody {
    speed: f64,
}

impl WeatherBody {
    pub(crate) fn into_report(self) -> WeatherReport {
        WeatherReport {
            description: self
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .unwrap_or_else(|| "unknown".to_string()),
            temperature_c: self.main.temp,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_payload_parses_into_report() {
        let body: WeatherBody = serde_json::from_value(json!({
            "weather": [ { "id": 803, "main": "Clouds", "description": "broken clouds" } ],
            "main": { "temp": 14.2, "feels_like": 13.6, "humidity": 81 },
            "wind": { "speed": 4.6, "deg": 220 }
        }))
        .unwrap();

        assert_eq!(
            body.into_report(),
            WeatherReport {
                description: "broken clouds".to_string(),
                temperature_c: 14.2,
                humidity: 81,
                wind_speed: 4.6,
            }
        );
    }

    #[test]
    fn empty_condition_list_reads_as_unknown() {
        let body: WeatherBody = serde_json::from_value(json!({
            "main": { "temp": 1.0, "humidity": 50 },
            "wind": { "speed": 0.5 }
        }))
        .unwrap();
        assert_eq!(body.into_report().description, "unknown");
    }
}
