//! Weather responder.

use tracing::warn;

use crate::{domain::Query, sources::Provider};

use super::{title_case, QueryEngine};

pub(super) async fn respond(cx: &QueryEngine, query: &Query) -> String {
    let city = extract_city(&query.normalized)
        .unwrap_or(&cx.cfg().default_city)
        .to_string();

    let client = match cx.weather() {
        Provider::Configured(client) => client,
        Provider::Unconfigured => return fallback(&city),
    };

    match client.current(&city).await {
        Ok(Some(report)) => format!(
            "🌤 *Weather in {}*\n\n\
             • Temperature: {}°C\n\
             • Condition: {}\n\
             • Humidity: {}%\n\
             • Wind Speed: {} m/s",
            title_case(&city),
            report.temperature_c,
            report.description,
            report.humidity,
            report.wind_speed,
        ),
        // Provider refused (unknown city, bad key): degraded, not an error.
        Ok(None) => fallback(&city),
        Err(e) => {
            warn!(%city, error = %e, "weather lookup failed");
            format!("⚠️ Error fetching weather: {e}")
        }
    }
}

/// City is the token right after "in"; first occurrence wins.
pub(super) fn extract_city(normalized: &str) -> Option<&str> {
    let mut words = normalized.split_whitespace();
    while let Some(word) = words.next() {
        if word == "in" {
            return words.next();
        }
    }
    None
}

fn fallback(city: &str) -> String {
    format!(
        "🌤 Weather information for *{}* would be available with proper API setup.\n\n\
         Set OPENWEATHER_API_KEY in your .env file.",
        title_case(city)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_the_token_after_in() {
        assert_eq!(extract_city("weather in paris"), Some("paris"));
        assert_eq!(extract_city("what's the temperature in oslo today"), Some("oslo"));
        assert_eq!(extract_city("in berlin"), Some("berlin"));
    }

    #[test]
    fn no_in_token_means_no_city() {
        assert_eq!(extract_city("weather"), None);
        assert_eq!(extract_city("weather inside"), None);
        assert_eq!(extract_city("weather in"), None);
    }

    #[test]
    fn fallback_names_the_city() {
        let text = fallback("oslo");
        assert!(text.contains("*Oslo*"), "got: {text}");
        assert!(text.contains("OPENWEATHER_API_KEY"));
    }
}
