//! Intent responders and the engine that dispatches to them.
//!
//! Each responder turns a classified query into the final reply text. Every
//! failure is converted to a user-facing string right here; nothing below
//! this layer surfaces an error to the transport adapter.

mod calc;
mod datetime;
mod encyclopedia;
mod general;
mod news;
mod weather;

use std::sync::Arc;

use tracing::debug;

use crate::{
    config::Config,
    domain::Query,
    router::{classify, Intent},
    sources::{news::NewsClient, weather::WeatherClient, wikipedia::WikipediaClient, Provider},
    Result,
};

/// Last-resort reply. Guarantees the non-empty-reply invariant even if a
/// responder produces nothing.
pub const FALLBACK_REPLY: &str =
    "🤖 Sorry, I could not come up with an answer. Type /help to see what I can do.";

/// Stateless query engine: classifies a message and runs the matching
/// responder. Cheap to share behind an `Arc`.
pub struct QueryEngine {
    cfg: Arc<Config>,
    http: reqwest::Client,
}

impl QueryEngine {
    pub fn new(cfg: Arc<Config>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .user_agent(concat!("infobot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { cfg, http })
    }

    /// Answer one free-text message. Always returns a non-empty reply.
    pub async fn answer(&self, raw: &str) -> String {
        let query = Query::new(raw);
        let intent = classify(&query.normalized);
        debug!(?intent, "classified query");

        let reply = match intent {
            Intent::EncyclopediaLookup => encyclopedia::respond(self, &query).await,
            Intent::Weather => weather::respond(self, &query).await,
            Intent::Arithmetic => calc::respond(&query),
            Intent::DateTime => datetime::respond(),
            Intent::News => news::respond(self, &query).await,
            Intent::General => general::respond(&query),
        };

        if reply.trim().is_empty() {
            return FALLBACK_REPLY.to_string();
        }
        reply
    }

    fn wikipedia(&self) -> WikipediaClient {
        WikipediaClient::new(self.http.clone(), &self.cfg)
    }

    /// Credential presence is checked at call time, not cached at startup.
    fn weather(&self) -> Provider<WeatherClient> {
        match &self.cfg.openweather_api_key {
            Some(key) => Provider::Configured(WeatherClient::new(self.http.clone(), key.clone())),
            None => Provider::Unconfigured,
        }
    }

    fn news(&self) -> Provider<NewsClient> {
        match &self.cfg.news_api_key {
            Some(key) => Provider::Configured(NewsClient::new(
                self.http.clone(),
                key.clone(),
                self.cfg.news_page_size,
            )),
            None => Provider::Unconfigured,
        }
    }

    fn cfg(&self) -> &Config {
        &self.cfg
    }
}

/// Capitalize the first letter of each word, display-style.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> QueryEngine {
        QueryEngine::new(Arc::new(Config::default())).unwrap()
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("oslo"), "Oslo");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn answer_is_never_empty() {
        let engine = engine();
        for text in ["", "   ", "hello", "2 + 2", "what time is it"] {
            let reply = engine.answer(text).await;
            assert!(!reply.trim().is_empty(), "empty reply for {text:?}");
        }
    }

    #[tokio::test]
    async fn unconfigured_weather_and_news_degrade_without_network() {
        // No credentials in the default config, so neither path touches the
        // network; both must name the extracted city/topic.
        let engine = engine();

        let weather = engine.answer("weather in Oslo").await;
        assert!(weather.contains("Oslo"), "got: {weather}");
        assert!(weather.contains("OPENWEATHER_API_KEY"));

        let news = engine.answer("news about rust").await;
        assert!(news.contains("Rust"), "got: {news}");
        assert!(news.contains("NEWS_API_KEY"));
    }

    #[tokio::test]
    async fn greeting_routes_to_canned_reply() {
        let engine = engine();
        let reply = engine.answer("hello there").await;
        assert_eq!(reply, "👋 Hello! How can I assist you today?");
    }

    #[tokio::test]
    async fn arithmetic_routes_to_calculator() {
        let engine = engine();
        let reply = engine.answer("2 + 2").await;
        assert!(reply.contains("`4`"), "got: {reply}");
    }
}
