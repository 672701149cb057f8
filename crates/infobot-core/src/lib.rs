//! Core domain + application logic for infobot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind a
//! messaging port (trait) implemented in the adapter crate; the external
//! information sources (Wikipedia, OpenWeatherMap, NewsAPI) live behind thin
//! HTTP clients in `sources`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod responders;
pub mod router;
pub mod sources;
pub mod store;

pub use errors::{Error, Result};
