use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration, resolved from the process environment (plus an
/// optional `.env` file that never overrides existing variables).
///
/// The weather and news credentials are optional on purpose: a missing key is
/// a degraded-success path (the responder answers with setup guidance), not
/// an error. Wikipedia needs no credential.
#[derive(Clone, Debug)]
pub struct Config {
    // Core
    pub telegram_bot_token: String,
    /// Empty list means the bot is public; non-empty restricts access.
    pub telegram_allowed_users: Vec<i64>,

    // External sources
    pub openweather_api_key: Option<String>,
    pub news_api_key: Option<String>,
    pub wikipedia_language: String,

    // Defaults used when a query names no city/topic
    pub default_city: String,
    pub default_news_topic: String,

    // Response caps. Observed defaults; no deeper rationale, kept tunable.
    pub summary_sentences: u32,
    pub category_limit: usize,
    pub disambiguation_limit: usize,
    pub news_page_size: usize,

    // Every outbound call gets one attempt with this deadline. No retries.
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let telegram_allowed_users = parse_csv_i64(env_str("TELEGRAM_ALLOWED_USERS"));

        let openweather_api_key = env_str("OPENWEATHER_API_KEY").and_then(non_empty);
        let news_api_key = env_str("NEWS_API_KEY").and_then(non_empty);
        let wikipedia_language =
            env_str("WIKIPEDIA_LANGUAGE").and_then(non_empty).unwrap_or_else(|| "en".to_string());

        let default_city =
            env_str("DEFAULT_CITY").and_then(non_empty).unwrap_or_else(|| "London".to_string());
        let default_news_topic = env_str("DEFAULT_NEWS_TOPIC")
            .and_then(non_empty)
            .unwrap_or_else(|| "technology".to_string());

        let summary_sentences = env_u32("SUMMARY_SENTENCES").unwrap_or(3).clamp(1, 10);
        let category_limit = env_usize("CATEGORY_LIMIT").unwrap_or(3);
        let disambiguation_limit = env_usize("DISAMBIGUATION_LIMIT").unwrap_or(5);
        let news_page_size = env_usize("NEWS_PAGE_SIZE").unwrap_or(3).clamp(1, 10);

        let request_timeout =
            Duration::from_millis(env_u64("REQUEST_TIMEOUT_MS").unwrap_or(10_000));

        Ok(Self {
            telegram_bot_token,
            telegram_allowed_users,
            openweather_api_key,
            news_api_key,
            wikipedia_language,
            default_city,
            default_news_topic,
            summary_sentences,
            category_limit,
            disambiguation_limit,
            news_page_size,
            request_timeout,
        })
    }
}

impl Default for Config {
    /// Baseline config with no token and no credentials. Used by tests; the
    /// binary always goes through `load()`.
    fn default() -> Self {
        Self {
            telegram_bot_token: String::new(),
            telegram_allowed_users: Vec::new(),
            openweather_api_key: None,
            news_api_key: None,
            wikipedia_language: "en".to_string(),
            default_city: "London".to_string(),
            default_news_topic: "technology".to_string(),
            summary_sentences: 3,
            category_limit: 3,
            disambiguation_limit: 5,
            news_page_size: 3,
            request_timeout: Duration::from_secs(10),
        }
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env_str(key).and_then(|s| s.trim().parse::<u32>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn parse_csv_i64(v: Option<String>) -> Vec<i64> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<i64>().ok())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Authorization check used by the transport adapter. An empty allow-list
/// leaves the bot public, matching how it is usually deployed.
pub fn is_authorized(user_id: Option<crate::domain::UserId>, allowed_users: &[i64]) -> bool {
    if allowed_users.is_empty() {
        return true;
    }
    let Some(user_id) = user_id else {
        return false;
    };
    allowed_users.contains(&user_id.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[test]
    fn csv_user_ids_skip_garbage() {
        let ids = parse_csv_i64(Some(" 1, 2,x, 3 ,".to_string()));
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_allowlist_is_public() {
        assert!(is_authorized(Some(UserId(42)), &[]));
        assert!(is_authorized(None, &[]));
    }

    #[test]
    fn non_empty_allowlist_restricts() {
        assert!(is_authorized(Some(UserId(1)), &[1, 2]));
        assert!(!is_authorized(Some(UserId(3)), &[1, 2]));
        assert!(!is_authorized(None, &[1, 2]));
    }
}
