//! Headline lookup against NewsAPI.

use serde::Deserialize;

use crate::Result;

const ENDPOINT: &str = "https://newsapi.org/v2/everything";

pub struct NewsClient {
    http: reqwest::Client,
    api_key: String,
    page_size: usize,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: SourceRef,
    #[serde(default, rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SourceRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
}

impl NewsClient {
    pub fn new(http: reqwest::Client, api_key: String, page_size: usize) -> Self {
        Self {
            http,
            api_key,
            page_size,
        }
    }

    /// Fetch up to `page_size` articles about `topic`.
    ///
    /// `Ok(None)` means the provider did not answer with status "ok"; the
    /// responder treats that the same as a missing credential.
    pub async fn headlines(&self, topic: &str) -> Result<Option<Vec<Article>>> {
        let body: NewsBody = self
            .http
            .get(ENDPOINT)
            .query(&[
                ("q", topic),
                ("apiKey", &self.api_key),
                ("pageSize", &self.page_size.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(accept(body, self.page_size))
    }
}

pub(crate) fn accept(body: NewsBody, page_size: usize) -> Option<Vec<Article>> {
    if body.status != "ok" {
        return None;
    }
    let mut articles = body.articles;
    articles.truncate(page_size);
    Some(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: serde_json::Value) -> NewsBody {
        serde_json::from_value(v).expect("valid fixture")
    }

    #[test]
    fn ok_status_yields_capped_articles() {
        let articles: Vec<_> = (1..=5)
            .map(|i| {
                json!({
                    "source": { "id": null, "name": format!("Outlet {i}") },
                    "title": format!("Story {i}"),
                    "publishedAt": "2026-08-20T07:15:00Z",
                    "url": format!("https://example.com/{i}")
                })
            })
            .collect();
        let parsed = accept(body(json!({ "status": "ok", "articles": articles })), 3).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].title, "Story 1");
        assert_eq!(parsed[0].source.name, "Outlet 1");
        assert_eq!(parsed[0].published_at, "2026-08-20T07:15:00Z");
    }

    #[test]
    fn error_status_is_a_degraded_answer_not_a_failure() {
        let parsed = accept(body(json!({ "status": "error", "code": "apiKeyInvalid" })), 3);
        assert!(parsed.is_none());
    }
}
