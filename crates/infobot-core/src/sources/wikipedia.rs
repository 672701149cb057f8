//! Wikipedia lookups via the MediaWiki action API.
//!
//! One request fetches everything the responder needs: plain-text intro
//! extract, visible categories, the canonical URL and the page props that
//! mark disambiguation pages (whose outgoing links double as candidates).

use std::collections::HashMap;

use serde::Deserialize;

use crate::{config::Config, errors::Error, Result};

/// Outcome of a subject lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Page(ArticlePage),
    /// The subject matches several articles; candidate titles, capped.
    Disambiguation(Vec<String>),
    NotFound,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArticlePage {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub categories: Vec<String>,
}

pub struct WikipediaClient {
    http: reqwest::Client,
    language: String,
    summary_sentences: u32,
    category_limit: usize,
    disambiguation_limit: usize,
}

impl WikipediaClient {
    pub fn new(http: reqwest::Client, cfg: &Config) -> Self {
        Self {
            http,
            language: cfg.wikipedia_language.clone(),
            summary_sentences: cfg.summary_sentences,
            category_limit: cfg.category_limit,
            disambiguation_limit: cfg.disambiguation_limit,
        }
    }

    pub async fn lookup(&self, subject: &str) -> Result<Lookup> {
        let endpoint = format!("https://{}.wikipedia.org/w/api.php", self.language);
        let body: ApiResponse = self
            .http
            .get(&endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("titles", subject),
                ("prop", "extracts|categories|info|pageprops|links"),
                ("explaintext", "1"),
                ("exintro", "1"),
                ("exsentences", &self.summary_sentences.to_string()),
                ("cllimit", &self.category_limit.to_string()),
                ("clshow", "!hidden"),
                ("inprop", "url"),
                ("pllimit", &self.disambiguation_limit.to_string()),
                ("plnamespace", "0"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        interpret(body, self.category_limit, self.disambiguation_limit)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<PageBody>,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    fullurl: Option<String>,
    #[serde(default)]
    categories: Vec<TitleEntry>,
    #[serde(default)]
    links: Vec<TitleEntry>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TitleEntry {
    title: String,
}

pub(crate) fn interpret(
    body: ApiResponse,
    category_limit: usize,
    disambiguation_limit: usize,
) -> Result<Lookup> {
    let Some(query) = body.query else {
        return Err(Error::Upstream(
            "wikipedia response missing query block".to_string(),
        ));
    };
    let Some(page) = query.pages.into_iter().next() else {
        return Ok(Lookup::NotFound);
    };

    if page.missing || page.invalid {
        return Ok(Lookup::NotFound);
    }

    if page.pageprops.contains_key("disambiguation") {
        let mut options: Vec<String> = page.links.into_iter().map(|l| l.title).collect();
        options.truncate(disambiguation_limit);
        return Ok(Lookup::Disambiguation(options));
    }

    let summary = page.extract.unwrap_or_default();
    if summary.trim().is_empty() {
        return Ok(Lookup::NotFound);
    }

    let url = page.fullurl.unwrap_or_default();
    let mut categories: Vec<String> = page
        .categories
        .into_iter()
        .map(|c| {
            c.title
                .strip_prefix("Category:")
                .map(str::to_string)
                .unwrap_or(c.title)
        })
        .collect();
    categories.truncate(category_limit);

    Ok(Lookup::Page(ArticlePage {
        title: page.title,
        summary,
        url,
        categories,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(v: serde_json::Value) -> ApiResponse {
        serde_json::from_value(v).expect("valid fixture")
    }

    #[test]
    fn missing_page_maps_to_not_found() {
        let body = response(json!({
            "query": { "pages": [ { "title": "Zzzzqq", "missing": true } ] }
        }));
        assert_eq!(interpret(body, 3, 5).unwrap(), Lookup::NotFound);
    }

    #[test]
    fn disambiguation_candidates_are_capped() {
        let links: Vec<_> = (1..=8)
            .map(|i| json!({ "ns": 0, "title": format!("Mercury {i}") }))
            .collect();
        let body = response(json!({
            "query": { "pages": [ {
                "title": "Mercury",
                "pageprops": { "disambiguation": "" },
                "links": links
            } ] }
        }));

        let Lookup::Disambiguation(options) = interpret(body, 3, 5).unwrap() else {
            panic!("expected disambiguation");
        };
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], "Mercury 1");
    }

    #[test]
    fn article_page_strips_category_prefix_and_caps() {
        let body = response(json!({
            "query": { "pages": [ {
                "title": "Rust (programming language)",
                "extract": "Rust is a systems language. It is fast. It is safe.",
                "fullurl": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                "categories": [
                    { "ns": 14, "title": "Category:Programming languages" },
                    { "ns": 14, "title": "Category:Systems programming" },
                    { "ns": 14, "title": "Category:Rust software" },
                    { "ns": 14, "title": "Category:2010 software" }
                ]
            } ] }
        }));

        let Lookup::Page(page) = interpret(body, 3, 5).unwrap() else {
            panic!("expected page");
        };
        assert_eq!(page.title, "Rust (programming language)");
        assert_eq!(
            page.categories,
            vec!["Programming languages", "Systems programming", "Rust software"]
        );
    }

    #[test]
    fn page_without_extract_is_not_found() {
        let body = response(json!({
            "query": { "pages": [ { "title": "Stub", "fullurl": "https://x" } ] }
        }));
        assert_eq!(interpret(body, 3, 5).unwrap(), Lookup::NotFound);
    }

    #[test]
    fn response_without_query_block_is_an_upstream_error() {
        let body = response(json!({}));
        assert!(interpret(body, 3, 5).is_err());
    }
}
