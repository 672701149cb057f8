//! News responder.

use tracing::warn;

use crate::{domain::Query, sources::news::Article, sources::Provider};

use super::{title_case, QueryEngine};

pub(super) async fn respond(cx: &QueryEngine, query: &Query) -> String {
    let topic = extract_topic(&query.normalized, &cx.cfg().default_news_topic);

    let client = match cx.news() {
        Provider::Configured(client) => client,
        Provider::Unconfigured => return fallback(&topic),
    };

    match client.headlines(&topic).await {
        Ok(articles) => render(&topic, articles),
        Err(e) => {
            warn!(%topic, error = %e, "news lookup failed");
            format!("⚠️ Error fetching news: {e}")
        }
    }
}

/// A provider answer that is not "ok", or that carries no articles at all,
/// reads as the degraded fallback rather than an empty headline list.
fn render(topic: &str, articles: Option<Vec<Article>>) -> String {
    match articles {
        Some(articles) if !articles.is_empty() => format_headlines(topic, &articles),
        _ => fallback(topic),
    }
}

/// Topic is the text minus the "news"/"about" keywords, or the configured
/// default when nothing remains.
pub(super) fn extract_topic(normalized: &str, default_topic: &str) -> String {
    let topic = normalized
        .replace("news", "")
        .replace("about", "")
        .trim()
        .to_string();
    if topic.is_empty() {
        default_topic.to_string()
    } else {
        topic
    }
}

fn format_headlines(topic: &str, articles: &[Article]) -> String {
    let mut out = format!("📰 *Latest News about {}*\n\n", title_case(topic));
    for (i, article) in articles.iter().enumerate() {
        let date: String = article.published_at.chars().take(10).collect();
        out.push_str(&format!(
            "*{}. {}*\nSource: {}\nPublished: {}\n[Read more]({})\n\n",
            i + 1,
            article.title,
            article.source.name,
            date,
            article.url,
        ));
    }
    out
}

fn fallback(topic: &str) -> String {
    format!(
        "📰 News about *{}* would be available with NewsAPI setup.\n\n\
         Set NEWS_API_KEY in your .env file.",
        title_case(topic)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::news::SourceRef;

    #[test]
    fn topic_drops_news_and_about_keywords() {
        assert_eq!(extract_topic("news about climate", "technology"), "climate");
        assert_eq!(extract_topic("rust news", "technology"), "rust");
        assert_eq!(extract_topic("news", "technology"), "technology");
    }

    #[test]
    fn headlines_are_numbered_with_date_part_only() {
        let articles = vec![
            Article {
                title: "Borrow checker explained".to_string(),
                source: SourceRef {
                    name: "The Daily Crab".to_string(),
                },
                published_at: "2026-08-20T07:15:00Z".to_string(),
                url: "https://example.com/1".to_string(),
            },
            Article {
                title: "Async without fear".to_string(),
                source: SourceRef {
                    name: "Rust Weekly".to_string(),
                },
                published_at: "2026-08-19T18:00:00Z".to_string(),
                url: "https://example.com/2".to_string(),
            },
        ];

        let text = format_headlines("rust", &articles);
        assert!(text.contains("*Latest News about Rust*"));
        assert!(text.contains("*1. Borrow checker explained*"));
        assert!(text.contains("Published: 2026-08-20\n"));
        assert!(text.contains("*2. Async without fear*"));
        assert!(text.contains("[Read more](https://example.com/2)"));
    }

    #[test]
    fn ok_answer_with_no_articles_degrades_to_fallback() {
        let text = render("rust", Some(Vec::new()));
        assert!(text.contains("NEWS_API_KEY"), "got: {text}");
        assert!(text.contains("*Rust*"));

        let text = render("rust", None);
        assert!(text.contains("NEWS_API_KEY"), "got: {text}");
    }

    #[test]
    fn fallback_names_the_topic() {
        let text = fallback("climate");
        assert!(text.contains("*Climate*"), "got: {text}");
        assert!(text.contains("NEWS_API_KEY"));
    }
}
