//! Encyclopedia responder (Wikipedia).

use tracing::warn;

use crate::{domain::Query, sources::wikipedia::Lookup};

use super::QueryEngine;

const TRIGGERS: &[&str] = &["what is", "who is", "tell me about", "wiki"];

const NOT_FOUND: &str = "❌ No Wikipedia page found. Try different keywords.";

pub(super) async fn respond(cx: &QueryEngine, query: &Query) -> String {
    let subject = extract_subject(&query.normalized);
    if subject.is_empty() {
        return NOT_FOUND.to_string();
    }

    match cx.wikipedia().lookup(&subject).await {
        Ok(Lookup::Page(page)) => format!(
            "📚 *Wikipedia Information*\n\n\
             *Topic:* {}\n\n\
             *Summary:*\n{}\n\n\
             *More Information:*\n\
             • URL: {}\n\
             • Categories: {}\n\n\
             For full details, visit the Wikipedia page.",
            page.title,
            page.summary,
            page.url,
            page.categories.join(", "),
        ),
        Ok(Lookup::Disambiguation(options)) => {
            format!("Multiple matches found:\n{}", options.join("\n"))
        }
        Ok(Lookup::NotFound) => NOT_FOUND.to_string(),
        Err(e) => {
            warn!(%subject, error = %e, "encyclopedia lookup failed");
            format!("⚠️ Error fetching information: {e}")
        }
    }
}

/// Strip the trigger phrases; whatever remains is the subject.
pub(super) fn extract_subject(normalized: &str) -> String {
    let mut subject = normalized.to_string();
    for trigger in TRIGGERS {
        subject = subject.replace(trigger, "");
    }
    subject.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_phrases_are_stripped() {
        assert_eq!(extract_subject("what is rust"), "rust");
        assert_eq!(extract_subject("who is ada lovelace"), "ada lovelace");
        assert_eq!(extract_subject("tell me about the moon"), "the moon");
        assert_eq!(extract_subject("wiki linux"), "linux");
    }

    #[test]
    fn bare_trigger_leaves_an_empty_subject() {
        assert_eq!(extract_subject("wiki"), "");
        assert_eq!(extract_subject("what is"), "");
    }
}
