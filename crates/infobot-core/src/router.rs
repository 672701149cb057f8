//! Keyword-based query classification.
//!
//! Classification is first-match-wins over an ordered rule list. The order is
//! load-bearing: categories overlap (a message with both "weather" and "day"
//! must go to the weather responder), so rules are checked top to bottom and
//! the first satisfied rule decides the intent.

/// The classified purpose of an inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    EncyclopediaLookup,
    Weather,
    Arithmetic,
    DateTime,
    News,
    General,
}

/// Ordered trigger rules. A rule fires when any of its substrings occurs in
/// the normalized query text.
const RULES: &[(&[&str], Intent)] = &[
    (
        &["what is", "who is", "tell me about", "wiki"],
        Intent::EncyclopediaLookup,
    ),
    (&["weather", "temperature", "forecast"], Intent::Weather),
    (&["+", "-", "*", "/", "calculate", "="], Intent::Arithmetic),
    (&["time", "date", "day", "year"], Intent::DateTime),
    (&["news"], Intent::News),
];

/// Map normalized text to exactly one intent. Pure and total: every input
/// yields an intent, never an error.
pub fn classify(normalized: &str) -> Intent {
    for (triggers, intent) in RULES {
        if triggers.iter().any(|t| normalized.contains(t)) {
            return *intent;
        }
    }
    Intent::General
}
