//! Small-talk responder and the guidance fallback.

use crate::domain::Query;

/// Canned (phrase, reply) pairs, checked in order; first match wins.
const CANNED: &[(&str, &str)] = &[
    ("hello", "👋 Hello! How can I assist you today?"),
    ("hi", "👋 Hi there! What would you like to know?"),
    ("how are you", "🤖 I'm functioning optimally! Ready to help you."),
    ("thank you", "You're welcome! Feel free to ask anything else."),
    ("bye", "👋 Goodbye! Come back anytime you need information."),
    ("help", "Type /help to see all available commands and features!"),
];

pub(super) fn respond(query: &Query) -> String {
    for (phrase, reply) in CANNED {
        if query.normalized.contains(phrase) {
            return reply.to_string();
        }
    }
    guidance(query)
}

fn guidance(query: &Query) -> String {
    format!(
        "💭 You asked: *\"{}\"*\n\n\
         I understand you're looking for information. Here's what I can help with:\n\n\
         • Ask me *\"what is [topic]\"* for encyclopedia summaries\n\
         • Ask *\"weather in [city]\"* for the current forecast\n\
         • Ask *\"news about [topic]\"* for the latest headlines\n\
         • Type *mathematical expressions* for calculations\n\
         • Use commands like /wiki, /weather, /news for specific lookups\n\n\
         Or simply chat with me about anything! 🤖",
        query.raw.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_gets_the_canned_reply() {
        let reply = respond(&Query::new("hello there"));
        assert_eq!(reply, "👋 Hello! How can I assist you today?");
    }

    #[test]
    fn first_matching_phrase_wins() {
        // "hello how are you" contains both "hello" and "how are you";
        // list order decides.
        let reply = respond(&Query::new("hello how are you"));
        assert_eq!(reply, "👋 Hello! How can I assist you today?");
    }

    #[test]
    fn unmatched_message_is_echoed_in_the_guidance_template() {
        let reply = respond(&Query::new("Can you juggle?"));
        assert!(reply.contains("You asked: *\"Can you juggle?\"*"), "got: {reply}");
        assert!(reply.contains("weather in [city]"));
    }
}
