/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a sent message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// One inbound free-text query. Lives for the duration of a single request.
#[derive(Clone, Debug)]
pub struct Query {
    pub raw: String,
    /// Lowercased and trimmed form used for classification and keyword scans.
    pub normalized: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: raw.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_normalization_lowercases_and_trims() {
        let q = Query::new("  What IS Rust  ");
        assert_eq!(q.raw, "  What IS Rust  ");
        assert_eq!(q.normalized, "what is rust");
    }
}
