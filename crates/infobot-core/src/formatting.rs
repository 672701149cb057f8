//! Reply formatting (bot Markdown dialect → Telegram HTML).
//!
//! Responders compose replies in the small Markdown dialect the bot has
//! always used: `*bold*`, `` `code` ``, `[text](url)`. Telegram HTML parse
//! mode is stricter than Markdown about unbalanced markers, so the adapter
//! converts once at the edge instead of every responder escaping by hand.

use regex::Regex;

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert the reply dialect to Telegram-compatible HTML.
///
/// Telegram supports only `<b>`, `<i>`, `<code>`, `<pre>`, `<a href>`.
pub fn to_telegram_html(input: &str) -> String {
    // Pull code spans out first so their contents are never styled.
    let (text, codes) = extract_code_spans(input);
    let mut text = escape_html(&text);

    // Line-oriented emphasis (avoids cross-line bold from unpaired markers).
    let mut lines = Vec::new();
    for line in text.split('\n') {
        lines.push(replace_delimited(line, '*', "<b>", "</b>"));
    }
    text = lines.join("\n");

    // Links: [text](url) -> <a href="url">text</a>. Conservative, no nesting.
    let link_re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex");
    text = link_re
        .replace_all(&text, r#"<a href="$2">$1</a>"#)
        .to_string();

    for (i, code) in codes.iter().enumerate() {
        let escaped = escape_html(code);
        text = text.replace(
            &format!("\0CODE{i}\0"),
            &format!("<code>{escaped}</code>"),
        );
    }

    text
}

fn extract_code_spans(input: &str) -> (String, Vec<String>) {
    let mut codes = Vec::new();
    let mut out = String::new();
    let mut rest = input;

    while let Some(start) = rest.find('`') {
        let Some(len) = rest[start + 1..].find('`') else {
            break; // unpaired backtick, leave as-is
        };
        out.push_str(&rest[..start]);
        out.push_str(&format!("\0CODE{}\0", codes.len()));
        codes.push(rest[start + 1..start + 1 + len].to_string());
        rest = &rest[start + len + 2..];
    }
    out.push_str(rest);

    (out, codes)
}

fn replace_delimited(line: &str, delim: char, open: &str, close: &str) -> String {
    let mut parts = line.split(delim);
    let Some(first) = parts.next() else {
        return line.to_string();
    };

    let segments: Vec<&str> = parts.collect();
    // Unpaired trailing marker: keep the line untouched rather than emitting
    // a dangling tag Telegram would reject.
    if segments.len() % 2 != 0 {
        return line.to_string();
    }

    let mut out = String::from(first);
    for pair in segments.chunks(2) {
        out.push_str(open);
        out.push_str(pair[0]);
        out.push_str(close);
        if let Some(after) = pair.get(1) {
            out.push_str(after);
        }
    }
    out
}
