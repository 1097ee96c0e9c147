//! Classifier operations over the compiled pattern table.

use std::collections::HashMap;

use regex::NoExpand;
use serde::{Deserialize, Serialize};

use super::patterns::compiled;

/// Default replacement used by [`replace_default`]
pub const DEFAULT_REPLACEMENT: &str = "[censored]";

/// Default opening markup used by [`wrap_default`]
pub const DEFAULT_WRAP_PREFIX: &str = r#"<span style="color:red;">"#;

/// Default closing markup used by [`wrap_default`]
pub const DEFAULT_WRAP_SUFFIX: &str = "</span>";

/// Tokens shorter than this (in characters) are never wrapped.
pub const MIN_WRAP_LEN: usize = 3;

/// A matched span in the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfanityMatch {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
    /// Matched text
    pub text: String,
}

/// Returns true if any substring of `text` matches the pattern table.
pub fn test(text: &str) -> bool {
    let flagged = compiled().is_some_and(|regex| regex.is_match(text));
    if flagged {
        tracing::debug!(len = text.len(), "content flagged by pattern table");
    }
    flagged
}

/// All spans [`replace`] would substitute, leftmost-first.
pub fn find_matches(text: &str) -> Vec<ProfanityMatch> {
    let Some(regex) = compiled() else {
        return Vec::new();
    };

    regex
        .find_iter(text)
        .map(|m| ProfanityMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
        .collect()
}

/// Replace every matched span with `replacement`.
///
/// `replacement` is inserted verbatim; `$1`-style group references are not
/// expanded.
pub fn replace(text: &str, replacement: &str) -> String {
    match compiled() {
        Some(regex) => regex.replace_all(text, NoExpand(replacement)).into_owned(),
        None => text.to_string(),
    }
}

/// [`replace`] with [`DEFAULT_REPLACEMENT`].
pub fn replace_default(text: &str) -> String {
    replace(text, DEFAULT_REPLACEMENT)
}

/// Surround flagged words with `prefix` and `suffix`.
///
/// The text is split into maximal runs of word characters (Latin and
/// Cyrillic letters, ASCII digits, hyphen). A token of at least
/// [`MIN_WRAP_LEN`] characters that matches the table on its own is wrapped
/// at every position where it occurs as a whole token. Identical text
/// inside a longer token is left alone unless that token is flagged too.
pub fn wrap(text: &str, prefix: &str, suffix: &str) -> String {
    let Some(regex) = compiled() else {
        return text.to_string();
    };

    let mut verdicts: HashMap<&str, bool> = HashMap::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut wrapped = 0usize;

    for (start, end) in token_spans(text) {
        let token = &text[start..end];
        let flagged = *verdicts
            .entry(token)
            .or_insert_with(|| token.chars().count() >= MIN_WRAP_LEN && regex.is_match(token));

        if flagged {
            out.push_str(&text[last..start]);
            out.push_str(prefix);
            out.push_str(token);
            out.push_str(suffix);
            last = end;
            wrapped += 1;
        }
    }

    out.push_str(&text[last..]);

    if wrapped > 0 {
        tracing::debug!(wrapped, "wrapped flagged tokens");
    }
    out
}

/// [`wrap`] with [`DEFAULT_WRAP_PREFIX`] and [`DEFAULT_WRAP_SUFFIX`].
pub fn wrap_default(text: &str) -> String {
    wrap(text, DEFAULT_WRAP_PREFIX, DEFAULT_WRAP_SUFFIX)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || ('А'..='я').contains(&c) || c == 'ё' || c == 'Ё'
}

/// Byte ranges of maximal token-character runs.
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (is_token_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            },
            _ => {},
        }
    }

    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_clean() {
        assert!(!test(""));
        assert!(!test("   ...   "));
        assert!(!test("Selling a used gearbox for a Lada"));
        assert!(!test("Продам двигатель в хорошем состоянии"));
    }

    #[test]
    fn test_detects_obfuscated_spellings() {
        for text in ["хуй", "ХУЙ", "х у й", "x.y.й", "сука", "п и з д а", "p-i-d-o-r"] {
            assert!(test(text), "{text} should be flagged");
        }
    }

    #[test]
    fn test_replace_keeps_surrounding_text() {
        assert_eq!(
            replace("Продам бампер, сука, срочно", "***"),
            "Продам бампер, ***, срочно"
        );
        assert_eq!(replace_default("сука!"), "[censored]!");
    }

    #[test]
    fn test_replace_does_not_expand_groups() {
        assert_eq!(replace("сука", "$1"), "$1");
    }

    #[test]
    fn test_replace_clean_text_unchanged() {
        let text = "brake pads for Toyota Camry";
        assert_eq!(replace(text, "[x]"), text);
    }

    #[test]
    fn test_find_matches_offsets() {
        let text = "Ford Focus: сука!!! дверь";
        let matches = find_matches(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "сука");
        assert_eq!(&text[matches[0].start..matches[0].end], "сука");
    }

    #[test]
    fn test_wrap_every_occurrence() {
        assert_eq!(
            wrap("сука и ещё сука, бля", "<b>", "</b>"),
            "<b>сука</b> и ещё <b>сука</b>, <b>бля</b>"
        );
    }

    #[test]
    fn test_wrap_skips_short_tokens() {
        assert!(test("ёб"));
        assert_eq!(wrap("ёб твою", "<b>", "</b>"), "ёб твою");
    }

    #[test]
    fn test_wrap_does_not_nest_prefix_tokens() {
        assert_eq!(wrap("бля бляха", "[", "]"), "[бля] [бляха]");
    }

    #[test]
    fn test_wrap_default_markup() {
        assert_eq!(wrap_default("хуй"), r#"<span style="color:red;">хуй</span>"#);
    }

    #[test]
    fn test_token_spans() {
        let text = "ab-c, ёж!x";
        let tokens: Vec<&str> = token_spans(text).iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(tokens, vec!["ab-c", "ёж", "x"]);
    }
}
