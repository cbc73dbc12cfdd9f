//! Splitting answer text into comparable tokens.
//!
//! Fields come from the importer as comma-separated lists, sometimes wrapped
//! in display markup:
//! ```text
//! Meaning_Whitelist: Big, Large, Great
//! Reading_Whitelist: <span class="mora"><span class="mora-h-l">さ</span></span>、 ゆう
//! ```
//! Each token gets a comparison key (case-folded for meanings, converted to
//! hiragana for readings) while its display text is kept for the learner.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transliterate::Transliterator;
use crate::types::CardMode;

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Characters that separate answers in fields and typed input.
const DELIMITERS: &[char] = &[',', '、', '，', '､'];

/// Remove HTML tags and decode entities.
pub fn strip_markup(text: &str) -> String {
    let without_tags = MARKUP.replace_all(text, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}

/// Split a card field into trimmed, non-empty tokens.
pub fn split_field(field: &str) -> Vec<String> {
    strip_markup(field)
        .split(DELIMITERS)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split typed input into tokens.
///
/// Only tokens that are empty as typed are dropped, so a whitespace-only
/// token survives (and matches nothing).
pub fn split_input(input: &str) -> Vec<&str> {
    input
        .split(DELIMITERS)
        .filter(|t| !t.is_empty())
        .map(str::trim)
        .collect()
}

/// Comparison key for a meaning: lowercase with apostrophes dropped.
pub fn meaning_key(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(*c, '\'' | '’'))
        .collect()
}

/// Comparison key for a reading: hiragana.
pub fn reading_key(token: &str, translit: &dyn Transliterator) -> String {
    translit.to_phonetic(&token.trim().to_lowercase())
}

/// Comparison key for a token under the given mode.
pub fn key_for(mode: CardMode, token: &str, translit: &dyn Transliterator) -> String {
    match mode {
        CardMode::Meaning => meaning_key(token),
        CardMode::Reading => reading_key(token, translit),
    }
}

/// Set of answer tokens keyed by comparison key.
///
/// Iteration follows key order, so anything built from a set comes out the
/// same every time. The first display text seen for a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: BTreeMap<String, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from display tokens, keying each with `key`.
    pub fn from_tokens<I, S, F>(tokens: I, key: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let mut set = Self::new();
        for token in tokens {
            let token = token.as_ref();
            set.insert(key(token), token.trim().to_string());
        }
        set
    }

    /// Tokens of a card field, keyed for `mode`.
    pub fn from_field(field: &str, mode: CardMode, translit: &dyn Transliterator) -> Self {
        Self::from_tokens(split_field(field), |t| key_for(mode, t, translit))
    }

    /// Insert a token unless its key is already present.
    pub fn insert(&mut self, key: String, display: String) {
        self.entries.entry(key).or_insert(display);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Every key of `self` is also in `other`. Vacuously true when empty.
    pub fn is_subset(&self, other: &TokenSet) -> bool {
        self.keys().all(|k| other.contains(k))
    }

    /// Keys in `self` or `other`; display text from `self` wins.
    pub fn union(&self, other: &TokenSet) -> TokenSet {
        let mut result = self.clone();
        for (key, display) in other.iter() {
            result.insert(key.to_string(), display.to_string());
        }
        result
    }

    /// Keys in `self` but not in `other`.
    pub fn difference(&self, other: &TokenSet) -> TokenSet {
        TokenSet {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !other.contains(k))
                .map(|(k, d)| (k.clone(), d.clone()))
                .collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn displays(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// `(key, display)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }
}
