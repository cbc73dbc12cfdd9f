//! Script conversion capability used by the advisor and grader.

use wana_kana::{ConvertJapanese, IsJapaneseStr};

/// Kana/romaji conversion, injected so callers and tests can swap it out.
pub trait Transliterator: Send + Sync {
    /// Latin-alphabet form, e.g. `びょう` -> `byou`.
    fn to_romanized(&self, s: &str) -> String;

    /// Phonetic kana form, e.g. `byou` or `ビョウ` -> `びょう`.
    fn to_phonetic(&self, s: &str) -> String;

    /// Whether the text blends kana with Latin letters.
    fn is_mixed_script(&self, s: &str) -> bool;
}

/// Transliterator backed by the `wana_kana` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct WanaKana;

impl Transliterator for WanaKana {
    fn to_romanized(&self, s: &str) -> String {
        s.to_romaji()
    }

    fn to_phonetic(&self, s: &str) -> String {
        s.to_hiragana()
    }

    fn is_mixed_script(&self, s: &str) -> bool {
        s.is_mixed()
    }
}
