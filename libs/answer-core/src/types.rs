//! Core types for answer evaluation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Which prompt the learner is answering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardMode {
    #[default]
    Meaning,
    Reading,
}

impl CardMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meaning => "meaning",
            Self::Reading => "reading",
        }
    }
}

impl FromStr for CardMode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meaning" => Ok(Self::Meaning),
            "reading" => Ok(Self::Reading),
            _ => Err(FieldError::UnknownCardMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of subject the card teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Radical,
    Kanji,
    Vocabulary,
    KanaVocabulary,
}

impl SubjectKind {
    /// Get the kind as the importer writes it into `Card_Type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Radical => "Radical",
            Self::Kanji => "Kanji",
            Self::Vocabulary => "Vocabulary",
            Self::KanaVocabulary => "Kana Vocabulary",
        }
    }

    /// Whether the kind carries an onyomi/kunyomi reading inventory that the
    /// advisor checks for real-but-unlisted readings.
    pub fn has_reading_inventory(&self) -> bool {
        matches!(self, Self::Kanji | Self::Vocabulary)
    }
}

impl FromStr for SubjectKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase().replace('_', " ");
        match folded.as_str() {
            "radical" => Ok(Self::Radical),
            "kanji" => Ok(Self::Kanji),
            "vocabulary" => Ok(Self::Vocabulary),
            "kana vocabulary" => Ok(Self::KanaVocabulary),
            _ => Err(FieldError::UnknownCardType {
                value: s.to_string(),
            }),
        }
    }
}

/// Raw note fields, named the way the vocabulary importer writes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    #[serde(rename = "Card_Type")]
    pub card_type: String,
    /// Primary meaning followed by alternatives.
    #[serde(rename = "Meaning", default)]
    pub meaning: String,
    #[serde(rename = "Meaning_Whitelist", default)]
    pub meaning_whitelist: String,
    #[serde(rename = "Meaning_Blacklist", default)]
    pub meaning_blacklist: String,
    #[serde(rename = "Reading_Whitelist", default)]
    pub reading_whitelist: String,
    #[serde(rename = "Reading_Onyomi", default)]
    pub reading_onyomi: String,
    #[serde(rename = "Reading_Kunyomi", default)]
    pub reading_kunyomi: String,
    #[serde(rename = "Reading_Nanori", default)]
    pub reading_nanori: String,
}

/// Everything known about the card under review.
///
/// Built once when the front of a card is shown and dropped with it. Nothing
/// here is cached across cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContext {
    pub mode: CardMode,
    pub kind: SubjectKind,
    pub fields: CardFields,
}

impl CardContext {
    /// Create a context for an already-known subject kind.
    pub fn new(mode: CardMode, kind: SubjectKind, fields: CardFields) -> Self {
        Self { mode, kind, fields }
    }

    /// Validate raw fields into a context, reading the kind from `Card_Type`.
    pub fn from_fields(mode: CardMode, fields: CardFields) -> crate::Result<Self> {
        let kind = fields.card_type.parse()?;
        Ok(Self::new(mode, kind, fields))
    }
}

/// A submitted token paired with the accepted answer it most likely meant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoSuggestion {
    pub submitted: String,
    pub expected: String,
}

/// Result of grading a locked-in answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Whitelisted answers beyond the listed meanings, for disclosure after
    /// grading. Always empty in reading mode.
    pub accepted_extra: Vec<String>,
    /// Near misses. Empty when the answer is correct.
    pub typos: Vec<TypoSuggestion>,
}
