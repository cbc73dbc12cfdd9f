//! Answer evaluation for vocabulary flashcard reviews.
//!
//! Provides:
//! - Levenshtein edit distance with a length-tiered typo test
//! - Answer sets built from a card's meaning and reading fields
//! - Pre-submission advice (should the input shake?)
//! - Post-submission grading with typo suggestions
//!
//! Kana/romaji conversion is reached through the [`Transliterator`] trait;
//! [`WanaKana`] is the stock implementation.

pub mod advisor;
pub mod distance;
pub mod error;
pub mod grader;
pub mod policy;
pub mod tokens;
pub mod transliterate;
pub mod types;

pub use advisor::{advise, complete_trailing_n, should_warn, split_reading_input, WarnReason};
pub use distance::{distance, is_likely_typo, typo_tolerance, within};
pub use error::{FieldError, Result};
pub use grader::grade;
pub use policy::AnswerSets;
pub use tokens::TokenSet;
pub use transliterate::{Transliterator, WanaKana};
pub use types::{CardContext, CardFields, CardMode, SubjectKind, TypoSuggestion, Verdict};
