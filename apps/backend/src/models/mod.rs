//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from answer-core
pub use answer_core::{CardFields, TypoSuggestion, Verdict, WarnReason};

/// POST /api/review/advise body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviseRequest {
    /// `meaning` or `reading`
    pub mode: String,
    pub fields: CardFields,
    /// Text currently in the answer box
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviseResponse {
    pub warn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<WarnReason>,
}

/// POST /api/review/grade body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub mode: String,
    pub fields: CardFields,
    /// Locked-in answer text
    pub answer: String,
}

/// POST /api/review/typo body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypoCheckRequest {
    pub expected: String,
    pub typed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypoCheckResponse {
    pub distance: usize,
    /// Edits tolerated for `expected`; absent when only an exact match counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<usize>,
    pub likely_typo: bool,
}
