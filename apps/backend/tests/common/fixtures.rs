//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Fields of a kanji card as the importer writes them, pitch markup included.
pub fn kanji_fields() -> serde_json::Value {
    json!({
        "Card_Type": "Kanji",
        "Meaning": "Right",
        "Meaning_Whitelist": "Quux, Right, Right Side",
        "Meaning_Blacklist": "Rite",
        "Reading_Whitelist": "<span class=\"mora\"><span class=\"mora-h-l\">ゆ</span><span class=\"mora-l\">う</span></span>, う",
        "Reading_Onyomi": "ゆう, う",
        "Reading_Kunyomi": "みぎ",
        "Reading_Nanori": ""
    })
}

/// Fields of a vocabulary card with a single accepted reading.
pub fn vocabulary_fields(reading: &str) -> serde_json::Value {
    json!({
        "Card_Type": "Vocabulary",
        "Meaning": "Illness",
        "Meaning_Whitelist": "Illness, Sickness",
        "Reading_Whitelist": reading
    })
}

/// Create an advise request body.
pub fn advise_request(mode: &str, fields: serde_json::Value, input: &str) -> serde_json::Value {
    json!({ "mode": mode, "fields": fields, "input": input })
}

/// Create a grade request body.
pub fn grade_request(mode: &str, fields: serde_json::Value, answer: &str) -> serde_json::Value {
    json!({ "mode": mode, "fields": fields, "answer": answer })
}

/// Create a typo check request body.
pub fn typo_request(expected: &str, typed: &str) -> serde_json::Value {
    json!({ "expected": expected, "typed": typed })
}
