//! Pre-submission advice: should the input shake before the answer locks in?
//!
//! The advisor only ever asks the learner to look again. Rules run in order
//! and the first that fires decides.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::policy::AnswerSets;
use crate::tokens::{meaning_key, reading_key, split_input, TokenSet};
use crate::transliterate::Transliterator;
use crate::types::{CardContext, CardMode};

/// Why the advisor wants the learner to reconsider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnReason {
    /// Reading input mixes kana and Latin letters.
    MixedScript,
    /// Reading prompt answered with the card's meaning.
    MeaningForReading,
    /// A real reading of the subject, but not one accepted for this card.
    UnlistedReading,
    /// Meaning prompt answered with one of the card's readings.
    ReadingForMeaning,
}

/// Turn a dangling `n` after kana into `ん`.
///
/// Kana input methods hold back a final `n` waiting for the next key, so
/// `ほn` is what the field holds when the learner commits `ほん`. A final
/// `n` after another Latin letter is left alone: the whole run is romaji and
/// converts as one.
pub fn complete_trailing_n(input: &str) -> Cow<'_, str> {
    let Some(rest) = input.strip_suffix('n') else {
        return Cow::Borrowed(input);
    };

    match rest.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => Cow::Borrowed(input),
        _ => Cow::Owned(format!("{rest}ん")),
    }
}

/// Split reading input into tokens, completing a dangling `n` on each one.
pub fn split_reading_input(input: &str) -> Vec<Cow<'_, str>> {
    split_input(input)
        .into_iter()
        .map(complete_trailing_n)
        .collect()
}

/// Whether to reject the commit key and shake the input.
pub fn should_warn(input: &str, ctx: &CardContext, translit: &dyn Transliterator) -> bool {
    advise(input, ctx, translit).is_some()
}

/// Like [`should_warn`], reporting which rule fired.
pub fn advise(
    input: &str,
    ctx: &CardContext,
    translit: &dyn Transliterator,
) -> Option<WarnReason> {
    let reason = match ctx.mode {
        CardMode::Reading => advise_reading(&split_reading_input(input), ctx, translit),
        CardMode::Meaning => advise_meaning(&split_input(input), ctx, translit),
    };

    tracing::debug!(
        mode = ctx.mode.as_str(),
        kind = ctx.kind.as_str(),
        ?reason,
        "advised on input"
    );
    reason
}

fn advise_reading(
    tokens: &[Cow<'_, str>],
    ctx: &CardContext,
    translit: &dyn Transliterator,
) -> Option<WarnReason> {
    if tokens.is_empty() {
        return None;
    }

    if tokens.iter().any(|t| translit.is_mixed_script(t)) {
        return Some(WarnReason::MixedScript);
    }

    let sets = AnswerSets::for_mode(ctx, CardMode::Reading, translit);
    let typed = TokenSet::from_tokens(tokens, |t| reading_key(t, translit));
    if typed.is_subset(&sets.all_accepted) {
        return None;
    }

    let meanings = AnswerSets::for_mode(ctx, CardMode::Meaning, translit);
    let romanized = TokenSet::from_tokens(tokens, |t| meaning_key(&translit.to_romanized(t)));
    if romanized.is_subset(&meanings.all_accepted) {
        return Some(WarnReason::MeaningForReading);
    }

    if ctx.kind.has_reading_inventory() {
        let unlisted = sets.all_readings.difference(&sets.all_accepted);
        if typed.is_subset(&sets.all_readings) && typed.keys().any(|k| unlisted.contains(k)) {
            return Some(WarnReason::UnlistedReading);
        }
    }

    None
}

fn advise_meaning(
    tokens: &[&str],
    ctx: &CardContext,
    translit: &dyn Transliterator,
) -> Option<WarnReason> {
    if tokens.is_empty() {
        return None;
    }

    let sets = AnswerSets::for_mode(ctx, CardMode::Meaning, translit);
    let typed = TokenSet::from_tokens(tokens, meaning_key);
    if typed.is_subset(&sets.all_accepted) {
        return None;
    }

    let inventory = AnswerSets::for_mode(ctx, CardMode::Reading, translit).reading_inventory();
    let phonetic = TokenSet::from_tokens(tokens, |t| reading_key(t, translit));
    if phonetic.is_subset(&inventory) {
        return Some(WarnReason::ReadingForMeaning);
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transliterate::testing::TableTransliterator;
    use crate::transliterate::WanaKana;
    use crate::types::{CardFields, SubjectKind};

    fn right_fields() -> CardFields {
        CardFields {
            card_type: "Kanji".to_string(),
            meaning: "Right".to_string(),
            meaning_whitelist: "Right, Right Side".to_string(),
            meaning_blacklist: "Rite".to_string(),
            reading_whitelist: "ゆう, う".to_string(),
            reading_onyomi: "ゆう, う".to_string(),
            reading_kunyomi: "みぎ".to_string(),
            reading_nanori: String::new(),
        }
    }

    fn table() -> TableTransliterator {
        TableTransliterator::default()
            .pair("ゆう", "yuu")
            .pair("う", "u")
            .pair("みぎ", "migi")
            .pair("らいと", "raito")
    }

    fn ctx(mode: CardMode, kind: SubjectKind) -> CardContext {
        CardContext::new(mode, kind, right_fields())
    }

    #[test]
    fn complete_trailing_n_after_kana() {
        assert_eq!(complete_trailing_n("ほn"), "ほん");
        assert_eq!(complete_trailing_n("n"), "ん");
        assert_eq!(complete_trailing_n("みぎ, ほn"), "みぎ, ほん");
    }

    #[test]
    fn complete_trailing_n_leaves_romaji_and_other_endings() {
        assert!(matches!(complete_trailing_n("hon"), Cow::Borrowed("hon")));
        assert!(matches!(complete_trailing_n("ほnn"), Cow::Borrowed("ほnn")));
        assert!(matches!(complete_trailing_n("ほん"), Cow::Borrowed("ほん")));
        assert!(matches!(complete_trailing_n(""), Cow::Borrowed("")));
    }

    #[test]
    fn split_reading_input_completes_each_token() {
        assert_eq!(split_reading_input("ほn , みぎ"), vec!["ほん", "みぎ"]);
        assert_eq!(split_reading_input("hon、ほn,"), vec!["hon", "ほん"]);
    }

    #[test]
    fn trailing_n_never_warns_on_an_answer_that_grades_correct() {
        let fields = CardFields {
            card_type: "Kanji".to_string(),
            reading_whitelist: "ほん".to_string(),
            reading_onyomi: "ほん".to_string(),
            ..Default::default()
        };
        let card = CardContext::new(CardMode::Reading, SubjectKind::Kanji, fields);

        for input in ["ほn", "ほn ", "ほn,", "ほn、", " ほn 、"] {
            assert!(crate::grader::grade(input, &card, &WanaKana).is_correct, "{input:?}");
            assert_eq!(advise(input, &card, &WanaKana), None, "{input:?}");
        }
    }

    #[test]
    fn never_warn_on_empty_input() {
        let t = table();
        assert_eq!(advise("", &ctx(CardMode::Reading, SubjectKind::Kanji), &t), None);
        assert_eq!(advise("", &ctx(CardMode::Meaning, SubjectKind::Kanji), &t), None);
        assert_eq!(advise(",", &ctx(CardMode::Meaning, SubjectKind::Kanji), &t), None);
    }

    #[test]
    fn reading_mixed_script_always_warns() {
        let t = table();
        let card = ctx(CardMode::Reading, SubjectKind::Kanji);
        assert_eq!(advise("ゆu", &card, &t), Some(WarnReason::MixedScript));
        assert_eq!(advise("ゆう, みgi", &card, &t), Some(WarnReason::MixedScript));
    }

    #[test]
    fn reading_mixed_script_checked_with_wana_kana() {
        let card = ctx(CardMode::Reading, SubjectKind::Radical);
        assert!(should_warn("びょu", &card, &WanaKana));
    }

    #[test]
    fn reading_accepted_does_not_warn() {
        let t = table();
        let card = ctx(CardMode::Reading, SubjectKind::Kanji);
        assert_eq!(advise("ゆう", &card, &t), None);
        assert_eq!(advise("ゆう、う", &card, &t), None);
        assert_eq!(advise("yuu", &card, &t), None);
    }

    #[test]
    fn reading_answered_with_meaning_warns() {
        let t = table();
        let card = ctx(CardMode::Reading, SubjectKind::Radical);
        assert_eq!(advise("right", &card, &t), Some(WarnReason::MeaningForReading));
        assert_eq!(
            advise("Right Side", &card, &t),
            Some(WarnReason::MeaningForReading)
        );
    }

    #[test]
    fn reading_unlisted_real_reading_warns_for_kanji_and_vocabulary() {
        let t = table();
        for kind in [SubjectKind::Kanji, SubjectKind::Vocabulary] {
            let card = ctx(CardMode::Reading, kind);
            assert_eq!(advise("みぎ", &card, &t), Some(WarnReason::UnlistedReading));
            assert_eq!(advise("ゆう, みぎ", &card, &t), Some(WarnReason::UnlistedReading));
        }
    }

    #[test]
    fn reading_unlisted_real_reading_ignored_for_radical_and_kana_vocabulary() {
        let t = table();
        for kind in [SubjectKind::Radical, SubjectKind::KanaVocabulary] {
            let card = ctx(CardMode::Reading, kind);
            assert_eq!(advise("みぎ", &card, &t), None);
        }
    }

    #[test]
    fn reading_unknown_answer_does_not_warn() {
        let t = table();
        let card = ctx(CardMode::Reading, SubjectKind::Kanji);
        assert_eq!(advise("らいと", &card, &t), None);
        assert_eq!(advise("みぎ, らいと", &card, &t), None);
    }

    #[test]
    fn meaning_accepted_does_not_warn() {
        let t = table();
        let card = ctx(CardMode::Meaning, SubjectKind::Kanji);
        assert_eq!(advise("right", &card, &t), None);
        assert_eq!(advise("RIGHT SIDE, right", &card, &t), None);
    }

    #[test]
    fn meaning_answered_with_reading_warns() {
        let t = table();
        let card = ctx(CardMode::Meaning, SubjectKind::Kanji);
        assert_eq!(advise("yuu", &card, &t), Some(WarnReason::ReadingForMeaning));
        assert_eq!(advise("みぎ", &card, &t), Some(WarnReason::ReadingForMeaning));
    }

    #[test]
    fn meaning_wrong_answer_does_not_warn() {
        let t = table();
        let card = ctx(CardMode::Meaning, SubjectKind::Kanji);
        assert_eq!(advise("left", &card, &t), None);
        assert_eq!(advise("right, yuu", &card, &t), None);
    }

    #[test]
    fn should_warn_mirrors_advise() {
        let t = table();
        let card = ctx(CardMode::Meaning, SubjectKind::Kanji);
        assert!(should_warn("yuu", &card, &t));
        assert!(!should_warn("right", &card, &t));
    }
}
