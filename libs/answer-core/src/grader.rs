//! Post-submission grading with typo detection.

use std::borrow::Cow;

use crate::advisor::split_reading_input;
use crate::distance::is_likely_typo;
use crate::policy::AnswerSets;
use crate::tokens::{key_for, split_input, TokenSet};
use crate::transliterate::Transliterator;
use crate::types::{CardContext, CardMode, TypoSuggestion, Verdict};

/// Grade a locked-in answer against the card.
///
/// Correct when every submitted token is accepted. Otherwise each submitted
/// token that is neither accepted nor blacklisted is checked against every
/// accepted answer, and each near miss becomes a suggestion. A token close to
/// several answers yields one suggestion per answer.
pub fn grade(locked: &str, ctx: &CardContext, translit: &dyn Transliterator) -> Verdict {
    let sets = AnswerSets::build(ctx, translit);

    let tokens: Vec<Cow<'_, str>> = match ctx.mode {
        CardMode::Reading => split_reading_input(locked),
        CardMode::Meaning => split_input(locked).into_iter().map(Cow::Borrowed).collect(),
    };
    let submitted = TokenSet::from_tokens(&tokens, |t| key_for(ctx.mode, t, translit));

    let is_correct = !submitted.is_empty() && submitted.is_subset(&sets.all_accepted);
    let typos = if is_correct {
        Vec::new()
    } else {
        find_typos(&submitted, &sets, translit)
    };

    tracing::debug!(
        mode = ctx.mode.as_str(),
        kind = ctx.kind.as_str(),
        is_correct,
        typos = typos.len(),
        "graded answer"
    );

    Verdict {
        is_correct,
        accepted_extra: sets.accepted_extra.displays().map(str::to_string).collect(),
        typos,
    }
}

fn find_typos(
    submitted: &TokenSet,
    sets: &AnswerSets,
    translit: &dyn Transliterator,
) -> Vec<TypoSuggestion> {
    // Readings are compared in romaji so that one mistyped key is one edit
    let compare_form = |key: &str| -> String {
        match sets.mode {
            CardMode::Meaning => key.to_string(),
            CardMode::Reading => translit.to_romanized(key),
        }
    };

    let candidates: Vec<(String, &str)> = sets
        .all_accepted
        .iter()
        .map(|(key, display)| (compare_form(key), display))
        .collect();

    let mut typos = Vec::new();
    for (key, shown) in submitted.iter() {
        if sets.blacklist.contains(key) || sets.all_accepted.contains(key) {
            continue;
        }

        let typed = compare_form(key);
        for (expected, expected_display) in &candidates {
            if is_likely_typo(expected, &typed) {
                tracing::trace!(submitted = shown, expected = *expected_display, "typo");
                typos.push(TypoSuggestion {
                    submitted: shown.to_string(),
                    expected: expected_display.to_string(),
                });
            }
        }
    }
    typos
}
