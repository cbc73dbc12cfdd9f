//! Answer sets derived from a card's fields for one prompt.

use crate::tokens::TokenSet;
use crate::transliterate::Transliterator;
use crate::types::{CardContext, CardMode};

/// Tokens relevant to grading and advising under one card mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSets {
    pub mode: CardMode,
    /// Everything that grades as correct.
    pub all_accepted: TokenSet,
    /// Whitelisted meanings not already listed as meanings. Meaning mode only.
    pub accepted_extra: TokenSet,
    /// Known-wrong meanings, never offered as typo corrections. Meaning mode only.
    pub blacklist: TokenSet,
    /// Onyomi, kunyomi and nanori. Reading mode only.
    pub all_readings: TokenSet,
}

impl AnswerSets {
    /// Derive the sets for the context's own mode.
    pub fn build(ctx: &CardContext, translit: &dyn Transliterator) -> Self {
        Self::for_mode(ctx, ctx.mode, translit)
    }

    /// Derive the sets for `mode`, regardless of which prompt is showing.
    pub fn for_mode(ctx: &CardContext, mode: CardMode, translit: &dyn Transliterator) -> Self {
        let fields = &ctx.fields;
        match mode {
            CardMode::Meaning => {
                let correct = TokenSet::from_field(&fields.meaning, mode, translit);
                let whitelist = TokenSet::from_field(&fields.meaning_whitelist, mode, translit);
                let accepted_extra = whitelist.difference(&correct);
                Self {
                    mode,
                    all_accepted: correct.union(&accepted_extra),
                    accepted_extra,
                    blacklist: TokenSet::from_field(&fields.meaning_blacklist, mode, translit),
                    all_readings: TokenSet::new(),
                }
            }
            CardMode::Reading => {
                let all_readings = [
                    &fields.reading_onyomi,
                    &fields.reading_kunyomi,
                    &fields.reading_nanori,
                ]
                .into_iter()
                .fold(TokenSet::new(), |acc, field| {
                    acc.union(&TokenSet::from_field(field, mode, translit))
                });
                Self {
                    mode,
                    all_accepted: TokenSet::from_field(&fields.reading_whitelist, mode, translit),
                    accepted_extra: TokenSet::new(),
                    blacklist: TokenSet::new(),
                    all_readings,
                }
            }
        }
    }

    /// Every reading the card knows of, listed as accepted or not.
    pub fn reading_inventory(&self) -> TokenSet {
        self.all_readings.union(&self.all_accepted)
    }
}
