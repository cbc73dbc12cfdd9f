//! Review endpoints
//!
//! Every request carries the card's fields, so handlers hold no state beyond
//! the transliterator and identical requests always get identical answers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use answer_core::{advisor, distance, grader, CardContext, CardFields, CardMode};

use crate::error::Result;
use crate::models::{
    AdviseRequest, AdviseResponse, GradeRequest, TypoCheckRequest, TypoCheckResponse, Verdict,
};
use crate::AppState;

/// Request body, or the reason it could not be read
type Body<T> = std::result::Result<Json<T>, JsonRejection>;

/// Validate the request's mode and fields into a card context
fn card_context(mode: &str, fields: CardFields) -> Result<CardContext> {
    let mode: CardMode = mode.parse()?;
    Ok(CardContext::from_fields(mode, fields)?)
}

/// POST /api/review/advise
/// Decides whether the answer box should shake before the answer locks in
pub async fn advise(
    State(state): State<AppState>,
    payload: Body<AdviseRequest>,
) -> Result<Json<AdviseResponse>> {
    let Json(payload) = payload?;
    let ctx = card_context(&payload.mode, payload.fields)?;
    let reason = advisor::advise(&payload.input, &ctx, state.transliterator.as_ref());

    Ok(Json(AdviseResponse {
        warn: reason.is_some(),
        reason,
    }))
}

/// POST /api/review/grade
/// Grades a locked-in answer
pub async fn grade(
    State(state): State<AppState>,
    payload: Body<GradeRequest>,
) -> Result<Json<Verdict>> {
    let Json(payload) = payload?;
    let ctx = card_context(&payload.mode, payload.fields)?;
    let verdict = grader::grade(&payload.answer, &ctx, state.transliterator.as_ref());

    tracing::info!(
        mode = ctx.mode.as_str(),
        kind = ctx.kind.as_str(),
        correct = verdict.is_correct,
        "Graded answer"
    );

    Ok(Json(verdict))
}

/// POST /api/review/typo
/// Exposes the typo test for a single pair of strings
pub async fn typo(payload: Body<TypoCheckRequest>) -> Result<Json<TypoCheckResponse>> {
    let Json(payload) = payload?;

    Ok(Json(TypoCheckResponse {
        distance: distance::distance(&payload.expected, &payload.typed),
        tolerance: distance::typo_tolerance(&payload.expected),
        likely_typo: distance::is_likely_typo(&payload.expected, &payload.typed),
    }))
}
