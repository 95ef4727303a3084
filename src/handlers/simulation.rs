//! Simulation handlers

use axum::{extract::{State, rejection::JsonRejection}, Json};

use crate::{AppState, AppResult};
use crate::models::{
    AttackRequest, AttackResponse, DefenseRequest, DefenseResponse, ResetResponse, StatusResponse,
};

/// Launch an attack against the home
pub async fn attack(
    State(state): State<AppState>,
    body: Result<Json<AttackRequest>, JsonRejection>,
) -> AppResult<Json<AttackResponse>> {
    let Json(req) = body?;
    let result = state.engine.apply_attack_named(&req.kind)?;
    Ok(Json(result.into()))
}

/// Switch a defense on or off
pub async fn defense(
    State(state): State<AppState>,
    body: Result<Json<DefenseRequest>, JsonRejection>,
) -> AppResult<Json<DefenseResponse>> {
    let Json(req) = body?;
    let result = state.engine.toggle_defense_named(&req.kind)?;
    Ok(Json(result.into()))
}

/// Current security state
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.engine.status().into())
}

/// Start a fresh session (defenses are kept)
pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    state.engine.reset();
    Json(ResetResponse {
        success: true,
        log: "System reset: door locked, camera restored, counters cleared".to_string(),
    })
}
