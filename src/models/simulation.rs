//! Simulation request/response bodies

use serde::{Deserialize, Serialize};

use crate::sim::{
    AttackKind, AttackResult, CameraStatus, Defense, DefenseResult, DoorLock, Misclassification,
    Outcome, Rates, SecurityState,
};

/// `POST /attack` body. `type` stays a raw string so unknown kinds become a 400.
#[derive(Debug, Deserialize)]
pub struct AttackRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

/// `POST /defense` body
#[derive(Debug, Deserialize)]
pub struct DefenseRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackResponse {
    pub attack: AttackKind,
    pub log: String,
    pub outcome: Outcome,
    pub lock_status: DoorLock,
    pub camera_status: CameraStatus,
    pub last_detection: Option<Misclassification>,
    #[serde(flatten)]
    pub rates: Rates,
}

impl From<AttackResult> for AttackResponse {
    fn from(result: AttackResult) -> Self {
        Self {
            attack: result.kind,
            log: result.log,
            outcome: result.outcome,
            lock_status: result.door_lock,
            camera_status: result.camera.status,
            last_detection: result.camera.last_detection,
            rates: result.rates,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseResponse {
    pub log: String,
    pub defense: Defense,
    pub enabled: bool,
    #[serde(flatten)]
    pub rates: Rates,
}

impl From<DefenseResult> for DefenseResponse {
    fn from(result: DefenseResult) -> Self {
        Self {
            log: result.log,
            defense: result.defense,
            enabled: result.enabled,
            rates: result.rates,
        }
    }
}

/// `GET /status`: the full state plus derived rates
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub state: SecurityState,
    #[serde(flatten)]
    pub rates: Rates,
}

impl From<SecurityState> for StatusResponse {
    fn from(state: SecurityState) -> Self {
        Self {
            rates: state.stats.rates(),
            state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub log: String,
}
