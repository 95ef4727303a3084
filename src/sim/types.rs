//! Simulation Types
//!
//! Only data definitions and wire-name parsing live here.
//! Decision logic is in `engine.rs`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::SimError;

// ============================================================================
// ATTACKS & DEFENSES
// ============================================================================

/// Simulated intrusion vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// Forged "open door" command sent to the lock
    FakeCommand,
    /// Adversarial image shown to the camera recognizer
    AdversarialImage,
}

impl AttackKind {
    pub const ALL: [AttackKind; 2] = [AttackKind::FakeCommand, AttackKind::AdversarialImage];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackKind::FakeCommand => "fake_command",
            AttackKind::AdversarialImage => "adversarial_image",
        }
    }

    /// Defense that blocks this attack kind
    pub fn countered_by(&self) -> Defense {
        match self {
            AttackKind::FakeCommand => Defense::SignatureCheck,
            AttackKind::AdversarialImage => Defense::ModelHardening,
        }
    }
}

impl FromStr for AttackKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fake_command" => Ok(AttackKind::FakeCommand),
            "adversarial_image" => Ok(AttackKind::AdversarialImage),
            other => Err(SimError::InvalidAttackType(other.to_string())),
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mitigation switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Defense {
    /// Rejects unsigned lock commands
    SignatureCheck,
    /// Adversarially trained camera model
    ModelHardening,
}

impl Defense {
    pub const ALL: [Defense; 2] = [Defense::SignatureCheck, Defense::ModelHardening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Defense::SignatureCheck => "signature_check",
            Defense::ModelHardening => "model_hardening",
        }
    }
}

impl FromStr for Defense {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signature_check" => Ok(Defense::SignatureCheck),
            "model_hardening" => Ok(Defense::ModelHardening),
            other => Err(SimError::UnknownDefense(other.to_string())),
        }
    }
}

impl fmt::Display for Defense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two defense flags. Closed set, no string keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Defenses {
    pub signature_check: bool,
    pub model_hardening: bool,
}

impl Defenses {
    pub fn is_enabled(&self, defense: Defense) -> bool {
        match defense {
            Defense::SignatureCheck => self.signature_check,
            Defense::ModelHardening => self.model_hardening,
        }
    }

    /// Flip a flag, returning the new value
    pub fn toggle(&mut self, defense: Defense) -> bool {
        let flag = match defense {
            Defense::SignatureCheck => &mut self.signature_check,
            Defense::ModelHardening => &mut self.model_hardening,
        };
        *flag = !*flag;
        *flag
    }
}

// ============================================================================
// DEVICES
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorLock {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    #[default]
    Active,
    Spoofed,
}

/// Recognizer output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Family,
    Stranger,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Family => "family",
            Label::Stranger => "stranger",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the camera saw vs. what it reported after a successful adversarial image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Misclassification {
    pub actual: Label,
    pub predicted: Label,
}

impl Misclassification {
    /// Adversarial images are always shown by a stranger
    pub fn of_stranger(predicted: Label) -> Self {
        Self {
            actual: Label::Stranger,
            predicted,
        }
    }
}

impl fmt::Display for Misclassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} recognized as {}", self.actual, self.predicted)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub status: CameraStatus,
    pub last_detection: Option<Misclassification>,
}

// ============================================================================
// STATS & RATES
// ============================================================================

/// Session counters. `attack_count == success_attack + defense_count` after every attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub attack_count: u64,
    pub success_attack: u64,
    pub defense_count: u64,
}

impl Stats {
    pub fn rates(&self) -> Rates {
        Rates {
            attack_rate: percent(self.success_attack, self.attack_count),
            defense_rate: percent(self.defense_count, self.attack_count),
        }
    }
}

/// Integer percentage, truncated. Zero when nothing was attempted.
fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (part.saturating_mul(100) / total) as u32
}

/// Derived success/block percentages (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub attack_rate: u32,
    pub defense_rate: u32,
}

// ============================================================================
// STATE
// ============================================================================

/// Full mutable security state of the simulated home
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityState {
    pub door_lock: DoorLock,
    pub camera: Camera,
    pub defenses: Defenses,
    pub stats: Stats,
}

// ============================================================================
// RESULTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Succeeded,
    Blocked,
}

/// Result of one attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackResult {
    pub kind: AttackKind,
    pub outcome: Outcome,
    pub log: String,
    pub door_lock: DoorLock,
    pub camera: Camera,
    pub rates: Rates,
}

/// Result of one defense toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseResult {
    pub defense: Defense,
    pub enabled: bool,
    pub log: String,
    pub rates: Rates,
}

// ============================================================================
// TESTS
// ============================================================================
