//! Simulation Engine
//!
//! Single owner of the home's `SecurityState`.
//! Input: AttackKind / Defense
//! Output: AttackResult / DefenseResult
//!
//! Every mutating call holds the state lock for its whole
//! increment-then-branch sequence, so the counters never drift apart.

use std::sync::Arc;

use parking_lot::Mutex;

use super::detector::Detector;
use super::error::SimError;
use super::types::*;

pub struct SimulationEngine {
    state: Mutex<SecurityState>,
    detector: Arc<dyn Detector>,
}

impl SimulationEngine {
    pub fn new(detector: Arc<dyn Detector>) -> Self {
        Self {
            state: Mutex::new(SecurityState::default()),
            detector,
        }
    }

    // ========================================================================
    // ATTACKS
    // ========================================================================

    /// Apply an attack given by its wire name (`fake_command`, `adversarial_image`)
    pub fn apply_attack_named(&self, name: &str) -> Result<AttackResult, SimError> {
        let kind = name.parse::<AttackKind>().map_err(|e| {
            tracing::warn!("Rejected attack type '{}'", name);
            e
        })?;
        Ok(self.apply_attack(kind))
    }

    pub fn apply_attack(&self, kind: AttackKind) -> AttackResult {
        let mut state = self.state.lock();
        state.stats.attack_count += 1;

        let blocked = state.defenses.is_enabled(kind.countered_by());
        let log = match kind {
            AttackKind::FakeCommand if blocked => {
                "Defense: signature check rejected the forged command, door stays locked"
                    .to_string()
            }
            AttackKind::FakeCommand => {
                state.door_lock = DoorLock::Unlocked;
                "Attack: forged unlock command accepted, door opened".to_string()
            }
            AttackKind::AdversarialImage => {
                // The camera always looks, hardened or not
                let predicted = self.detector.classify();
                if blocked {
                    "Defense: model hardening recognized the adversarial image".to_string()
                } else {
                    let detection = Misclassification::of_stranger(predicted);
                    state.camera.status = CameraStatus::Spoofed;
                    state.camera.last_detection = Some(detection);
                    format!("Attack: adversarial image fooled the camera AI ({})", detection)
                }
            }
        };

        let outcome = if blocked {
            state.stats.defense_count += 1;
            Outcome::Blocked
        } else {
            state.stats.success_attack += 1;
            Outcome::Succeeded
        };

        let rates = state.stats.rates();
        tracing::info!(
            attack = %kind,
            outcome = ?outcome,
            attack_rate = rates.attack_rate,
            defense_rate = rates.defense_rate,
            "{}", log
        );

        AttackResult {
            kind,
            outcome,
            log,
            door_lock: state.door_lock,
            camera: state.camera,
            rates,
        }
    }

    // ========================================================================
    // DEFENSES
    // ========================================================================

    /// Toggle a defense given by its wire name (`signature_check`, `model_hardening`)
    pub fn toggle_defense_named(&self, name: &str) -> Result<DefenseResult, SimError> {
        let defense = name.parse::<Defense>().map_err(|e| {
            tracing::warn!("Rejected defense '{}'", name);
            e
        })?;
        Ok(self.toggle_defense(defense))
    }

    pub fn toggle_defense(&self, defense: Defense) -> DefenseResult {
        let mut state = self.state.lock();
        let enabled = state.defenses.toggle(defense);
        let log = format!(
            "Defense: {} {}",
            defense,
            if enabled { "enabled" } else { "disabled" }
        );
        tracing::info!(defense = %defense, enabled, "Defense toggled");

        DefenseResult {
            defense,
            enabled,
            log,
            rates: state.stats.rates(),
        }
    }

    // ========================================================================
    // SESSION
    // ========================================================================

    /// Back to a locked door, an active camera and zeroed counters.
    /// Defense toggles survive.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        let defenses = state.defenses;
        *state = SecurityState {
            defenses,
            ..SecurityState::default()
        };
        tracing::info!("Simulation reset");
    }

    pub fn status(&self) -> SecurityState {
        *self.state.lock()
    }

    pub fn rates(&self) -> Rates {
        self.state.lock().stats.rates()
    }
}

// ============================================================================
// TESTS
// ============================================================================
