//! Camera recognizer stand-ins
//!
//! No real model: the label is a coin flip. The engine only sees the
//! `Detector` trait so tests can pin the outcome.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Label;

/// Classifies whoever is in front of the camera
pub trait Detector: Send + Sync {
    fn classify(&self) -> Label;
}

/// Uniform random family/stranger classifier
pub struct MockDetector {
    seeded: Option<Mutex<StdRng>>,
}

impl MockDetector {
    /// Draws from the thread-local RNG
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Deterministic sequence of labels for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn pick<R: Rng + ?Sized>(rng: &mut R) -> Label {
        if rng.gen_bool(0.5) {
            Label::Family
        } else {
            Label::Stranger
        }
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for MockDetector {
    fn classify(&self) -> Label {
        match &self.seeded {
            Some(rng) => Self::pick(&mut *rng.lock()),
            None => Self::pick(&mut rand::thread_rng()),
        }
    }
}

/// Always answers with the same label
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub Label);

impl Detector for FixedDetector {
    fn classify(&self) -> Label {
        self.0
    }
}
