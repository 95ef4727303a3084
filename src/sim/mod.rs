//! Attack/Defense Simulation
//!
//! Door lock + camera recognizer under attack, with switchable defenses.
//!
//! ```text
//! AttackKind ──► SimulationEngine ──► AttackResult
//!                 │   ▲
//!    Defense ─────┘   └── Detector (family / stranger)
//! ```

pub mod detector;
pub mod engine;
pub mod error;
pub mod types;

pub use detector::{Detector, FixedDetector, MockDetector};
pub use engine::SimulationEngine;
pub use error::SimError;
pub use types::*;
