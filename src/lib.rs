//! Smart-Home Attack/Defense Simulator
//!
//! Teaching model of a smart home under attack: a door lock that accepts
//! forged commands and a camera AI that can be fooled by adversarial images,
//! each with a defense that can be switched on to block the attack.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SMART-HOME SIMULATOR                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌──────────────────────┐ │
//! │  │  API      │  │  Static      │  │  Middleware          │ │
//! │  │  (Axum)   │  │  Frontend    │  │  CORS/Trace/Headers  │ │
//! │  └─────┬─────┘  └──────────────┘  └──────────────────────┘ │
//! │        ▼                                                    │
//! │  ┌─────────────────────┐      ┌───────────────┐            │
//! │  │  SimulationEngine   │◄─────│  Detector     │            │
//! │  │  (SecurityState)    │      │  (mock AI)    │            │
//! │  └─────────────────────┘      └───────────────┘            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod sim;

use std::sync::Arc;

pub use error::{AppError, AppResult};
pub use routes::create_router;

use sim::{Detector, MockDetector, SimulationEngine};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SimulationEngine>,
    pub config: config::Config,
}

impl AppState {
    /// Build state with the mock recognizer, seeded if the config asks for it
    pub fn new(config: config::Config) -> Self {
        let detector: Arc<dyn Detector> = match config.detector_seed {
            Some(seed) => Arc::new(MockDetector::seeded(seed)),
            None => Arc::new(MockDetector::new()),
        };

        Self::with_engine(config, SimulationEngine::new(detector))
    }

    pub fn with_engine(config: config::Config, engine: SimulationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            config,
        }
    }
}
