//! Data models

pub mod simulation;

pub use simulation::*;
