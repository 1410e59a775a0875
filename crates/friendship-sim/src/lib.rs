//! Headless reference host for the passive friendship engine.
//!
//! Simulates a small village in an ECS world and plays it through whole
//! in-game days, feeding the engine the events a real game would raise.

pub mod components;
pub mod host;
pub mod runner;
pub mod scenario;
pub mod setup;
pub mod systems;

pub use components::*;
pub use host::EcsHost;
pub use runner::{RunSummary, Simulation};
pub use scenario::{default_scenario, Scenario, ScenarioError};
