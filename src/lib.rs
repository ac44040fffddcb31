//! NEO Deflect - planetary defence simulator
//!
//! A library crate providing the orbit sampling, mission logic and Bevy
//! plugins of the simulator, for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod config;
pub mod countermeasure;
pub mod input;
pub mod mission;
pub mod motion;
pub mod orbit;
pub mod render;
pub mod session;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;
