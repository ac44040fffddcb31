//! Per-tick motion of bodies along their orbits.
//!
//! - [`OrbitWalker`]: progress along a sampled path, nearest-sample lookup
//! - [`EarthOrbit`]: analytic circular orbit, recomputed every tick
//! - [`OrbitBlender`]: gradual transition from the original to the deflected path

mod blender;
mod earth;
mod walker;

pub use blender::OrbitBlender;
pub use earth::EarthOrbit;
pub use walker::OrbitWalker;
