//! Foundation utilities shared across the simulation
//!
//! Math types built on nalgebra and frame-timing helpers for hosts that
//! drive the simulation from a real clock.

pub mod logging;
pub mod math;
pub mod time;
