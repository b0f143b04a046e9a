//! # Bee Sim
//!
//! Simulation core for an interactive launch demo: a projectile ("bee") is
//! fired from a fixed position with a velocity set by mouse drag, falls under
//! constant gravity, and deactivates static target boxes it hits.
//!
//! The crate is renderer-agnostic. The host graphics environment drives it
//! with per-frame ticks and pointer/key input, and reads back a transform for
//! the projectile, an aim-indicator vector, and a visibility flag per target.
//!
//! ## Quick Start
//!
//! ```rust
//! use bee_sim::prelude::*;
//!
//! fn main() -> Result<(), SimError> {
//!     let viewport = Viewport::new(800, 600);
//!     let mut session = Session::new(SimConfig::default())?;
//!
//!     // One round: press, drag, release, then step until the bee lands.
//!     session.pointer_down(MouseButton::Left, viewport.to_ndc(400.0, 300.0));
//!     session.pointer_moved(viewport.to_ndc(600.0, 150.0));
//!     session.pointer_up(MouseButton::Left);
//!
//!     let frame = session.tick(1.0 / 60.0);
//!     assert!(frame.target_visible.iter().all(|v| *v));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod config;
pub mod foundation;
pub mod input;
pub mod projectile;
pub mod session;

mod error;

pub use error::SimError;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        collision::{sphere_intersects_box, Aabb, Target},
        config::{Config, SimConfig},
        foundation::{
            math::{Mat4, Transform, Vec2, Vec3},
            time::Timer,
        },
        input::{KeyCode, MouseButton, Viewport},
        projectile::Projectile,
        session::{FrameOutput, RoundPhase, Session},
        SimError,
    };
}
