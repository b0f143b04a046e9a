//! Input boundary types
//!
//! The host window system delivers pointer and key events in its own
//! coordinates; these types carry them across the boundary. Events mutate
//! session state synchronously and are assumed to arrive strictly between
//! simulation ticks.

use crate::foundation::math::Vec2;

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Key codes the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Space key (round reset)
    Space,
    /// Escape key
    Escape,
}

/// Viewport dimensions for converting screen coordinates to normalized
/// device coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert window coordinates (origin top-left, y down) to normalized
    /// device coordinates (origin center, x right, y up, both in [-1, 1])
    pub fn to_ndc(&self, x: f64, y: f64) -> Vec2 {
        let nx = 2.0 * (x as f32) / (self.width as f32) - 1.0;
        let ny = 1.0 - 2.0 * (y as f32) / (self.height as f32);
        Vec2::new(nx, ny)
    }
}
