//! Chime Rings - an interactive circle toy
//!
//! Clicking the canvas spawns a growing circle. Circles collide with each
//! other and with the playfield edge, reverse their growth, and chime a
//! note quantized from their size at the moment of impact.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (registry, collision engine, cue mapping)
//! - `renderer`: WebGPU ring tessellation and drawing
//! - `audio`: Web Audio cue playback (wasm32 only)
//! - `settings`: User preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Fixed configuration defaults
pub mod consts {
    /// Points emitted around each circle's ring by the tessellator
    pub const POINTS_PER_RING: u32 = 1000;
    /// Number of audio cue buckets (one per chromatic note)
    pub const CUE_COUNT: u32 = 12;
    /// Radius a circle is born with
    pub const INITIAL_RADIUS: f32 = 1.0;
    /// Uniform draw range for a new circle's growth speed (per tick)
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 1.5;
}

/// Map a playfield point (pixels, y-down) to clip space ([-1, 1], y-up)
#[inline]
pub fn to_clip_space(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x / width * 2.0 - 1.0, p.y / height * -2.0 + 1.0)
}
