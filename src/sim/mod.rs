//! Deterministic simulation module
//!
//! All toy logic lives here. This module must be pure and deterministic:
//! - One update per animation frame
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - No rendering or platform dependencies

pub mod circle;
pub mod cue;
pub mod state;
pub mod tick;

pub use circle::{Circle, PredictedCircle, center_distance, circles_intersect};
pub use cue::{CueMapper, Note};
pub use state::{ConfigError, SimConfig, SimState};
pub use tick::{TickEvents, tick};
