//! Per-frame collision update
//!
//! Three passes over the registry: predict grown radii into a separate
//! buffer, detect boundary and pairwise collisions against the predicted
//! radii, then commit new radii and speeds back to the registry. A circle
//! flagged this tick ends where it started with its growth reversed; an
//! unflagged circle gains twice its speed (the predicted growth plus the
//! commit's own addition). Collisions emit cue buckets for the frame driver
//! to play.

use super::circle::{Circle, PredictedCircle, circles_intersect};
use super::state::SimState;

/// Effects requested by one tick, consumed by the frame driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Quantized cue buckets for this tick's collisions, in registry order.
    pub cues: Vec<i32>,
}

/// Advance the simulation by one animation frame.
pub fn tick(state: &mut SimState) -> TickEvents {
    let predicted: Vec<PredictedCircle> = state.circles.iter().map(Circle::predict).collect();

    let mut collided = vec![false; predicted.len()];
    for i in 0..predicted.len() {
        // Boundary takes priority and short-circuits pair tests for this
        // index; later circles still test each other.
        if outside_playfield(&predicted[i], state.config.width, state.config.height) {
            collided[i] = true;
            continue;
        }
        for j in (i + 1)..predicted.len() {
            if circles_intersect(&predicted[i], &predicted[j]) {
                collided[i] = true;
                collided[j] = true;
            }
        }
    }

    let mut events = TickEvents::default();
    for (i, circle) in state.circles.iter_mut().enumerate() {
        if collided[i] {
            circle.speed = -circle.speed;
            events.cues.push(state.cue_mapper.quantize(predicted[i].radius));
        }
        circle.radius = predicted[i].radius + circle.speed;

        // Shrunk through zero: restart growth from the center
        if circle.radius < 0.0 {
            circle.radius = 0.0;
            circle.speed = -circle.speed;
        }
    }
    events
}

/// True when the grown extent crosses any playfield edge.
fn outside_playfield(c: &PredictedCircle, width: f32, height: f32) -> bool {
    c.center.x - c.radius < 0.0
        || c.center.x + c.radius > width
        || c.center.y - c.radius < 0.0
        || c.center.y + c.radius > height
}
