//! Simulation configuration and the circle registry

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::circle::Circle;
use super::cue::{CueMapper, Note};
use crate::consts::*;

/// Construction-time configuration. Fixed for the lifetime of the
/// simulation; validated before use.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Points emitted around each ring by the tessellator
    pub points_per_ring: u32,
    /// Number of audio cue buckets
    pub cue_count: u32,
    /// Radius circles are born with
    pub initial_radius: f32,
    /// Uniform speed draw range for new circles
    pub speed_min: f32,
    pub speed_max: f32,
}

impl SimConfig {
    /// Config for a playfield of the given size, everything else default.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            points_per_ring: POINTS_PER_RING,
            cue_count: CUE_COUNT,
            initial_radius: INITIAL_RADIUS,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
        }
    }

    /// Reject configurations that would silently produce empty output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveDimensions);
        }
        if self.points_per_ring == 0 {
            return Err(ConfigError::ZeroPointsPerRing);
        }
        if self.cue_count == 0 || self.cue_count as usize > Note::ALL.len() {
            return Err(ConfigError::CueCountOutOfRange);
        }
        if !(self.speed_min > 0.0 && self.speed_max > self.speed_min) {
            return Err(ConfigError::EmptySpeedRange);
        }
        if self.initial_radius < 0.0 {
            return Err(ConfigError::NegativeInitialRadius);
        }
        Ok(())
    }
}

/// Rejected `SimConfig` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveDimensions,
    ZeroPointsPerRing,
    CueCountOutOfRange,
    EmptySpeedRange,
    NegativeInitialRadius,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::NonPositiveDimensions => "playfield dimensions must be positive",
            ConfigError::ZeroPointsPerRing => "points per ring must be nonzero",
            ConfigError::CueCountOutOfRange => "cue count must be between 1 and the note count",
            ConfigError::EmptySpeedRange => "speed range must be positive and nonempty",
            ConfigError::NegativeInitialRadius => "initial radius must be non-negative",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ConfigError {}

/// The circle registry plus everything a tick needs.
///
/// Insertion order is render order and the stable index used for collision
/// pairing. Circles are never removed once spawned.
#[derive(Debug, Clone)]
pub struct SimState {
    pub config: SimConfig,
    pub cue_mapper: CueMapper,
    pub circles: Vec<Circle>,
    rng: Pcg32,
}

impl SimState {
    /// Create an empty simulation. Fails fast on a malformed config.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cue_mapper: CueMapper::new(&config),
            circles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        })
    }

    /// Append one circle at the given playfield point. Color and speed are
    /// drawn from the seeded RNG; the center never changes afterwards.
    pub fn spawn(&mut self, center: Vec2) {
        let hue = self.rng.random_range(0..=360) as f32;
        let lightness = self.rng.random_range(0..=50) as f32;
        let color = hsl_to_rgb(hue, 100.0, lightness);
        let speed = self
            .rng
            .random_range(self.config.speed_min..self.config.speed_max);
        self.circles.push(Circle {
            center,
            color,
            radius: self.config.initial_radius,
            speed,
        });
    }
}

/// HSL (hue in degrees, saturation/lightness in percent) to RGB in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let s = s / 100.0;
    let l = l / 100.0;
    let k = |n: f32| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = k(n);
        l - a * (-1.0f32).max((k - 3.0).min((9.0 - k).min(1.0)))
    };
    [f(0.0), f(8.0), f(4.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation_accepts_defaults() {
        assert!(SimConfig::new(800.0, 600.0).validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let mut config = SimConfig::new(0.0, 600.0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveDimensions));

        config = SimConfig::new(800.0, -1.0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveDimensions));

        config = SimConfig::new(800.0, 600.0);
        config.points_per_ring = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPointsPerRing));

        config = SimConfig::new(800.0, 600.0);
        config.cue_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::CueCountOutOfRange));
        config.cue_count = 13;
        assert_eq!(config.validate(), Err(ConfigError::CueCountOutOfRange));

        config = SimConfig::new(800.0, 600.0);
        config.speed_max = config.speed_min;
        assert_eq!(config.validate(), Err(ConfigError::EmptySpeedRange));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(SimState::new(SimConfig::new(-5.0, 600.0), 1).is_err());
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut state = SimState::new(SimConfig::new(800.0, 600.0), 7).unwrap();
        assert!(state.circles.is_empty());

        state.spawn(Vec2::new(100.0, 100.0));
        state.spawn(Vec2::new(200.0, 200.0));

        assert_eq!(state.circles.len(), 2);
        assert_eq!(state.circles[0].center, Vec2::new(100.0, 100.0));
        assert_eq!(state.circles[1].center, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_spawn_draws_within_configured_ranges() {
        let mut state = SimState::new(SimConfig::new(800.0, 600.0), 42).unwrap();
        for i in 0..50 {
            state.spawn(Vec2::new(i as f32, i as f32));
        }
        for circle in &state.circles {
            assert_eq!(circle.radius, INITIAL_RADIUS);
            assert!(circle.speed >= SPEED_MIN && circle.speed < SPEED_MAX);
            for channel in circle.color {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = SimState::new(SimConfig::new(800.0, 600.0), 99).unwrap();
        let mut b = SimState::new(SimConfig::new(800.0, 600.0), 99).unwrap();
        a.spawn(Vec2::new(10.0, 10.0));
        b.spawn(Vec2::new(10.0, 10.0));
        assert_eq!(a.circles[0], b.circles[0]);
    }

    #[test]
    fn test_hsl_to_rgb_reference_values() {
        let red = hsl_to_rgb(0.0, 100.0, 50.0);
        assert!((red[0] - 1.0).abs() < 1e-6);
        assert!(red[1].abs() < 1e-6);
        assert!(red[2].abs() < 1e-6);

        let green = hsl_to_rgb(120.0, 100.0, 50.0);
        assert!(green[0].abs() < 1e-6);
        assert!((green[1] - 1.0).abs() < 1e-6);

        let black = hsl_to_rgb(200.0, 100.0, 0.0);
        assert_eq!(black, [0.0, 0.0, 0.0]);

        let white = hsl_to_rgb(200.0, 100.0, 100.0);
        assert_eq!(white, [1.0, 1.0, 1.0]);
    }
}
