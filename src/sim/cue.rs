//! Radius-to-cue quantization
//!
//! A collision chimes one of twelve chromatic notes, picked by quantizing
//! the colliding circle's grown radius against the playfield's shorter
//! half-dimension.

use super::state::SimConfig;

/// The twelve cue identifiers, ascending chromatically from A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl Note {
    /// All notes in cue-bucket order.
    pub const ALL: [Note; 12] = [
        Note::A,
        Note::ASharp,
        Note::B,
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
    ];

    /// Semitone offset from A
    pub fn semitone(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
        }
    }
}

/// Maps a continuous radius to a discrete cue bucket.
///
/// The mapping is intentionally unclamped: a radius past `max_radius`
/// quantizes to a bucket at or beyond the cue count, and a transiently
/// negative radius quantizes below zero. `resolve` reports both as `None`.
#[derive(Debug, Clone, Copy)]
pub struct CueMapper {
    max_radius: f32,
    cue_count: u32,
}

impl CueMapper {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            max_radius: config.width.min(config.height) / 2.0,
            cue_count: config.cue_count,
        }
    }

    /// Quantize a radius to a cue bucket: `[0, cue_count)` for radii within
    /// the playfield's shorter half-dimension, out-of-range values passed
    /// through unclamped.
    pub fn quantize(&self, radius: f32) -> i32 {
        (radius / self.max_radius * self.cue_count as f32).floor() as i32
    }

    /// Look up the note for a bucket; `None` when the bucket falls outside
    /// `[0, cue_count)`.
    pub fn resolve(&self, bucket: i32) -> Option<Note> {
        if bucket < 0 || bucket >= self.cue_count as i32 {
            return None;
        }
        Note::ALL.get(bucket as usize).copied()
    }
}
