//! Simulation data structures: configuration, geometry, and world state.

use crate::constants::GAP_TOP_MARGIN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable simulation parameters, loaded once at session construction.
///
/// Distances are in world units (the default playfield is 360x640 with a
/// top-left origin and y increasing downward), velocities in units per
/// reference frame (16.67ms), times in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f64,
    pub playfield_height: f64,
    /// Downward acceleration applied every tick.
    pub gravity: f64,
    /// Velocity a flap overrides to (negative = upward).
    pub flap_impulse: f64,
    /// One-directional cap: only falling speed is clamped, never rising.
    pub max_fall_speed: f64,
    /// How fast pipes scroll leftward.
    pub scroll_speed: f64,
    pub pipe_width: f64,
    /// Vertical size of the gap between a pipe's top and bottom pillars.
    pub gap_height: f64,
    /// Milliseconds between pipe spawns.
    pub spawn_interval_ms: f64,
    /// Height of the ground band at the bottom of the playfield.
    pub ground_height: f64,
    /// The bird's fixed horizontal position (leading edge).
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: 360.0,
            playfield_height: 640.0,
            gravity: 0.45,
            flap_impulse: -7.5,
            max_fall_speed: 12.0,
            scroll_speed: 2.5,
            pipe_width: 60.0,
            gap_height: 150.0,
            spawn_interval_ms: 1500.0,
            ground_height: 80.0,
            bird_x: 90.0,
            bird_width: 34.0,
            bird_height: 24.0,
        }
    }
}

impl Config {
    /// Inclusive range a spawned pipe's `gap_top` is drawn from.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = GAP_TOP_MARGIN;
        let max = self.playfield_height - self.ground_height - self.gap_height - GAP_TOP_MARGIN;
        (min, max)
    }

    /// Top edge of the ground band, i.e. the floor of the playable area.
    pub fn floor_y(&self) -> f64 {
        self.playfield_height - self.ground_height
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.gap_top_range();
        if max < min {
            return Err(ConfigError::DegenerateGapRange { min, max });
        }
        Ok(())
    }
}

/// A configuration the session constructor refuses.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The playfield is too short to fit a pipe gap plus spawn margins.
    DegenerateGapRange { min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGapRange { min, max } => write!(
                f,
                "playfield cannot fit a pipe gap: gap top range [{min}, {max}] is empty"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Axis-aligned rectangle, top-left origin, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Overlap test where touching edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.width < other.x
            || self.x > other.x + other.width
            || self.y + self.height < other.y
            || self.y > other.y + other.height)
    }
}

/// Run state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed or reset, waiting for the first flap or start.
    Idle,
    Running,
    /// Terminal until the next explicit start or reset.
    Over,
}

/// A scrolling top/bottom pillar pair with a vertical gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// X position of the leading (left) edge.
    pub x: f64,
    /// Distance from the playfield top to the top of the gap.
    pub gap_top: f64,
    /// Set once when the bird clears the trailing edge; drives scoring.
    pub passed: bool,
}

impl Pipe {
    /// Rectangle of the pillar above the gap.
    pub fn top_rect(&self, config: &Config) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            width: config.pipe_width,
            height: self.gap_top,
        }
    }

    /// Rectangle of the pillar below the gap, down to the ground band.
    pub fn bottom_rect(&self, config: &Config) -> Rect {
        let y = self.gap_top + config.gap_height;
        Rect {
            x: self.x,
            y,
            width: config.pipe_width,
            height: config.floor_y() - y,
        }
    }
}

/// Mutable simulation state, owned exclusively by the session and
/// advanced once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Bird's vertical position (top edge).
    pub bird_y: f64,
    /// Current vertical velocity (positive = downward).
    pub bird_velocity: f64,
    /// Spawn order matches spatial order: the front of the list is the
    /// left-most pipe.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: Phase,
    /// Milliseconds accumulated toward the next pipe spawn.
    pub spawn_timer_ms: f64,
}

impl World {
    /// Fresh world: bird centered vertically, no pipes, timer zeroed.
    pub fn new(config: &Config) -> Self {
        Self {
            bird_y: config.playfield_height / 2.0,
            bird_velocity: 0.0,
            pipes: Vec::new(),
            score: 0,
            phase: Phase::Idle,
            spawn_timer_ms: 0.0,
        }
    }

    pub fn bird_rect(&self, config: &Config) -> Rect {
        Rect {
            x: config.bird_x,
            y: self.bird_y,
            width: config.bird_width,
            height: config.bird_height,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_gap_range_rejected() {
        let config = Config {
            playfield_height: 200.0,
            ..Default::default()
        };
        // 200 - 80 - 150 - 40 < 40, no room for a gap
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateGapRange { .. })
        ));
    }

    #[test]
    fn test_gap_top_range_matches_margins() {
        let config = Config::default();
        let (min, max) = config.gap_top_range();
        assert_eq!(min, 40.0);
        assert_eq!(max, 640.0 - 80.0 - 150.0 - 40.0);
    }

    #[test]
    fn test_rect_overlap_and_separation() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let b = Rect {
            x: 5.0,
            y: 5.0,
            width: 10.0,
            height: 10.0,
        };
        let far = Rect {
            x: 100.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_rect_touching_edges_count_as_overlap() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let touching = Rect {
            x: 10.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(a.intersects(&touching));
    }

    #[test]
    fn test_new_world_centers_bird() {
        let config = Config::default();
        let world = World::new(&config);
        assert_eq!(world.bird_y, 320.0);
        assert_eq!(world.bird_velocity, 0.0);
        assert!(world.pipes.is_empty());
        assert_eq!(world.score, 0);
        assert_eq!(world.phase, Phase::Idle);
        assert_eq!(world.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_pipe_rects_span_playable_column() {
        let config = Config::default();
        let pipe = Pipe {
            x: 100.0,
            gap_top: 200.0,
            passed: false,
        };
        let top = pipe.top_rect(&config);
        let bottom = pipe.bottom_rect(&config);
        assert_eq!(top.y, 0.0);
        assert_eq!(top.height, 200.0);
        assert_eq!(bottom.y, 200.0 + config.gap_height);
        assert_eq!(bottom.y + bottom.height, config.floor_y());
    }
}
