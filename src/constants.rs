// Simulation timing constants
//
// Velocities and accelerations in the config are expressed per reference
// frame, so variable host deltas are normalized against this value.
pub const REFERENCE_FRAME_MS: f64 = 16.67;

// Margin kept between a spawned pipe gap and the ceiling / ground band
pub const GAP_TOP_MARGIN: f64 = 40.0;

// Persistence filenames under ~/.flap/
pub const BEST_SCORE_KEY: &str = "best_score";
pub const CONFIG_FILE: &str = "config.json";

// How long the front end blocks waiting for input each loop iteration
pub const INPUT_POLL_MS: u64 = 8;
