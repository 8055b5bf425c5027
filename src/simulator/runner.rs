//! Simulation runner: drives sessions with a naive autopilot policy.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::engine::{Config, GameSession, Phase};
use crate::persistence::MemoryStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full batch and aggregate a report.
pub fn run_simulation(sim: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(sim.num_runs as usize);

    for run_idx in 0..sim.num_runs {
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(sim, &mut rng);
        if sim.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, {} ticks{}",
                run_idx + 1,
                sim.num_runs,
                stats.score,
                stats.ticks,
                if stats.timed_out { " (timeout)" } else { "" }
            );
        }
        runs.push(stats);
    }

    SimReport::from_runs(runs)
}

/// Play one run to completion (or the tick cap) under the autopilot.
fn simulate_single_run(sim: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut session = GameSession::new(Config::default(), Box::new(MemoryStore::new()))
        .expect("default config is valid");
    session.flap();

    let mut ticks = 0u64;
    while session.phase() == Phase::Running && ticks < sim.max_ticks_per_run {
        if autopilot_wants_flap(&session) {
            session.flap();
        }
        session.tick(sim.frame_ms, rng);
        ticks += 1;
    }

    RunStats {
        score: session.score(),
        ticks,
        timed_out: session.phase() == Phase::Running,
    }
}

/// Flap whenever the bird's midline sinks below the target line: the
/// next unpassed gap's center, or the playfield midline when no pipe is
/// ahead of the bird.
fn autopilot_wants_flap(session: &GameSession) -> bool {
    let config = session.config();
    let world = session.world();
    let bird_mid = world.bird_y + config.bird_height / 2.0;
    let target = world
        .pipes
        .iter()
        .find(|p| p.x + config.pipe_width >= config.bird_x)
        .map(|p| p.gap_top + config.gap_height / 2.0)
        .unwrap_or(config.playfield_height / 2.0);
    bird_mid > target
}
