//! The game session: lifecycle orchestration around the pure tick logic.
//!
//! Owns the world and the best-score store so the terminal front end and
//! the headless simulator share a single start/flap/tick/reset surface.
//! There is no global state; independent sessions can run side by side.

use super::logic::{process_flap, process_tick};
use super::types::{Config, ConfigError, Phase, World};
use crate::constants::BEST_SCORE_KEY;
use crate::persistence::{read_best_score, BestScoreStore};
use rand::Rng;

pub struct GameSession {
    config: Config,
    world: World,
    best_score: u32,
    store: Box<dyn BestScoreStore>,
}

impl GameSession {
    /// Build a session, rejecting configs that cannot place a pipe gap.
    ///
    /// The store is read once here to seed the best score; a missing or
    /// malformed value falls back to 0.
    pub fn new(config: Config, store: Box<dyn BestScoreStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        let best_score = read_best_score(store.as_ref());
        let world = World::new(&config);
        Ok(Self {
            config,
            world,
            best_score,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only world snapshot for rendering, taken after `tick` returns.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for state injection in tests and debug tooling.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Start (or restart) a run with a fresh world. No-op while a run is
    /// already in progress.
    pub fn start(&mut self) {
        if self.world.is_running() {
            return;
        }
        self.world = World::new(&self.config);
        self.world.phase = Phase::Running;
    }

    /// Force the session back to `Idle` with a fresh world. The persisted
    /// best score is untouched.
    pub fn reset(&mut self) {
        self.world = World::new(&self.config);
    }

    /// Flap input. From `Idle` or `Over` this starts a fresh run first;
    /// while running, repeated flaps simply keep overriding the velocity.
    pub fn flap(&mut self) {
        if !self.world.is_running() {
            self.start();
        }
        process_flap(&mut self.world, &self.config);
    }

    /// Advance the simulation by `delta_ms`. Ignored outside `Running`.
    pub fn tick(&mut self, delta_ms: f64, rng: &mut impl Rng) {
        if !self.world.is_running() {
            return;
        }
        process_tick(&mut self.world, &self.config, delta_ms, rng);
        if self.world.phase == Phase::Over {
            self.finish_run();
        }
    }

    /// Record the terminal score, exactly once per run. The store write
    /// is best-effort: a failed write never disturbs in-memory state.
    fn finish_run(&mut self) {
        if self.world.score > self.best_score {
            self.best_score = self.world.score;
            let _ = self
                .store
                .set(BEST_SCORE_KEY, &self.best_score.to_string());
        }
    }
}
