//! Per-tick simulation logic: physics integration, pipe scrolling,
//! scoring, and collision detection.
//!
//! These functions are pure over the world and config so the session,
//! the simulator, and tests all drive the same code. Randomness is
//! injected so callers can supply a seeded generator.

use super::types::{Config, Phase, Pipe, World};
use crate::constants::REFERENCE_FRAME_MS;
use rand::Rng;

/// Advance the world by `delta_ms` of real time.
///
/// No-op unless the world is `Running`. Negative deltas are clamped to
/// zero so a confused host clock cannot corrupt the state; a zero delta
/// moves nothing and spawns nothing.
pub fn process_tick(world: &mut World, config: &Config, delta_ms: f64, rng: &mut impl Rng) {
    if !world.is_running() {
        return;
    }
    let delta_ms = delta_ms.max(0.0);
    let dt = delta_ms / REFERENCE_FRAME_MS;

    // Gravity, with a one-directional cap on falling speed
    world.bird_velocity += config.gravity * dt;
    if world.bird_velocity > config.max_fall_speed {
        world.bird_velocity = config.max_fall_speed;
    }
    world.bird_y += world.bird_velocity * dt;

    // At most one spawn per tick, however far the timer overshot; the
    // timer restarts from zero rather than carrying the overshoot.
    world.spawn_timer_ms += delta_ms;
    if delta_ms > 0.0 && world.spawn_timer_ms >= config.spawn_interval_ms {
        spawn_pipe(world, config, rng);
        world.spawn_timer_ms = 0.0;
    }

    // Scroll, then drop pipes whose trailing edge left the playfield
    for pipe in &mut world.pipes {
        pipe.x -= config.scroll_speed * dt;
    }
    world.pipes.retain(|p| p.x + config.pipe_width >= 0.0);

    score_passed_pipes(world, config);

    if check_collisions(world, config) {
        world.phase = Phase::Over;
    }
}

/// Apply a flap impulse: velocity is overridden, not accumulated.
pub fn process_flap(world: &mut World, config: &Config) {
    world.bird_velocity = config.flap_impulse;
}

/// Spawn one pipe at the right edge with a uniformly random gap position.
fn spawn_pipe(world: &mut World, config: &Config, rng: &mut impl Rng) {
    let (min_gap_top, max_gap_top) = config.gap_top_range();
    let gap_top = rng.gen_range(min_gap_top..=max_gap_top);
    world.pipes.push(Pipe {
        x: config.playfield_width,
        gap_top,
        passed: false,
    });
}

/// Score each pipe once, the moment its trailing edge clears the bird's
/// fixed horizontal position.
fn score_passed_pipes(world: &mut World, config: &Config) {
    for pipe in &mut world.pipes {
        if !pipe.passed && pipe.x + config.pipe_width < config.bird_x {
            pipe.passed = true;
            world.score += 1;
        }
    }
}

/// True if the bird hit the ceiling, the ground band, or any pillar.
pub fn check_collisions(world: &World, config: &Config) -> bool {
    if world.bird_y <= 0.0 || world.bird_y + config.bird_height >= config.floor_y() {
        return true;
    }
    let bird = world.bird_rect(config);
    world
        .pipes
        .iter()
        .any(|pipe| bird.intersects(&pipe.top_rect(config)) || bird.intersects(&pipe.bottom_rect(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_world(config: &Config) -> World {
        let mut world = World::new(config);
        world.phase = Phase::Running;
        world
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let config = Config::default();
        let mut world = running_world(&config);
        let initial_y = world.bird_y;
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert!(world.bird_y > initial_y);
    }

    #[test]
    fn test_reference_frame_integration() {
        // One exactly-nominal frame: dt factor is 1, so velocity gains
        // one gravity step and position gains one velocity step.
        let config = Config::default();
        let mut world = running_world(&config);
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert!((world.bird_velocity - config.gravity).abs() < 1e-9);
        assert!((world.bird_y - (320.0 + config.gravity)).abs() < 1e-9);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_velocity = 11.0;
        process_flap(&mut world, &config);
        assert_eq!(world.bird_velocity, config.flap_impulse);
        // Repeated flaps keep overriding, never add up
        process_flap(&mut world, &config);
        assert_eq!(world.bird_velocity, config.flap_impulse);
    }

    #[test]
    fn test_fall_speed_capped_but_rise_is_not() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_velocity = 100.0;
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert!(world.bird_velocity <= config.max_fall_speed);

        let mut world = running_world(&config);
        world.bird_velocity = -100.0;
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        // Upward speed passes through the clamp untouched
        assert!(world.bird_velocity < -(config.max_fall_speed));
    }

    #[test]
    fn test_tick_ignored_when_not_running() {
        let config = Config::default();
        let mut world = World::new(&config);
        let before = world.clone();
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert_eq!(world, before);
    }

    #[test]
    fn test_zero_and_negative_deltas_are_inert() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.spawn_timer_ms = config.spawn_interval_ms + 500.0;
        let before = world.clone();
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, 0.0, &mut rng);
        assert_eq!(world, before);
        process_tick(&mut world, &config, -100.0, &mut rng);
        assert_eq!(world, before);
    }

    #[test]
    fn test_spawn_timer_resets_to_zero() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.spawn_timer_ms = config.spawn_interval_ms - 1.0;
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, 2.0, &mut rng);
        assert_eq!(world.pipes.len(), 1);
        assert_eq!(world.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_at_most_one_spawn_per_tick() {
        let config = Config::default();
        let mut world = running_world(&config);
        let mut rng = rand::thread_rng();
        // A delta ten intervals long still produces a single pipe
        process_tick(
            &mut world,
            &config,
            config.spawn_interval_ms * 10.0,
            &mut rng,
        );
        assert_eq!(world.pipes.len(), 1);
    }

    #[test]
    fn test_spawned_gap_top_stays_in_range() {
        let config = Config::default();
        let (min, max) = config.gap_top_range();
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut world = running_world(&config);
            world.spawn_timer_ms = config.spawn_interval_ms;
            process_tick(&mut world, &config, 1.0, &mut rng);
            let gap_top = world.pipes[0].gap_top;
            assert!(gap_top >= min && gap_top <= max);
        }
    }

    #[test]
    fn test_pipes_scroll_left() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.pipes.push(Pipe {
            x: 300.0,
            gap_top: 250.0,
            passed: false,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert!((world.pipes[0].x - (300.0 - config.scroll_speed)).abs() < 1e-9);
    }

    #[test]
    fn test_off_screen_pipe_removed() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.pipes.push(Pipe {
            x: -config.pipe_width - 0.5,
            gap_top: 250.0,
            passed: true,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, 1.0, &mut rng);
        assert!(world.pipes.is_empty());
    }

    #[test]
    fn test_scoring_marks_pipe_once() {
        let config = Config::default();
        let mut world = running_world(&config);
        // Gap centered on the bird so it survives the pass
        let gap_top = world.bird_y - config.gap_height / 2.0;
        world.pipes.push(Pipe {
            x: config.bird_x - config.pipe_width + 1.0,
            gap_top,
            passed: false,
        });
        let mut rng = rand::thread_rng();
        let mut increments = 0;
        for _ in 0..5 {
            let before = world.score;
            process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
            increments += world.score - before;
            // Keep the bird airborne mid-gap
            world.bird_y = 320.0;
            world.bird_velocity = 0.0;
        }
        assert_eq!(increments, 1);
        assert!(world.pipes.is_empty() || world.pipes[0].passed);
    }

    #[test]
    fn test_ground_collision_ends_run() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_y = config.floor_y() - config.bird_height;
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert_eq!(world.phase, Phase::Over);
    }

    #[test]
    fn test_ceiling_collision_ends_run() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_y = 0.0;
        world.bird_velocity = config.flap_impulse;
        let mut rng = rand::thread_rng();
        process_tick(&mut world, &config, REFERENCE_FRAME_MS, &mut rng);
        assert_eq!(world.phase, Phase::Over);
    }

    #[test]
    fn test_bird_in_gap_does_not_collide() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_y = 260.0;
        world.pipes.push(Pipe {
            x: config.bird_x,
            gap_top: 200.0,
            passed: false,
        });
        // 200 < 260 and 260 + 24 < 350: strictly inside the gap
        assert!(!check_collisions(&world, &config));
    }

    #[test]
    fn test_bird_above_gap_collides() {
        let config = Config::default();
        let mut world = running_world(&config);
        world.bird_y = 199.0;
        world.pipes.push(Pipe {
            x: config.bird_x,
            gap_top: 200.0,
            passed: false,
        });
        assert!(check_collisions(&world, &config));
    }

    #[test]
    fn test_bird_below_gap_collides() {
        let config = Config::default();
        let mut world = running_world(&config);
        // Bottom pillar starts at 200 + 150 = 350; bird bottom pokes 1 below
        world.bird_y = 350.0 - config.bird_height + 1.0;
        world.pipes.push(Pipe {
            x: config.bird_x,
            gap_top: 200.0,
            passed: false,
        });
        assert!(check_collisions(&world, &config));
    }
}
