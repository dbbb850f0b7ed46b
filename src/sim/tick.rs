//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically.

use glam::Vec2;

use super::collision;
use super::state::{Asteroid, GamePhase, World};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Thrust key held
    pub thrust: bool,
    /// Rotate counterclockwise key held
    pub turn_left: bool,
    /// Rotate clockwise key held
    pub turn_right: bool,
    /// One-shot fire edge, latched on key release; the caller clears it
    /// after a tick consumes it
    pub fire: bool,
}

/// Advance the world by one fixed timestep
///
/// Order per tick: input application, ship-vs-asteroid sweep,
/// bullet-vs-asteroid sweep with batch resolution, then integration. Both
/// sweeps test the positions entities ended the previous tick on.
pub fn tick(world: &mut World, input: &TickInput) {
    world.time_ticks += 1;

    // Input only reaches a live ship
    if world.phase == GamePhase::Playing {
        world.ship.thrusting = input.thrust;
        if input.turn_right {
            world.ship.steer(1.0);
        }
        if input.turn_left {
            world.ship.steer(-1.0);
        }
        if input.fire {
            world.spawn_bullet();
        }

        resolve_ship_hits(world);
    }

    // In-flight bullets keep working after game over
    let hits = collision::collect_bullet_hits(&world.bullets, &world.asteroids);
    if !hits.is_empty() {
        resolve_bullet_hits(world, &hits);
    }

    let bounds = world.config.bounds();
    if world.ship.alive {
        world.ship.integrate(bounds);
    }
    for bullet in &mut world.bullets {
        bullet.integrate(bounds);
    }
    world.bullets.retain(|b| !b.expired());
    for asteroid in &mut world.asteroids {
        asteroid.integrate(bounds);
    }
}

/// One life lost per tick no matter how many asteroids overlap the ship
fn resolve_ship_hits(world: &mut World) {
    let overlaps = collision::ship_overlaps(world.ship.pos, &world.asteroids);
    if overlaps.is_empty() {
        return;
    }

    world.ship.reset(world.config.center());
    world.lives = world.lives.saturating_sub(1);
    log::info!(
        "ship hit by {} asteroid(s), {} lives left",
        overlaps.len(),
        world.lives
    );

    if world.lives == 0 {
        world.ship.alive = false;
        world.phase = GamePhase::GameOver;
        log::info!(
            "game over at tick {} with score {}",
            world.time_ticks,
            world.score
        );
    }
}

/// Resolve collected pairs in ascending asteroid order, then compact
///
/// Removal is mark-and-compact: resolution only flags `alive`, each
/// collection compacts once, and split children append after compaction so
/// they are not hit-testable until the next tick.
fn resolve_bullet_hits(world: &mut World, hits: &[collision::BulletHit]) {
    let mut children = Vec::new();

    for hit in hits {
        let (pos, tier) = {
            let parent = &mut world.asteroids[hit.asteroid];
            parent.alive = false;
            (parent.pos, parent.tier)
        };
        world.bullets[hit.bullet].alive = false;

        if let Some(child_tier) = tier.split() {
            let offset = Vec2::splat(SPLIT_OFFSET);
            let heading_a = world.random_heading();
            let heading_b = world.random_heading();
            children.push(Asteroid::new(pos - offset, heading_a, child_tier));
            children.push(Asteroid::new(pos + offset, heading_b, child_tier));
        }

        world.score += ASTEROID_SCORE;
    }

    world.asteroids.retain(|a| a.alive);
    world.bullets.retain(|b| b.alive);
    world.asteroids.append(&mut children);

    log::debug!(
        "resolved {} bullet hit(s), {} asteroids remain",
        hits.len(),
        world.asteroids.len()
    );
}
