//! Circle collision detection
//!
//! Every hull in the game is a circle. The sweeps run against the positions
//! left by the previous integration step and only report what collided;
//! resolution (life loss, splitting, removal) happens afterwards in the tick
//! so no collection is ever mutated mid-scan.

use glam::Vec2;

use super::state::{Asteroid, Bullet};
use crate::consts::{BULLET_RADIUS, SHIP_COLLISION_RADIUS};

/// Strict circle overlap test
///
/// True only when the centers are closer than the radius sum. Touching
/// exactly at the boundary is a miss.
#[inline]
pub fn circle_overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    let radius_sum = r1 + r2;
    p1.distance_squared(p2) < radius_sum * radius_sum
}

/// A bullet-asteroid pair to resolve this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    pub asteroid: usize,
    pub bullet: usize,
}

/// Indices of every asteroid overlapping the ship's hit circle
pub fn ship_overlaps(ship_pos: Vec2, asteroids: &[Asteroid]) -> Vec<usize> {
    asteroids
        .iter()
        .enumerate()
        .filter(|(_, a)| {
            circle_overlap(
                ship_pos,
                SHIP_COLLISION_RADIUS,
                a.pos,
                a.tier.collision_radius(),
            )
        })
        .map(|(i, _)| i)
        .collect()
}

/// Collect every independent bullet-asteroid pair for this tick
///
/// Asteroids are scanned in ascending index order and claim the first
/// still-unclaimed bullet overlapping them, so each bullet spends itself on
/// at most one asteroid and each asteroid is destroyed at most once. The
/// returned pairs are already in resolution order.
pub fn collect_bullet_hits(bullets: &[Bullet], asteroids: &[Asteroid]) -> Vec<BulletHit> {
    let mut hits = Vec::new();
    let mut claimed = vec![false; bullets.len()];

    for (ai, asteroid) in asteroids.iter().enumerate() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if claimed[bi] {
                continue;
            }
            if circle_overlap(
                bullet.pos,
                BULLET_RADIUS,
                asteroid.pos,
                asteroid.tier.collision_radius(),
            ) {
                claimed[bi] = true;
                hits.push(BulletHit {
                    asteroid: ai,
                    bullet: bi,
                });
                break;
            }
        }
    }

    hits
}
